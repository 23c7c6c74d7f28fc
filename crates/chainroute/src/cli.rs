//! CLI command definitions using `clap`.

use clap::{Arg, Command as ClapCommand};

/// Build the top-level CLI.
pub fn build() -> ClapCommand {
    ClapCommand::new("chainroute")
        .about("Protocol command registry - route DeFi commands to their protocols")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(cmd_commands())
        .subcommand(cmd_resolve())
        .subcommand(cmd_protocols())
}

fn cmd_commands() -> ClapCommand {
    ClapCommand::new("commands")
        .about("List the commands registered for a protocol")
        .arg(
            Arg::new("protocol")
                .required(true)
                .help("Protocol name, e.g. uniswap-v4"),
        )
        .after_help(after_help_text(&[
            "chainroute commands uniswap-v4      List Uniswap v4 commands",
            "chainroute commands aave-v3         List Aave v3 commands",
            "chainroute commands sushiswap       Unknown protocols yield an empty list",
        ]))
}

fn cmd_resolve() -> ClapCommand {
    ClapCommand::new("resolve")
        .about("Resolve the protocol a command belongs to")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Command name, e.g. v4_swap"),
        )
        .arg(
            Arg::new("protocol")
                .long("protocol")
                .value_name("PROTOCOL")
                .help("Protocol tag carried by the command (defaults to core)"),
        )
        .after_help(after_help_text(&[
            "chainroute resolve v4_swap --protocol uniswap-v4   Resolve a tagged command",
            "chainroute resolve deploy                          Untagged commands resolve to core",
        ]))
}

fn cmd_protocols() -> ClapCommand {
    ClapCommand::new("protocols")
        .about("List every protocol in the registry with its commands")
        .after_help(after_help_text(&[
            "chainroute protocols                Dump the full registry as JSON",
        ]))
}

fn after_help_text(examples: &[&str]) -> String {
    let mut text = String::from("EXAMPLES:\n");
    for example in examples {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
    }
    text
}
