use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("camcfg")
        .version("0.1.0")
        .about("Remote configuration client for the camera monitoring device.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom client configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("device")
                .short('u')
                .long("device")
                .value_name("URL")
                .help("Device base URL, overrides the client configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("show")
                .about("Fetches the device configuration and prints it grouped by section")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Also write the fetched configuration as JSON to FILE")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Applies field edits to the device configuration and saves them")
                .arg(
                    Arg::new("set")
                        .short('s')
                        .long("set")
                        .value_name("FIELD=VALUE")
                        .help("Field assignment, e.g. --set motion_detection=true --set fallback_fps=10 (repeatable)")
                        .action(ArgAction::Append)
                        .required(true),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Validate and print the would-be configuration without saving")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-backup")
                        .long("no-backup")
                        .help("Skip writing a local backup of the current configuration before saving")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Applies field edits, then discards them and prints the restored configuration")
                .arg(
                    Arg::new("set")
                        .short('s')
                        .long("set")
                        .value_name("FIELD=VALUE")
                        .help("Field assignment to apply and then discard (repeatable)")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("check").about("Verifies the device configuration API is reachable and healthy"))
}
