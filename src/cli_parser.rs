//! CLI help text for gvk-report.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "gvk-report - Unique Kubernetes GVKs watched by scanning rules v{}

USAGE:
    gvk-report [COMMAND] [OPTIONS]

COMMANDS:
    report       Print the sorted unique GVKs and their count (default)
    config       Show effective logging configuration
    version      Show version information
    help         Show this help message

OPTIONS:
    -h, --help     Show help for command
    -V, --version  Show version information

ENVIRONMENT:
    GVK_REPORT_LOG_LEVEL   Log filter (default: warn)
    GVK_REPORT_LOG_FORMAT  Log format on stderr (pretty, json)

EXIT CODES:
    0  Success
    1  Failure (usage error, stdout not writable)
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "report" => print_report_help(),
        "config" => print_config_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'gvk-report help' for general usage.",
                command
            );
        }
    }
}

fn print_report_help() {
    eprintln!(
        "gvk-report report - Print unique GVKs

USAGE:
    gvk-report report [--json]

OPTIONS:
    --json  Output in JSON format instead of text

DESCRIPTION:
    Flattens the embedded GVK lists, removes duplicates and prints them
    sorted in ascending byte order, followed by the unique count.

EXAMPLES:
    gvk-report
    gvk-report report --json
"
    );
}

fn print_config_help() {
    eprintln!(
        "gvk-report config - Show configuration

USAGE:
    gvk-report config

DESCRIPTION:
    Prints the effective GVK_REPORT_LOG_* values as KEY=value lines.
"
    );
}
