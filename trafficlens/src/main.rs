use clap::{Parser, Subcommand};
use trafficlens_core::cli;
use trafficlens_core::cli::report::{ReportArgs, run_report};
use trafficlens_core::logging::{self, LogMode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "trafficlens",
    version,
    about = "trafficlens: request-log reports rendered as a dashboard"
)]
struct Cli {
    /// Human-readable logs instead of JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the configured reports over a request log
    Report(ReportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Inspect available plugins
    Plugin {
        #[command(subcommand)]
        cmd: cli::plugin::PluginCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let mode = if cli.pretty {
        LogMode::Pretty
    } else {
        logging::default_log_mode()
    };
    init_logging(mode);

    let result = match cli.command {
        Command::Report(args) => run_report(args),
        Command::Config { cmd } => cli::conf::run(cmd),
        Command::Plugin { cmd } => cli::plugin::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
