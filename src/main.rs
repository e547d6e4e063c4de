use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clam::{Report, selfcheck};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn", value_name = "FILTER")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every matcher against fixed inputs and print a Markdown report
    Check {
        /// Only report failures
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let code = match args.command {
        Command::Check { quiet } => {
            let mut report = Report::new(quiet);
            selfcheck::run(&mut report);
            print!("{report}");
            info!(
                passed = report.passed(),
                failed = report.failed(),
                "self-check finished"
            );
            report.exit_code()
        }
    };
    std::process::exit(code);
}
