//! Demonstration argument loop.
//!
//! Reads its arguments straight from the environment so that `--` and
//! `-h` reach the matchers exactly as typed.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = clam::demo::run(args.as_slice(), &mut stdout) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
