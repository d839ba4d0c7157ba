use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {

    // 1. Set up logging (stderr, RUST_LOG overrides the default level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // 2. Parse commandline arguments
    let cli = vtarget::args::VtargetCli::parse();

    // 3. Run the command
    if let Err(err) = vtarget::run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
