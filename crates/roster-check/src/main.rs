//! roster-check CLI tool
//!
//! Evaluates a roster snapshot against the Town Hall tier caps.
//!
//! Usage:
//!   roster-check slots [snapshot]
//!   roster-check can-join <tier|none> [snapshot]
//!   roster-check audit [snapshot]

mod command;
mod config;
mod error;
mod snapshot;

use command::Command;
use config::CheckConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!("roster-check - Check team rosters against Town Hall tier caps");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  roster-check slots [snapshot]               Show counts and cascaded caps");
    eprintln!("  roster-check can-join <tier|none> [snapshot] Decide whether a candidate may join");
    eprintln!("  roster-check audit [snapshot]               Report tiers over their cap");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROSTER_SNAPSHOT      Snapshot path when none is given (default: ./roster.json)");
    eprintln!("  ROSTER_CHECK_FORMAT  Output format: text or json (default: text)");
    eprintln!("  RUST_LOG             Log filter (default: roster_check=info,roster_eligibility=info)");
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_check=info,roster_eligibility=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "-h" | "--help" | "help") {
        print_usage();
        std::process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let result = CheckConfig::from_env().and_then(|config| {
        let command = Command::parse(&args)?;
        command.run(&config)
    });

    match result {
        Ok(outcome) => {
            println!("{}", outcome.output);
            std::process::exit(outcome.exit_code);
        }
        Err(e @ error::Error::Usage(_)) => {
            eprintln!("Error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "roster check failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
