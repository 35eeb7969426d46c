use anyhow::Context;
use clap::Parser;
use game_slots::utils::logger;
use game_slots::{CliConfig, SlotCounter};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let json = config.json;
    let strict = config.strict;
    let counter = SlotCounter::new(config);

    let summary = if strict {
        match counter.summarize_strict() {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("Slot count failed: {}", e);
                eprintln!("{}", e.user_friendly_message());
                eprintln!("Suggestion: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    } else {
        counter.summarize()
    };

    if json {
        let out = serde_json::to_string(&summary).context("Failed to serialize slot summary")?;
        println!("{}", out);
    } else {
        println!("{}", summary.line());
    }

    Ok(())
}
