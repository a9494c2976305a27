use anyhow::Context;
use clap::Parser;
use generator::demo::{demo_session, DemoConfig};
use std::fs;
use std::path::PathBuf;
use workflow::config::SessionConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline session driver for the incline-lab bench")]
struct Args {
    /// Load a session description from YAML
    #[arg(long)]
    session: Option<PathBuf>,
    /// Generate a seeded demo session instead of loading one
    #[arg(long, default_value_t = false)]
    demo: bool,
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Jitter applied to generated readings
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
    /// Number of repeated trials in the generated session
    #[arg(long, default_value_t = 5)]
    trials: usize,
    /// Write the computed summary as pretty JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.session {
        SessionConfig::load(path)?
    } else if args.demo {
        demo_session(&DemoConfig {
            seed: args.seed,
            noise: args.noise,
            trials: args.trials,
        })
    } else {
        SessionConfig::default()
    };

    let runner = Runner::new(config);
    let summary = runner.execute()?;

    report::render::print_summary(&summary);

    let (edits, computes, resets) = runner.stats().snapshot();
    println!(
        "Session actions -> edits {}, computes {}, resets {}",
        edits, computes, resets
    );

    if let Some(path) = args.report {
        let body = serde_json::to_string_pretty(&summary).context("serializing session report")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, body).with_context(|| format!("writing report {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
