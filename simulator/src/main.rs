use anyhow::Context;
use clap::Parser;
use generator::profile::{build_echogram_frame_from_config, GeneratorConfig};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Echosounder background-noise workflow driver")]
struct Args {
    /// Run a single synthetic echogram and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 5.0)]
    sample_bin: f64,
    #[arg(long, default_value_t = 20.0)]
    ping_bin: f64,
    #[arg(long, default_value_t = 0.01)]
    absorption: f64,
    #[arg(long, default_value_t = 500)]
    samples: usize,
    #[arg(long, default_value_t = 100)]
    pings: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.sample_bin,
            args.ping_bin,
            args.absorption,
            args.samples,
            args.pings,
        )
    };

    log::info!("workflow config: {:?}", workflow_config);

    let runner = Runner::new(workflow_config.clone());
    let generator_config = GeneratorConfig {
        samples: workflow_config.samples,
        pings: workflow_config.pings,
        absorption_db_per_m: workflow_config.absorption_db_per_m,
        ..Default::default()
    };
    let frame = build_echogram_frame_from_config(&generator_config)?;

    if args.offline {
        let result = runner.execute(&frame)?;

        println!(
            "Offline run -> {} samples x {} pings, valid fraction {:.3}, degenerate {}",
            result.summary.samples,
            result.summary.pings,
            result.summary.valid_fraction,
            result.degenerate
        );
        for note in &result.notes {
            println!("  {}", note);
        }

        let report =
            serde_json::to_string(&result.summary).context("serializing noise summary")?;
        let report_path = PathBuf::from("tools/data/offline_noise.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        writeln!(file, "{}", report)?;
    }

    Ok(())
}
