use trajsim::{bench_gravity, Scenario, ScenarioConfig, TrajectoryTable};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; bare names are looked up in `scenarios/`
    #[arg(short, long, default_value = "two_body.yaml")]
    file_name: String,

    /// Write the position table as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Time serial vs parallel force evaluation and exit
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let every = scenario_cfg.export.every;

    let mut scenario = Scenario::build(scenario_cfg)?;
    scenario.run()?;

    let labels = scenario.labels();
    let traj = scenario
        .trajectory()
        .context("simulation produced no trajectory")?;

    let last = traj.num_iterations() - 1;
    for (b, label) in labels.iter().enumerate() {
        let p = traj.position(b, last);
        info!("{label}: final position ({:.6}, {:.6}, {:.6})", p.x, p.y, p.z);
    }

    if let Some(path) = args.csv {
        let table = TrajectoryTable::from_trajectory(&traj, &labels, every);
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        table.write_csv(BufWriter::new(file))?;
        info!("wrote {} rows to {}", table.rows.len(), path.display());
    }

    Ok(())
}
