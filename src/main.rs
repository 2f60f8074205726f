use planetsim::{run_2d, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/; the built-in solar system runs when omitted
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario = match args.file_name {
        Some(name) => {
            let scenario_cfg = load_scenario_from_yaml(&name)?;
            Scenario::build(scenario_cfg)
        }
        None => Scenario::solar_system(),
    };

    run_2d(scenario);

    Ok(())
}
