//! papers command-line entry point.
//!
//! Loads records, watchlist and country table from JSON files, decides every
//! record and prints the decision list as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use papers::{
    load_config, load_countries, load_records, load_watchlist, Decision, DecisionEngine,
    EngineConfig, Evaluation, ResolutionPolicy, RuleFlags,
};

/// Command-line configuration
struct Args {
    input: PathBuf,
    watchlist: PathBuf,
    countries: PathBuf,
    config: Option<PathBuf>,
    policy: Option<ResolutionPolicy>,
    citizen: Option<String>,
    explain: bool,
}

fn usage() {
    println!("papers - border-entry decision engine");
    println!();
    println!("USAGE:");
    println!("    papers [OPTIONS] <INPUT> <WATCHLIST> <COUNTRIES>");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>       Engine configuration (JSON)");
    println!("    -p, --policy <POLICY>     strict | legacy-citizen-first [default: strict]");
    println!("        --citizen <CODE>      Citizen country code [default: KAN]");
    println!("    -e, --explain             Print the rule flags with every decision");
    println!("    -h, --help                Print help information");
    println!();
    println!("Set RUST_LOG=debug to trace every record.");
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    std::process::exit(2);
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut positional = Vec::new();
    let mut config = None;
    let mut policy = None;
    let mut citizen = None;
    let mut explain = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--config requires a value");
                };
                config = Some(PathBuf::from(value));
                i += 2;
            }
            "--policy" | "-p" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--policy requires a value");
                };
                let Some(parsed) = ResolutionPolicy::from_name(value) else {
                    fail(&format!("unknown policy: {value}"));
                };
                policy = Some(parsed);
                i += 2;
            }
            "--citizen" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--citizen requires a value");
                };
                citizen = Some(value.clone());
                i += 2;
            }
            "--explain" | "-e" => {
                explain = true;
                i += 1;
            }
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => fail(&format!("unknown argument: {arg}")),
            arg => {
                positional.push(PathBuf::from(arg));
                i += 1;
            }
        }
    }

    let [input, watchlist, countries]: [PathBuf; 3] = positional
        .try_into()
        .unwrap_or_else(|_| fail("expected <INPUT> <WATCHLIST> <COUNTRIES>"));

    Args {
        input,
        watchlist,
        countries,
        config,
        policy,
        citizen,
        explain,
    }
}

#[derive(Serialize)]
struct Explained {
    decision: Decision,
    reason: Option<&'static str>,
    flags: RuleFlags,
    citizen_bypass: bool,
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(citizen) = args.citizen {
        config.citizen_country = citizen;
    }

    // Reference data and records are fully loaded before evaluation starts.
    let records = load_records(&args.input)?;
    let watchlist = load_watchlist(&args.watchlist)?;
    let countries = load_countries(&args.countries)?;

    let engine = DecisionEngine::with_config(&watchlist, &countries, config);
    let evaluations = engine.evaluate_all(&records)?;

    Ok(render(&evaluations, args.explain)?)
}

fn render(evaluations: &[Evaluation], explain: bool) -> serde_json::Result<String> {
    if explain {
        let explained: Vec<Explained> = evaluations
            .iter()
            .map(|e| Explained {
                decision: e.decision,
                reason: e.flags.reason(),
                flags: e.flags,
                citizen_bypass: e.citizen_bypass,
            })
            .collect();
        serde_json::to_string_pretty(&explained)
    } else {
        let decisions: Vec<Decision> = evaluations.iter().map(|e| e.decision).collect();
        serde_json::to_string(&decisions)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluations() -> Vec<Evaluation> {
        vec![
            Evaluation {
                decision: Decision::Accept,
                flags: RuleFlags::default(),
                citizen_bypass: false,
            },
            Evaluation {
                decision: Decision::Quarantine,
                flags: RuleFlags {
                    quarantine: true,
                    ..RuleFlags::default()
                },
                citizen_bypass: false,
            },
        ]
    }

    #[test]
    fn decisions_render_as_json_array() {
        let output = render(&evaluations(), false).unwrap();
        let parsed: Vec<Decision> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![Decision::Accept, Decision::Quarantine]);
    }

    #[test]
    fn explained_output_carries_flags() {
        let output = render(&evaluations(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[1]["flags"]["quarantine"], serde_json::Value::Bool(true));
        assert_eq!(parsed[0]["citizen_bypass"], serde_json::Value::Bool(false));
    }
}
