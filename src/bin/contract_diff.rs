// src/bin/contract_diff.rs
//
// Compare freshly collected selector check results against the stored
// baseline (or save a new one):
//
//   contract_diff <results.json>                  # diff against baseline
//   contract_diff <results.json> --save           # save results as baseline
//   contract_diff <results.json> --baseline <p>   # use a non-default path
//
// Exit codes: 0 = clean, 1 = breaking drift, 2 = no baseline saved yet.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use cdnreport::contract::{diff, Baseline, CheckResult};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_BASELINE: &str = "golden/contract_baseline.json";

fn main() -> Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // 1) parse arguments
    let mut args = env::args().skip(1);
    let results_path = PathBuf::from(
        args.next()
            .expect("Usage: contract_diff <RESULTS_JSON> [--baseline <PATH>] [--save]"),
    );
    let mut baseline_path = PathBuf::from(DEFAULT_BASELINE);
    let mut save = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--save" => save = true,
            "--baseline" => {
                baseline_path =
                    PathBuf::from(args.next().expect("--baseline requires a path argument"));
            }
            other => panic!("unknown argument: {}", other),
        }
    }

    // 2) load fresh check results
    let text = fs::read_to_string(&results_path)
        .with_context(|| format!("reading results {}", results_path.display()))?;
    let results: Vec<CheckResult> =
        serde_json::from_str(&text).with_context(|| format!("parsing results {}", results_path.display()))?;

    let passed = results.iter().filter(|r| r.found).count();
    info!("{}/{} selectors found", passed, results.len());

    // 3) save as baseline and stop
    if save {
        Baseline::new(results).save(&baseline_path)?;
        return Ok(ExitCode::SUCCESS);
    }

    // 4) diff against the stored baseline
    if !baseline_path.exists() {
        error!(
            "no baseline found at {}; run with --save first",
            baseline_path.display()
        );
        return Ok(ExitCode::from(2));
    }
    let baseline = Baseline::load(&baseline_path)?;
    let report = diff(&baseline, &results);

    if report.is_breaking() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
