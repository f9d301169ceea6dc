use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use fin_ecosystem::{generate_dataset, run_simulation, RecordSet, RiskClass};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_NEW_TRANSACTIONS: usize = 10;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("generate") => {
            let dir = args.get(2).map(String::as_str).unwrap_or(DEFAULT_DATA_DIR);
            run_generate(Path::new(dir))
        }
        Some("simulate") | None => {
            let count = match args.get(2) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid transaction count '{}'", raw))?,
                None => DEFAULT_NEW_TRANSACTIONS,
            };
            let dir = args.get(3).map(String::as_str).unwrap_or(DEFAULT_DATA_DIR);
            run_simulate(Path::new(dir), count)
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: fin-ecosystem generate [dir]");
            eprintln!("       fin-ecosystem simulate [count] [dir]");
            std::process::exit(1);
        }
    }
}

fn run_generate(dir: &Path) -> Result<()> {
    println!("Generating synthetic dataset in {}...", dir.display());

    let summary = generate_dataset(dir)?;

    println!("✓ Companies:        {}", summary.companies);
    println!("✓ Customers:        {}", summary.customers);
    println!("✓ Transactions:     {}", summary.transactions);
    println!("✓ Risk assessments: {}", summary.risk_assessments);

    Ok(())
}

fn run_simulate(dir: &Path, count: usize) -> Result<()> {
    println!("Loading records from {}...", dir.display());
    let records = RecordSet::load_from_dir(dir)
        .with_context(|| format!("failed to load input tables from {}", dir.display()))?;
    println!(
        "✓ Loaded {} companies, {} customers, {} transactions, {} risk assessments",
        records.companies.len(),
        records.customers.len(),
        records.transactions.len(),
        records.risk_assessments.len()
    );

    let outcome = run_simulation(&records, count).context("simulation failed")?;

    println!(
        "✓ Trained risk model: score = {:.6} + {:.6} * amount",
        outcome.model.intercept(),
        outcome.model.slope()
    );
    println!("\nScoring {} new transactions:", outcome.scored.len());

    for scored in &outcome.scored {
        println!(
            "Predicted Risk Score for Transaction {}: {:.2}",
            scored.transaction_id, scored.score
        );
        match scored.class {
            RiskClass::Risky => println!("Transaction {} is risky!", scored.transaction_id),
            RiskClass::NotRisky => {
                println!("Transaction {} is not risky.", scored.transaction_id)
            }
        }
    }

    Ok(())
}
