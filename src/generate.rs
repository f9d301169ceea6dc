// Synthetic dataset generator
//
// Produces the four input tables with a fixed seed so repeated runs
// write identical relational structure: 10 companies, 100 customers,
// 1000 transactions, 100 risk assessments.

use anyhow::{Context, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

use crate::entities::{content_hash, PaymentMethod};
use crate::store::{
    CompanyRecord, CustomerRecord, RecordSet, RiskAssessmentRecord, TransactionRecord,
    COMPANIES_FILE, CUSTOMERS_FILE, RISK_ASSESSMENTS_FILE, TRANSACTIONS_FILE,
};

/// Fixed seed for reproducible generation
pub const GENERATOR_SEED: u64 = 42;

const COMPANY_COUNT: usize = 10;
const CUSTOMER_COUNT: usize = 100;
const TRANSACTION_COUNT: usize = 1_000;
const ASSESSMENT_COUNT: usize = 100;

const GENERATED_METHODS: [PaymentMethod; 3] = [
    PaymentMethod::Credit,
    PaymentMethod::Debit,
    PaymentMethod::Transfer,
];

/// Row counts of a generated dataset
#[derive(Debug, Clone, Copy)]
pub struct DatasetSummary {
    pub companies: usize,
    pub customers: usize,
    pub transactions: usize,
    pub risk_assessments: usize,
}

/// Generate the full dataset and write it as CSV into `dir`
pub fn generate_dataset(dir: &Path) -> Result<DatasetSummary> {
    let mut rng = StdRng::seed_from_u64(GENERATOR_SEED);
    let records = build_dataset(&mut rng);
    write_dataset(dir, &records)?;

    Ok(DatasetSummary {
        companies: records.companies.len(),
        customers: records.customers.len(),
        transactions: records.transactions.len(),
        risk_assessments: records.risk_assessments.len(),
    })
}

/// Build the dataset in memory. Transactions reference customers and
/// companies uniformly at random; each risk assessment is tied to a
/// random transaction of a customer that has at least one.
pub fn build_dataset<R: Rng>(rng: &mut R) -> RecordSet {
    let companies: Vec<CompanyRecord> = (1..=COMPANY_COUNT)
        .map(|i| CompanyRecord {
            company_id: i.to_string(),
            name: format!("Company {}", i),
            address: format!("Address {}", i),
        })
        .collect();

    let customers: Vec<CustomerRecord> = (1..=CUSTOMER_COUNT)
        .map(|i| CustomerRecord {
            customer_id: i.to_string(),
            name: format!("Customer {}", i),
            phone: format!("Phone {}", i),
            address: format!("Address {}", i),
        })
        .collect();

    let timestamp = Local::now().format(crate::synth::TIMESTAMP_FORMAT).to_string();

    // Transactions plus the customer -> transactions attribution needed
    // to pick assessment targets afterwards
    let mut per_customer: Vec<Vec<usize>> = vec![Vec::new(); CUSTOMER_COUNT];
    let mut transactions = Vec::with_capacity(TRANSACTION_COUNT);
    for i in 1..=TRANSACTION_COUNT {
        let customer_idx = rng.gen_range(0..CUSTOMER_COUNT);
        let company_idx = rng.gen_range(0..COMPANY_COUNT);
        let amount = rng.gen_range(1_000..=5_000) as f64;
        let method = GENERATED_METHODS[rng.gen_range(0..GENERATED_METHODS.len())];

        let transaction_id = i.to_string();
        let hash = content_hash(&transaction_id, amount, method, &timestamp);

        per_customer[customer_idx].push(transactions.len());
        transactions.push(TransactionRecord {
            transaction_id,
            amount,
            method: method.as_str().to_string(),
            customer_id: customers[customer_idx].customer_id.clone(),
            company_id: companies[company_idx].company_id.clone(),
            timestamp: timestamp.clone(),
            hash,
        });
    }

    let active_customers: Vec<usize> = (0..CUSTOMER_COUNT)
        .filter(|&i| !per_customer[i].is_empty())
        .collect();

    let mut risk_assessments = Vec::with_capacity(ASSESSMENT_COUNT);
    for i in 1..=ASSESSMENT_COUNT {
        let customer_idx = active_customers[rng.gen_range(0..active_customers.len())];
        let owned = &per_customer[customer_idx];
        let transaction = &transactions[owned[rng.gen_range(0..owned.len())]];

        risk_assessments.push(RiskAssessmentRecord {
            assessment_id: i.to_string(),
            risk_score: rng.gen_range(0.5..0.9),
            customer_id: customers[customer_idx].customer_id.clone(),
            transaction_id: transaction.transaction_id.clone(),
            timestamp: timestamp.clone(),
        });
    }

    RecordSet {
        companies,
        customers,
        transactions,
        risk_assessments,
    }
}

/// Write all four tables as CSV files into `dir`, creating it if needed
pub fn write_dataset(dir: &Path, records: &RecordSet) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    write_table(&dir.join(COMPANIES_FILE), &records.companies)?;
    write_table(&dir.join(CUSTOMERS_FILE), &records.customers)?;
    write_table(&dir.join(TRANSACTIONS_FILE), &records.transactions)?;
    write_table(&dir.join(RISK_ASSESSMENTS_FILE), &records.risk_assessments)?;

    Ok(())
}

fn write_table<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
