// Record Store - raw tabular records loaded from CSV
//
// Records are the on-disk shape of the data: plain rows with the exact
// column names the external tables use. Entities (src/entities) are built
// from these by the graph builder; no linking happens here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

// ============================================================================
// RECORD TYPES (column names preserved exactly)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "CompanyID")]
    pub company_id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomerRecord {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Method")]
    pub method: String,

    #[serde(rename = "CustomerID")]
    pub customer_id: String,

    #[serde(rename = "CompanyID")]
    pub company_id: String,

    #[serde(rename = "Timestamp")]
    pub timestamp: String,

    #[serde(rename = "Hash")]
    pub hash: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiskAssessmentRecord {
    #[serde(rename = "AssessmentID")]
    pub assessment_id: String,

    #[serde(rename = "RiskScore")]
    pub risk_score: f64,

    #[serde(rename = "CustomerID")]
    pub customer_id: String,

    #[serde(rename = "TransactionID")]
    pub transaction_id: String,

    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

// ============================================================================
// RECORD SET
// ============================================================================

/// File names of the four input tables inside a data directory
pub const COMPANIES_FILE: &str = "companies.csv";
pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const RISK_ASSESSMENTS_FILE: &str = "risk_assessment.csv";

/// The four input tables, loaded once at startup and passed explicitly to
/// every component that needs them. No module-level state.
#[derive(Debug, Clone)]
pub struct RecordSet {
    pub companies: Vec<CompanyRecord>,
    pub customers: Vec<CustomerRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub risk_assessments: Vec<RiskAssessmentRecord>,
}

impl RecordSet {
    /// Load all four tables from a directory. Any missing file or
    /// malformed column fails the whole load; there is no partial state.
    pub fn load_from_dir(dir: &Path) -> Result<RecordSet> {
        Ok(RecordSet {
            companies: load_table(&dir.join(COMPANIES_FILE), "company")?,
            customers: load_table(&dir.join(CUSTOMERS_FILE), "customer")?,
            transactions: load_table(&dir.join(TRANSACTIONS_FILE), "transaction")?,
            risk_assessments: load_table(&dir.join(RISK_ASSESSMENTS_FILE), "risk assessment")?,
        })
    }
}

fn load_table<T: DeserializeOwned>(path: &Path, table: &'static str) -> Result<Vec<T>> {
    let rdr = csv::Reader::from_path(path).map_err(|source| Error::RecordLoad { table, source })?;
    read_records(rdr, table)
}

/// Deserialize every row of an already-open CSV reader
pub fn read_records<T: DeserializeOwned, R: io::Read>(
    mut rdr: csv::Reader<R>,
    table: &'static str,
) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(|source| Error::RecordLoad { table, source })?;
        records.push(record);
    }
    Ok(records)
}
