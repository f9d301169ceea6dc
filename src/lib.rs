// Financial Ecosystem Risk Pipeline - Core Library
// Exposes all modules for use in the CLI and tests

pub mod entities;
pub mod error;
pub mod generate;
pub mod graph;
pub mod model;
pub mod scorer;
pub mod simulation;
pub mod store;
pub mod synth;

// Re-export commonly used types
pub use entities::{content_hash, Company, Customer, PaymentMethod, RiskAssessment, Transaction};
pub use error::{Error, Result};
pub use generate::{build_dataset, generate_dataset, DatasetSummary, GENERATOR_SEED};
pub use graph::EntityGraph;
pub use model::{RiskModel, AMOUNT_FEATURE};
pub use scorer::{assess_transaction, classify, score_transaction, RiskClass, RISK_THRESHOLD};
pub use simulation::{run_simulation, run_simulation_with_rng, ScoredTransaction, SimulationOutcome};
pub use store::{
    read_records, CompanyRecord, CustomerRecord, RecordSet, RiskAssessmentRecord,
    TransactionRecord,
};
pub use synth::{synthesize_transactions, TIMESTAMP_FORMAT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
