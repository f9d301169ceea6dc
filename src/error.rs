// Error taxonomy for the financial ecosystem pipeline
//
// Load-time and training-time failures abort the run; per-transaction
// scoring failures are local and must never stop the rest of a batch.

use thiserror::Error;

/// Errors produced by the ecosystem pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A source table is missing or a column failed to parse.
    /// Fatal to startup; there is no partial load.
    #[error("failed to load {table} records: {source}")]
    RecordLoad {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// The inner join of transactions and risk assessments is empty,
    /// so there is nothing to fit the model on.
    #[error("insufficient training data: no transactions match any risk assessment")]
    InsufficientTrainingData,

    /// A prediction was requested under a feature name the model was
    /// not trained on. Fatal to that single prediction only.
    #[error("feature schema mismatch: model was trained on '{expected}', got '{actual}'")]
    FeatureSchemaMismatch { expected: String, actual: String },

    /// A transaction references a customer or company ID that is not in
    /// the loaded pools. Reported per record, recoverable.
    #[error("transaction {transaction_id} references unknown {field} '{value}'")]
    UnresolvedForeignKey {
        transaction_id: String,
        field: &'static str,
        value: String,
    },

    /// A transaction record carries a payment method outside the
    /// enumerated set. Fatal to the graph build.
    #[error("transaction {transaction_id} has unknown payment method '{value}'")]
    UnknownPaymentMethod {
        transaction_id: String,
        value: String,
    },

    /// Synthesis needs at least one customer and one company to pick from.
    #[error("cannot synthesize transactions: {0} pool is empty")]
    EmptyEntityPool(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
