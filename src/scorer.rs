// Risk Scorer
//
// Applies a fitted model to a transaction amount and classifies the
// result against the operative threshold. Stateless: every call is an
// independent read of the immutable model, so one failed prediction
// never corrupts another.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::{RiskAssessment, Transaction};
use crate::error::Result;
use crate::model::{RiskModel, AMOUNT_FEATURE};
use crate::synth::TIMESTAMP_FORMAT;

/// Scores strictly above this are classified risky. A score of exactly
/// 0.73 is not risky.
pub const RISK_THRESHOLD: f64 = 0.73;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClass {
    Risky,
    NotRisky,
}

impl RiskClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::Risky => "risky",
            RiskClass::NotRisky => "not risky",
        }
    }
}

/// Classify a score against the operative threshold
pub fn classify(score: f64) -> RiskClass {
    if score > RISK_THRESHOLD {
        RiskClass::Risky
    } else {
        RiskClass::NotRisky
    }
}

/// Predict the risk score for a transaction through the schema-checked
/// prediction path, under the same feature name used at training time.
pub fn score_transaction(model: &RiskModel, transaction: &Transaction) -> Result<f64> {
    model.predict_feature(AMOUNT_FEATURE, transaction.amount)
}

/// Score a transaction and wrap the result in a new risk assessment,
/// ready to be attached. The assessment ID is "RA" + four random digits.
pub fn assess_transaction<R: Rng>(
    model: &RiskModel,
    transaction: &Transaction,
    rng: &mut R,
) -> Result<RiskAssessment> {
    let score = score_transaction(model, transaction)?;
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

    Ok(RiskAssessment::new(
        format!("RA{}", rng.gen_range(1_000..=9_999)),
        score,
        transaction.customer_id.clone(),
        transaction.transaction_id.clone(),
        timestamp,
    ))
}
