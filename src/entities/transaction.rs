// Transaction Entity - payment method, content hash, assessment link

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use super::assessment::RiskAssessment;

// ============================================================================
// PAYMENT METHOD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Credit,
    Debit,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Credit" => Ok(PaymentMethod::Credit),
            "Debit" => Ok(PaymentMethod::Debit),
            "Transfer" => Ok(PaymentMethod::Transfer),
            other => Err(other.to_string()),
        }
    }
}

// ============================================================================
// TRANSACTION ENTITY
// ============================================================================

/// A single payment between a customer and a company.
///
/// Immutable after creation except for the attached risk assessment.
/// Customer and company are referenced by ID, not by pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub customer_id: String,
    pub company_id: String,
    pub timestamp: String,

    /// Opaque fingerprint of (id, amount, method, timestamp).
    /// Integrity illustration only, not an authentication scheme.
    pub hash: String,

    /// At most one assessment at a time; later attachment overwrites.
    pub assessment: Option<RiskAssessment>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_id: String,
        amount: f64,
        method: PaymentMethod,
        customer_id: String,
        company_id: String,
        timestamp: String,
        hash: String,
    ) -> Self {
        Transaction {
            transaction_id,
            amount,
            method,
            customer_id,
            company_id,
            timestamp,
            hash,
            assessment: None,
        }
    }

    /// Attach a risk assessment, replacing any previous link
    pub fn attach_assessment(&mut self, assessment: RiskAssessment) {
        self.assessment = Some(assessment);
    }

    pub fn has_assessment(&self) -> bool {
        self.assessment.is_some()
    }
}

/// Deterministic SHA-256 fingerprint over the transaction's content fields.
/// Any change to any input changes the result.
pub fn content_hash(
    transaction_id: &str,
    amount: f64,
    method: PaymentMethod,
    timestamp: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!(
        "{}{}{}{}",
        transaction_id,
        amount,
        method.as_str(),
        timestamp
    ));
    format!("{:x}", hasher.finalize())
}
