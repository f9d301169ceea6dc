// Risk Assessment Entity

use serde::{Deserialize, Serialize};

use crate::store::RiskAssessmentRecord;

/// The scored risk of a single transaction.
///
/// Pure data: the trained model is never embedded here. Scoring is a
/// stateless function of (model, amount) - see the scorer module - so an
/// assessment carries only the resulting score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_id: String,

    /// Regression output; an unbounded real value, not a probability
    pub risk_score: f64,

    pub customer_id: String,
    pub transaction_id: String,
    pub timestamp: String,
}

impl RiskAssessment {
    pub fn new(
        assessment_id: String,
        risk_score: f64,
        customer_id: String,
        transaction_id: String,
        timestamp: String,
    ) -> Self {
        RiskAssessment {
            assessment_id,
            risk_score,
            customer_id,
            transaction_id,
            timestamp,
        }
    }

    pub fn from_record(record: &RiskAssessmentRecord) -> Self {
        RiskAssessment::new(
            record.assessment_id.clone(),
            record.risk_score,
            record.customer_id.clone(),
            record.transaction_id.clone(),
            record.timestamp.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_from_record() {
        let record = RiskAssessmentRecord {
            assessment_id: "RA9".to_string(),
            risk_score: 0.66,
            customer_id: "C3".to_string(),
            transaction_id: "T3".to_string(),
            timestamp: "2024-01-01 10:00:00".to_string(),
        };

        let assessment = RiskAssessment::from_record(&record);
        assert_eq!(assessment.assessment_id, "RA9");
        assert_eq!(assessment.risk_score, 0.66);
        assert_eq!(assessment.transaction_id, "T3");
    }
}
