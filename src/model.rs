// Risk Model Trainer - ordinary least squares of risk score on amount
//
// One scalar feature, one coefficient plus intercept. No regularization,
// no cross-validation, no feature scaling. The fitted model is immutable
// and freely shareable read-only across every assessment created after it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::store::{RiskAssessmentRecord, TransactionRecord};

/// The canonical feature name, preserved exactly from the input schema.
/// Structured-record callers must predict under this name.
pub const AMOUNT_FEATURE: &str = "Amount";

/// A fitted amount -> risk score regression
#[derive(Debug, Clone, PartialEq)]
pub struct RiskModel {
    slope: f64,
    intercept: f64,
    feature: String,
}

impl RiskModel {
    /// Fit on historical data: inner join of transactions and risk
    /// assessments on transaction ID, then least squares of score on
    /// amount. Rows without a partner on the other side are dropped.
    pub fn train(
        transactions: &[TransactionRecord],
        assessments: &[RiskAssessmentRecord],
    ) -> Result<RiskModel> {
        let amounts: HashMap<&str, f64> = transactions
            .iter()
            .map(|t| (t.transaction_id.as_str(), t.amount))
            .collect();

        let samples: Vec<(f64, f64)> = assessments
            .iter()
            .filter_map(|a| {
                amounts
                    .get(a.transaction_id.as_str())
                    .map(|&amount| (amount, a.risk_score))
            })
            .collect();

        if samples.is_empty() {
            return Err(Error::InsufficientTrainingData);
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;

        let ss_xy: f64 = samples
            .iter()
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let ss_xx: f64 = samples.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

        // Constant amounts leave the slope undetermined; fall back to the
        // mean-only model rather than dividing by zero.
        let slope = if ss_xx == 0.0 { 0.0 } else { ss_xy / ss_xx };
        let intercept = mean_y - slope * mean_x;

        Ok(RiskModel {
            slope,
            intercept,
            feature: AMOUNT_FEATURE.to_string(),
        })
    }

    /// Predict a risk score from a plain scalar amount.
    ///
    /// The single entry point for raw-value callers; nobody constructs
    /// training-shaped inputs outside this module.
    pub fn predict(&self, amount: f64) -> f64 {
        self.intercept + self.slope * amount
    }

    /// Schema-checked prediction for structured-record callers. The
    /// feature name must match the one the model was trained on.
    pub fn predict_feature(&self, feature: &str, value: f64) -> Result<f64> {
        if feature != self.feature {
            return Err(Error::FeatureSchemaMismatch {
                expected: self.feature.clone(),
                actual: feature.to_string(),
            });
        }
        Ok(self.predict(value))
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(id: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            transaction_id: id.to_string(),
            amount,
            method: "Credit".to_string(),
            customer_id: "1".to_string(),
            company_id: "1".to_string(),
            timestamp: "2024-01-01 10:00:00".to_string(),
            hash: String::new(),
        }
    }

    fn assessment(id: &str, transaction_id: &str, score: f64) -> RiskAssessmentRecord {
        RiskAssessmentRecord {
            assessment_id: id.to_string(),
            risk_score: score,
            customer_id: "1".to_string(),
            transaction_id: transaction_id.to_string(),
            timestamp: "2024-01-01 10:00:00".to_string(),
        }
    }

    /// Amounts 100..500 against scores 0.1..0.9 lie exactly on a line,
    /// so the fit is exact and extrapolation is linear.
    fn linear_training_data() -> (Vec<TransactionRecord>, Vec<RiskAssessmentRecord>) {
        let amounts = [100.0, 200.0, 300.0, 400.0, 500.0];
        let scores = [0.1, 0.3, 0.5, 0.7, 0.9];

        let transactions = amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| transaction(&format!("T{}", i), a))
            .collect();
        let assessments = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| assessment(&format!("RA{}", i), &format!("T{}", i), s))
            .collect();

        (transactions, assessments)
    }

    #[test]
    fn test_exact_fit_through_linear_data() {
        let (transactions, assessments) = linear_training_data();
        let model = RiskModel::train(&transactions, &assessments).unwrap();

        assert!((model.predict(300.0) - 0.5).abs() < 1e-9);
        assert!((model.predict(100.0) - 0.1).abs() < 1e-9);

        // Extrapolation beyond the training range stays linear
        assert!(model.predict(1000.0) > 0.9);
    }

    #[test]
    fn test_prediction_is_affine_in_amount() {
        let (transactions, assessments) = linear_training_data();
        let model = RiskModel::train(&transactions, &assessments).unwrap();

        for amount in [0.0, 50.0, 777.0, 12345.0] {
            let expected = model.predict(0.0) + model.slope() * amount;
            assert!((model.predict(amount) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_join_is_insufficient_training_data() {
        // Transactions and assessments exist but share no transaction ID
        let transactions = vec![transaction("T1", 100.0)];
        let assessments = vec![assessment("RA1", "T99", 0.5)];

        let err = RiskModel::train(&transactions, &assessments).unwrap_err();
        assert!(matches!(err, Error::InsufficientTrainingData));
    }

    #[test]
    fn test_unmatched_rows_are_dropped_from_join() {
        let (mut transactions, mut assessments) = linear_training_data();
        transactions.push(transaction("T_orphan", 99999.0));
        assessments.push(assessment("RA_orphan", "T_missing", 0.0));

        let model = RiskModel::train(&transactions, &assessments).unwrap();

        // Orphans must not disturb the exact fit
        assert!((model.predict(300.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_constant_amounts_fall_back_to_mean() {
        let transactions = vec![transaction("T1", 500.0), transaction("T2", 500.0)];
        let assessments = vec![assessment("RA1", "T1", 0.2), assessment("RA2", "T2", 0.6)];

        let model = RiskModel::train(&transactions, &assessments).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert!((model.predict(123.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_predict_feature_checks_schema() {
        let (transactions, assessments) = linear_training_data();
        let model = RiskModel::train(&transactions, &assessments).unwrap();

        let ok = model.predict_feature(AMOUNT_FEATURE, 300.0).unwrap();
        assert!((ok - 0.5).abs() < 1e-9);

        let err = model.predict_feature("amount", 300.0).unwrap_err();
        assert!(matches!(err, Error::FeatureSchemaMismatch { .. }));
        assert!(err.to_string().contains("Amount"));
    }
}
