// Entity Graph Builder
//
// Instantiates typed entities from raw records and resolves the
// transaction <-> risk-assessment link. Performs no I/O: record loading
// is the store's job, and the build only populates the returned graph.

use std::collections::{HashMap, HashSet};

use crate::entities::{Company, Customer, RiskAssessment, Transaction};
use crate::error::{Error, Result};
use crate::store::RecordSet;

/// The four entity pools with cross-references resolved.
///
/// Entities appear in source-record order. Customer and company IDs on a
/// transaction stay foreign keys; use the lookup helpers to resolve them.
#[derive(Debug, Clone)]
pub struct EntityGraph {
    pub companies: Vec<Company>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub assessments: Vec<RiskAssessment>,
}

impl EntityGraph {
    /// Build entities from records and run the linking pass.
    ///
    /// Linking attaches to each transaction the first assessment (in
    /// record order) whose transaction ID matches. Duplicate assessments
    /// for one transaction are kept in the assessment pool but only the
    /// first is attached.
    pub fn build(records: &RecordSet) -> Result<EntityGraph> {
        let companies = records.companies.iter().map(Company::from_record).collect();
        let customers = records.customers.iter().map(Customer::from_record).collect();

        let mut transactions = Vec::with_capacity(records.transactions.len());
        for record in &records.transactions {
            let method = record
                .method
                .parse()
                .map_err(|value| Error::UnknownPaymentMethod {
                    transaction_id: record.transaction_id.clone(),
                    value,
                })?;
            transactions.push(Transaction::new(
                record.transaction_id.clone(),
                record.amount,
                method,
                record.customer_id.clone(),
                record.company_id.clone(),
                record.timestamp.clone(),
                record.hash.clone(),
            ));
        }

        let assessments: Vec<RiskAssessment> = records
            .risk_assessments
            .iter()
            .map(RiskAssessment::from_record)
            .collect();

        // Index assessments by transaction ID for O(1) linking.
        // First occurrence wins on duplicates.
        let mut by_transaction: HashMap<&str, &RiskAssessment> = HashMap::new();
        for assessment in &assessments {
            by_transaction
                .entry(assessment.transaction_id.as_str())
                .or_insert(assessment);
        }

        for transaction in &mut transactions {
            if let Some(assessment) = by_transaction.get(transaction.transaction_id.as_str()) {
                transaction.attach_assessment((*assessment).clone());
            }
        }

        Ok(EntityGraph {
            companies,
            customers,
            transactions,
            assessments,
        })
    }

    /// Report every transaction whose customer or company ID is absent
    /// from the loaded pools. Recoverable: callers log these as warnings.
    pub fn validate_foreign_keys(&self) -> Vec<Error> {
        let customer_ids: HashSet<&str> =
            self.customers.iter().map(|c| c.customer_id.as_str()).collect();
        let company_ids: HashSet<&str> =
            self.companies.iter().map(|c| c.company_id.as_str()).collect();

        let mut issues = Vec::new();
        for tx in &self.transactions {
            if !customer_ids.contains(tx.customer_id.as_str()) {
                issues.push(Error::UnresolvedForeignKey {
                    transaction_id: tx.transaction_id.clone(),
                    field: "customer",
                    value: tx.customer_id.clone(),
                });
            }
            if !company_ids.contains(tx.company_id.as_str()) {
                issues.push(Error::UnresolvedForeignKey {
                    transaction_id: tx.transaction_id.clone(),
                    field: "company",
                    value: tx.company_id.clone(),
                });
            }
        }
        issues
    }

    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == customer_id)
    }

    pub fn company(&self, company_id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.company_id == company_id)
    }

    pub fn transaction(&self, transaction_id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.transaction_id == transaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        CompanyRecord, CustomerRecord, RiskAssessmentRecord, TransactionRecord,
    };

    fn company(id: &str) -> CompanyRecord {
        CompanyRecord {
            company_id: id.to_string(),
            name: format!("Company {}", id),
            address: format!("Address {}", id),
        }
    }

    fn customer(id: &str) -> CustomerRecord {
        CustomerRecord {
            customer_id: id.to_string(),
            name: format!("Customer {}", id),
            phone: format!("Phone {}", id),
            address: format!("Address {}", id),
        }
    }

    fn transaction(id: &str, customer_id: &str, company_id: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            transaction_id: id.to_string(),
            amount,
            method: "Credit".to_string(),
            customer_id: customer_id.to_string(),
            company_id: company_id.to_string(),
            timestamp: "2024-01-01 10:00:00".to_string(),
            hash: "deadbeef".to_string(),
        }
    }

    fn assessment(id: &str, transaction_id: &str, score: f64) -> RiskAssessmentRecord {
        RiskAssessmentRecord {
            assessment_id: id.to_string(),
            risk_score: score,
            customer_id: "1".to_string(),
            transaction_id: transaction_id.to_string(),
            timestamp: "2024-01-02 10:00:00".to_string(),
        }
    }

    fn record_set() -> RecordSet {
        RecordSet {
            companies: vec![company("1"), company("2")],
            customers: vec![customer("1"), customer("2"), customer("3")],
            transactions: vec![
                transaction("T1", "1", "1", 100.0),
                transaction("T2", "2", "2", 200.0),
                transaction("T3", "3", "1", 300.0),
            ],
            risk_assessments: vec![assessment("RA1", "T2", 0.4)],
        }
    }

    #[test]
    fn test_build_preserves_cardinality_and_order() {
        let graph = EntityGraph::build(&record_set()).unwrap();

        assert_eq!(graph.companies.len(), 2);
        assert_eq!(graph.customers.len(), 3);
        assert_eq!(graph.transactions.len(), 3);
        assert_eq!(graph.assessments.len(), 1);

        assert_eq!(graph.transactions[0].transaction_id, "T1");
        assert_eq!(graph.transactions[2].transaction_id, "T3");
        assert_eq!(graph.customers[1].customer_id, "2");
    }

    #[test]
    fn test_linking_attaches_matching_assessment() {
        let graph = EntityGraph::build(&record_set()).unwrap();

        assert!(!graph.transaction("T1").unwrap().has_assessment());
        assert!(!graph.transaction("T3").unwrap().has_assessment());

        let t2 = graph.transaction("T2").unwrap();
        let attached = t2.assessment.as_ref().unwrap();
        assert_eq!(attached.assessment_id, "RA1");
        assert_eq!(attached.risk_score, 0.4);
    }

    #[test]
    fn test_linking_first_match_wins_on_duplicates() {
        let mut records = record_set();
        records.risk_assessments = vec![
            assessment("RA1", "T1", 0.1),
            assessment("RA2", "T1", 0.9),
        ];

        let graph = EntityGraph::build(&records).unwrap();

        let t1 = graph.transaction("T1").unwrap();
        assert_eq!(t1.assessment.as_ref().unwrap().assessment_id, "RA1");

        // Both assessments survive in the pool, undeduplicated
        assert_eq!(graph.assessments.len(), 2);
    }

    #[test]
    fn test_unknown_payment_method_fails_build() {
        let mut records = record_set();
        records.transactions[0].method = "Barter".to_string();

        let err = EntityGraph::build(&records).unwrap_err();
        assert!(matches!(err, Error::UnknownPaymentMethod { .. }));
        assert!(err.to_string().contains("Barter"));
    }

    #[test]
    fn test_validate_foreign_keys_reports_per_record() {
        let mut records = record_set();
        // T3 references customer 3 which we remove, and a bogus company
        records.customers.pop();
        records.transactions[2].company_id = "99".to_string();

        let graph = EntityGraph::build(&records).unwrap();
        let issues = graph.validate_foreign_keys();

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|issue| {
            matches!(issue, Error::UnresolvedForeignKey { transaction_id, .. } if transaction_id == "T3")
        }));
    }

    #[test]
    fn test_validate_foreign_keys_clean_graph() {
        let graph = EntityGraph::build(&record_set()).unwrap();
        assert!(graph.validate_foreign_keys().is_empty());
    }
}
