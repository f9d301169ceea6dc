// Company Entity

use serde::{Deserialize, Serialize};

use crate::store::CompanyRecord;

/// A company that receives transactions.
///
/// Created once at load time; immutable except for its transaction list,
/// which grows as new transactions are attributed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company_id: String,
    pub name: String,
    pub address: String,

    /// Back-references to owned transactions, by ID, in attribution order
    pub transactions: Vec<String>,
}

impl Company {
    pub fn new(company_id: String, name: String, address: String) -> Self {
        Company {
            company_id,
            name,
            address,
            transactions: Vec::new(),
        }
    }

    pub fn from_record(record: &CompanyRecord) -> Self {
        Company::new(
            record.company_id.clone(),
            record.name.clone(),
            record.address.clone(),
        )
    }

    /// Record a transaction as belonging to this company
    pub fn add_transaction(&mut self, transaction_id: String) {
        self.transactions.push(transaction_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_from_record() {
        let record = CompanyRecord {
            company_id: "7".to_string(),
            name: "Company 7".to_string(),
            address: "Address 7".to_string(),
        };

        let company = Company::from_record(&record);
        assert_eq!(company.company_id, "7");
        assert_eq!(company.name, "Company 7");
        assert!(company.transactions.is_empty());
    }

    #[test]
    fn test_add_transaction_preserves_order() {
        let mut company = Company::new("1".to_string(), "C".to_string(), "A".to_string());
        company.add_transaction("T1".to_string());
        company.add_transaction("T2".to_string());

        assert_eq!(company.transactions, vec!["T1", "T2"]);
    }
}
