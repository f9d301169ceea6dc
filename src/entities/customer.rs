// Customer Entity

use serde::{Deserialize, Serialize};

use crate::store::CustomerRecord;

/// A customer that initiates transactions. Same lifecycle as Company:
/// created at load time, never destroyed, transaction list grows only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,

    /// Back-references to owned transactions, by ID, in attribution order
    pub transactions: Vec<String>,
}

impl Customer {
    pub fn new(customer_id: String, name: String, phone: String, address: String) -> Self {
        Customer {
            customer_id,
            name,
            phone,
            address,
            transactions: Vec::new(),
        }
    }

    pub fn from_record(record: &CustomerRecord) -> Self {
        Customer::new(
            record.customer_id.clone(),
            record.name.clone(),
            record.phone.clone(),
            record.address.clone(),
        )
    }

    /// Record a transaction as belonging to this customer
    pub fn add_transaction(&mut self, transaction_id: String) {
        self.transactions.push(transaction_id);
    }
}
