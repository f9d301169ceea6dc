// Entity Models
//
// In-memory objects built from raw records, with identity and
// relationships. Cross-references are held as IDs (foreign-key style),
// resolved by lookup through the entity graph rather than by pointer.

pub mod assessment;
pub mod company;
pub mod customer;
pub mod transaction;

pub use assessment::RiskAssessment;
pub use company::Company;
pub use customer::Customer;
pub use transaction::{content_hash, PaymentMethod, Transaction};
