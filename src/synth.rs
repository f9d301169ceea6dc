// Transaction Synthesizer
//
// Produces new, syntactically valid transactions against the loaded
// customer and company pools. Single-threaded: the back-reference
// updates on customer and company happen before the call returns.

use chrono::Local;
use rand::Rng;

use crate::entities::{content_hash, PaymentMethod, Transaction};
use crate::error::{Error, Result};
use crate::graph::EntityGraph;

/// Timestamp rendering used across the ecosystem tables
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Methods eligible for synthesized transactions (no Transfer here,
/// matching the historical generator's runtime behavior)
const SYNTH_METHODS: [PaymentMethod; 2] = [PaymentMethod::Credit, PaymentMethod::Debit];

/// Generate `count` new transactions with randomized contents.
///
/// Each transaction picks a customer and company uniformly at random,
/// an amount in [100, 10000], a method in {Credit, Debit}, and a fresh
/// "T"-prefixed ID that is retried until unique within the run. The ID
/// is appended to the chosen customer's and company's transaction lists.
///
/// Returns the new transactions in generation order; the caller decides
/// whether to fold them into the graph's transaction pool.
pub fn synthesize_transactions<R: Rng>(
    graph: &mut EntityGraph,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    if graph.customers.is_empty() {
        return Err(Error::EmptyEntityPool("customer"));
    }
    if graph.companies.is_empty() {
        return Err(Error::EmptyEntityPool("company"));
    }

    let mut seen_ids: std::collections::HashSet<String> = graph
        .transactions
        .iter()
        .map(|t| t.transaction_id.clone())
        .collect();

    let mut new_transactions = Vec::with_capacity(count);
    for _ in 0..count {
        let customer_idx = rng.gen_range(0..graph.customers.len());
        let company_idx = rng.gen_range(0..graph.companies.len());

        let amount = rng.gen_range(100..=10_000) as f64;
        let method = SYNTH_METHODS[rng.gen_range(0..SYNTH_METHODS.len())];
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let transaction_id = fresh_transaction_id(&mut seen_ids, rng);
        let hash = content_hash(&transaction_id, amount, method, &timestamp);

        let customer = &mut graph.customers[customer_idx];
        customer.add_transaction(transaction_id.clone());
        let customer_id = customer.customer_id.clone();

        let company = &mut graph.companies[company_idx];
        company.add_transaction(transaction_id.clone());
        let company_id = company.company_id.clone();

        new_transactions.push(Transaction::new(
            transaction_id,
            amount,
            method,
            customer_id,
            company_id,
            timestamp,
            hash,
        ));
    }

    Ok(new_transactions)
}

/// Draw "T" + five random digits, retrying until the ID is unused.
/// The drawn ID is recorded in `seen_ids` before returning.
fn fresh_transaction_id<R: Rng>(
    seen_ids: &mut std::collections::HashSet<String>,
    rng: &mut R,
) -> String {
    loop {
        let candidate = format!("T{}", rng.gen_range(10_000..=99_999));
        if seen_ids.insert(candidate.clone()) {
            return candidate;
        }
    }
}
