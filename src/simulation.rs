// Simulation orchestration
//
// Wires the pipeline end to end: build the entity graph, train the risk
// model on historical records, synthesize new transactions, and score
// each one. Load and training failures abort the run; a failed scoring
// of one transaction only skips that transaction.

use rand::Rng;
use tracing::warn;

use crate::error::Result;
use crate::graph::EntityGraph;
use crate::model::RiskModel;
use crate::scorer::{assess_transaction, classify, RiskClass};
use crate::store::RecordSet;
use crate::synth::synthesize_transactions;

/// One scored synthetic transaction, for display by the caller
#[derive(Debug, Clone)]
pub struct ScoredTransaction {
    pub transaction_id: String,
    pub amount: f64,
    pub score: f64,
    pub class: RiskClass,
}

/// Everything the simulation produced: the (grown) entity graph, the
/// trained model, and the scored synthetic transactions.
#[derive(Debug)]
pub struct SimulationOutcome {
    pub graph: EntityGraph,
    pub model: RiskModel,
    pub scored: Vec<ScoredTransaction>,
}

/// Run the complete pipeline with the thread-local RNG
pub fn run_simulation(records: &RecordSet, new_count: usize) -> Result<SimulationOutcome> {
    run_simulation_with_rng(records, new_count, &mut rand::thread_rng())
}

/// Run the complete pipeline with a caller-supplied RNG
pub fn run_simulation_with_rng<R: Rng>(
    records: &RecordSet,
    new_count: usize,
    rng: &mut R,
) -> Result<SimulationOutcome> {
    let mut graph = EntityGraph::build(records)?;

    for issue in graph.validate_foreign_keys() {
        warn!("{}", issue);
    }

    // Fatal if the join is empty: no useful simulation state without a model
    let model = RiskModel::train(&records.transactions, &records.risk_assessments)?;

    let new_transactions = synthesize_transactions(&mut graph, new_count, rng)?;

    let mut scored = Vec::with_capacity(new_transactions.len());
    for mut transaction in new_transactions {
        match assess_transaction(&model, &transaction, rng) {
            Ok(assessment) => {
                let score = assessment.risk_score;
                transaction.attach_assessment(assessment);
                scored.push(ScoredTransaction {
                    transaction_id: transaction.transaction_id.clone(),
                    amount: transaction.amount,
                    score,
                    class: classify(score),
                });
            }
            Err(err) => {
                // Predictions are independent; keep scoring the rest
                warn!(
                    "skipping risk prediction for transaction {}: {}",
                    transaction.transaction_id, err
                );
            }
        }
        graph.transactions.push(transaction);
    }

    Ok(SimulationOutcome {
        graph,
        model,
        scored,
    })
}
