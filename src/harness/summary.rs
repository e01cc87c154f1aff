use crate::harness::problem::ProblemKind;
use crate::harness::row::Record;
use crate::strategy::Strategy;
use ordered_float::OrderedFloat;
use std::time::Duration;

/// Aggregate figures for one strategy's batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub problem: ProblemKind,
    pub strategy: Strategy,
    pub instances: usize,
    /// Satisfiable instances, or instances with a Hamiltonian path.
    pub witnesses: usize,
    /// Instances with a Hamiltonian cycle. Equal to `witnesses` for SAT.
    pub strong_witnesses: usize,
    pub total_time: Duration,
    /// Longest single solve, in seconds.
    pub slowest: OrderedFloat<f64>,
    pub slowest_instance: Option<u64>,
}

impl BatchSummary {
    /// Summarises a batch of rows produced by `strategy`.
    #[must_use]
    pub fn from_rows<R: Record>(problem: ProblemKind, strategy: Strategy, rows: &[R]) -> Self {
        let slowest = rows
            .iter()
            .max_by_key(|row| OrderedFloat(row.elapsed().as_secs_f64()));

        Self {
            problem,
            strategy,
            instances: rows.len(),
            witnesses: rows.iter().filter(|row| row.witness_found()).count(),
            strong_witnesses: rows.iter().filter(|row| row.strong_witness_found()).count(),
            total_time: rows.iter().map(Record::elapsed).sum(),
            slowest: slowest.map_or(OrderedFloat(0.0), |row| {
                OrderedFloat(row.elapsed().as_secs_f64())
            }),
            slowest_instance: slowest.map(Record::instance_id),
        }
    }

    /// Mean solve time in seconds, 0 for an empty batch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_seconds(&self) -> f64 {
        if self.instances == 0 {
            0.0
        } else {
            self.total_time.as_secs_f64() / self.instances as f64
        }
    }
}
