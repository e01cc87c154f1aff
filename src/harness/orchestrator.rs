//! Runs every enabled strategy over every instance.
//!
//! Strategies are visited in canonical order. For each one the instances are
//! solved in input order, each solve call timed on its own, and the complete
//! batch of rows is handed to the sink before the next strategy starts. Rows
//! of different strategies never share a batch.

use crate::error::{Error, Result};
use crate::harness::config::RunConfig;
use crate::harness::problem::{Hamilton, Problem, ProblemKind, Sat};
use crate::harness::sink::{CsvSink, ResultSink};
use crate::harness::summary::BatchSummary;
use log::{debug, info};
use std::time::Instant;

/// Drives one run described by a [`RunConfig`].
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    #[must_use]
    pub const fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Solves `instances` with every enabled strategy and writes one batch per
    /// strategy to `sink`.
    ///
    /// # Arguments
    ///
    /// * `instances` - Parsed instances, in file order.
    /// * `sink` - Destination of the batches.
    ///
    /// # Returns
    ///
    /// One summary per strategy, in the order the strategies ran.
    ///
    /// # Errors
    ///
    /// `Error::StrategyUnavailable` when a reserved strategy is enabled, before
    /// anything is solved or written. `Error::Verification` when verification
    /// is on and a witness does not hold, or whatever the sink fails with.
    pub fn run<P, S>(&self, instances: &[P::Instance], sink: &mut S) -> Result<Vec<BatchSummary>>
    where
        P: Problem,
        S: ResultSink<P::Row>,
    {
        self.check_strategies()?;

        let mut summaries = Vec::with_capacity(self.config.strategies().len());
        let mut batch: Vec<P::Row> = Vec::with_capacity(instances.len());

        for &strategy in self.config.strategies() {
            batch.clear();
            debug!(
                "{}: running {strategy} over {} instances",
                P::KIND,
                instances.len()
            );

            for instance in instances {
                let start = Instant::now();
                let outcome = P::solve(strategy, instance)?;
                let elapsed = start.elapsed();

                if self.config.verify() {
                    P::verify(instance, &outcome).map_err(|reason| Error::Verification {
                        instance: P::instance_id(instance),
                        strategy,
                        reason,
                    })?;
                }

                batch.push(P::row(instance, outcome, strategy, elapsed));
            }

            sink.write_batch(strategy, &batch)?;

            let summary = BatchSummary::from_rows(P::KIND, strategy, &batch);
            info!(
                "{} {strategy}: {} instances, {} with a witness, {:.6}s total",
                P::KIND,
                summary.instances,
                summary.witnesses,
                summary.total_time.as_secs_f64()
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Fails on the first enabled strategy without an algorithm.
    fn check_strategies(&self) -> Result<()> {
        match self
            .config
            .strategies()
            .iter()
            .find(|strategy| !strategy.is_implemented())
        {
            Some(&strategy) => Err(Error::StrategyUnavailable(strategy)),
            None => Ok(()),
        }
    }

    /// Reads the configured input file as problem `P` and runs it.
    ///
    /// # Errors
    ///
    /// `Error::Config` if `P` is not the configured problem, parse errors from
    /// the input file, otherwise see [`Orchestrator::run`].
    pub fn run_file<P, S>(&self, sink: &mut S) -> Result<Vec<BatchSummary>>
    where
        P: Problem,
        S: ResultSink<P::Row>,
    {
        if P::KIND != self.config.problem() {
            return Err(Error::Config(format!(
                "configured for {}, asked to run {}",
                self.config.problem(),
                P::KIND
            )));
        }

        self.check_strategies()?;
        let instances = P::parse_file(self.config.input())?;
        info!(
            "parsed {} {} instances from {}",
            instances.len(),
            P::KIND,
            self.config.input().display()
        );
        self.run::<P, S>(&instances, sink)
    }

    /// Runs the configured input and writes one CSV file per strategy into the
    /// configured results directory.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::run_file`].
    pub fn run_to_csv(&self) -> Result<Vec<BatchSummary>> {
        let problem = self.config.problem();
        let mut sink = CsvSink::new(self.config.results_dir(), self.config.input(), problem);
        match problem {
            ProblemKind::Sat => self.run_file::<Sat, _>(&mut sink),
            ProblemKind::Hamilton => self.run_file::<Hamilton, _>(&mut sink),
        }
    }
}
