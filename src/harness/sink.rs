//! Destinations for result batches.

use crate::error::Result;
use crate::harness::problem::ProblemKind;
use crate::harness::row::Record;
use crate::strategy::Strategy;
use itertools::Itertools;
use log::{debug, info};
use std::borrow::Cow;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives one batch of rows per strategy, in the order the strategies ran.
pub trait ResultSink<R: Record> {
    /// Accepts the complete batch for `strategy`.
    ///
    /// # Errors
    ///
    /// Whatever the destination fails with, usually `Error::Io`.
    fn write_batch(&mut self, strategy: Strategy, rows: &[R]) -> Result<()>;
}

/// Quotes a CSV field when it contains a separator, a quote or a line break;
/// embedded quotes are doubled.
#[must_use]
pub fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn csv_line(fields: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    fields
        .into_iter()
        .map(|f| quote(f.as_ref()).into_owned())
        .join(",")
}

/// Writes each batch to its own CSV file,
/// `<dir>/<strategy_tag>_<input_stem>_<problem>_results.csv`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
    input_stem: String,
    problem: ProblemKind,
}

impl CsvSink {
    /// A sink writing into `dir`, which is created on the first batch if it
    /// does not exist. `input` names the instance file the rows come from.
    pub fn new(dir: impl Into<PathBuf>, input: &Path, problem: ProblemKind) -> Self {
        let input_stem = input
            .file_stem()
            .map_or_else(|| "input".to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            dir: dir.into(),
            input_stem,
            problem,
        }
    }

    /// Path of the file a batch for `strategy` is written to.
    #[must_use]
    pub fn path_for(&self, strategy: Strategy) -> PathBuf {
        self.dir.join(format!(
            "{}_{}_{}_results.csv",
            strategy.tag(),
            self.input_stem,
            self.problem
        ))
    }
}

impl<R: Record> ResultSink<R> for CsvSink {
    fn write_batch(&mut self, strategy: Strategy, rows: &[R]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(strategy);
        let mut out = BufWriter::new(fs::File::create(&path)?);

        writeln!(out, "{}", csv_line(R::header()))?;
        for row in rows {
            writeln!(out, "{}", csv_line(row.fields()))?;
        }
        out.flush()?;

        info!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

/// Keeps every batch in memory.
#[derive(Debug, Clone)]
pub struct MemorySink<R> {
    batches: Vec<(Strategy, Vec<R>)>,
}

impl<R> Default for MemorySink<R> {
    fn default() -> Self {
        Self {
            batches: Vec::new(),
        }
    }
}

impl<R> MemorySink<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn batches(&self) -> &[(Strategy, Vec<R>)] {
        &self.batches
    }

    /// The rows recorded for `strategy`, if it ran.
    #[must_use]
    pub fn rows(&self, strategy: Strategy) -> Option<&[R]> {
        self.batches
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, rows)| rows.as_slice())
    }
}

impl<R: Record + Clone> ResultSink<R> for MemorySink<R> {
    fn write_batch(&mut self, strategy: Strategy, rows: &[R]) -> Result<()> {
        debug!("memory sink: {} rows for {strategy}", rows.len());
        self.batches.push((strategy, rows.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::row::HamiltonRow;
    use std::time::Duration;

    fn row(id: u64) -> HamiltonRow {
        HamiltonRow {
            instance_id: id,
            num_vertices: 3,
            num_edges: 3,
            path: Some(vec![1, 2, 3]),
            cycle: Some(vec![1, 2, 3, 1]),
            largest_cycle: 3,
            algorithm: Strategy::BruteForce,
            time: Duration::ZERO,
        }
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("12"), "12");
        assert_eq!(quote("[1, 2]"), "\"[1, 2]\"");
        assert_eq!(quote("a\"b"), "\"a\"\"b\"");
        assert!(matches!(quote("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_path_for() {
        let sink = CsvSink::new("out", Path::new("data/graphs.txt"), ProblemKind::Hamilton);
        assert_eq!(
            sink.path_for(Strategy::Backtracking),
            Path::new("out/backtracking_graphs_hamilton_results.csv")
        );
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results");
        let mut sink = CsvSink::new(&results, Path::new("g.txt"), ProblemKind::Hamilton);

        let rows = [row(1), row(2)];
        sink.write_batch(Strategy::BruteForce, &rows[..]).unwrap();

        let written = fs::read_to_string(results.join("brute_force_g_hamilton_results.csv")).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(
            lines[0],
            "Instance_ID,Num_Vertices,Num_Edges,Hamiltonian_Path,Hamiltonian_Cycle,Largest_Cycle_Size,Algorithm,Time"
        );
        assert_eq!(
            lines[1],
            "1,3,3,\"[1, 2, 3]\",\"[1, 2, 3, 1]\",3,BruteForce,0.000000"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_memory_sink_keeps_batches_apart() {
        let mut sink: MemorySink<HamiltonRow> = MemorySink::new();
        sink.write_batch(Strategy::BruteForce, &[row(1)][..]).unwrap();
        sink.write_batch(Strategy::Backtracking, &[row(1), row(2)][..]).unwrap();

        assert_eq!(sink.batches().len(), 2);
        assert_eq!(sink.rows(Strategy::Backtracking).map(<[_]>::len), Some(2));
        assert!(sink.rows(Strategy::Simple).is_none());
    }
}
