//! Run configuration.
//!
//! A run is described by one immutable [`RunConfig`], assembled by the command
//! line from flags and, optionally, a JSON strategy file of the form
//!
//! ```json
//! {
//!   "Project Configuration": {
//!     "Selection": "hamilton",
//!     "Sub Problem": [{ "value": "brute_force" }, { "value": "backtracking" }]
//!   }
//! }
//! ```
//!
//! Every problem with the configuration is reported before any instance is
//! solved.

use crate::error::{Error, Result};
use crate::harness::problem::ProblemKind;
use crate::strategy::Strategy;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct StrategyFile {
    #[serde(rename = "Project Configuration")]
    project: ProjectConfiguration,
}

#[derive(Debug, Deserialize)]
struct ProjectConfiguration {
    #[serde(rename = "Selection", default)]
    selection: Option<ProblemKind>,
    #[serde(rename = "Sub Problem", default)]
    sub_problems: Vec<SubProblem>,
}

#[derive(Debug, Deserialize)]
struct SubProblem {
    value: String,
}

/// What a strategy file selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySelection {
    /// The problem named by `Selection`, if present.
    pub problem: Option<ProblemKind>,
    /// Enabled strategies in canonical order, without duplicates.
    pub strategies: Vec<Strategy>,
}

/// Sorts `strategies` into canonical run order and drops duplicates.
///
/// # Errors
///
/// `Error::Config` if no strategy is left.
pub fn normalize_strategies(
    strategies: impl IntoIterator<Item = Strategy>,
) -> Result<Vec<Strategy>> {
    let mut strategies: Vec<_> = strategies.into_iter().collect();
    strategies.sort_unstable();
    strategies.dedup();
    if strategies.is_empty() {
        return Err(Error::Config("no strategy is enabled".to_string()));
    }
    Ok(strategies)
}

/// Parses the text of a strategy file.
///
/// # Errors
///
/// `Error::Json` for malformed JSON or a missing `Project Configuration`,
/// `Error::UnknownStrategy` for an unrecognised tag, `Error::Config` for an
/// empty strategy list.
pub fn parse_strategy_file(text: &str) -> Result<StrategySelection> {
    let file: StrategyFile = serde_json::from_str(text)?;
    let strategies = file
        .project
        .sub_problems
        .iter()
        .map(|sub| sub.value.parse::<Strategy>())
        .collect::<Result<Vec<_>>>()?;

    Ok(StrategySelection {
        problem: file.project.selection,
        strategies: normalize_strategies(strategies)?,
    })
}

/// Loads a strategy file from disk.
///
/// # Errors
///
/// `Error::MissingConfig` if `path` does not exist, `Error::Io` if it cannot
/// be read, otherwise see [`parse_strategy_file`].
pub fn load_strategy_file(path: &Path) -> Result<StrategySelection> {
    if !path.exists() {
        return Err(Error::MissingConfig(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    let selection = parse_strategy_file(&text)?;
    debug!("loaded {selection:?} from {}", path.display());
    Ok(selection)
}

/// Everything one run needs. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    problem: ProblemKind,
    input: PathBuf,
    results_dir: PathBuf,
    strategies: Vec<Strategy>,
    verify: bool,
}

impl RunConfig {
    /// # Errors
    ///
    /// `Error::Config` if `strategies` is empty.
    pub fn new(
        problem: ProblemKind,
        input: impl Into<PathBuf>,
        results_dir: impl Into<PathBuf>,
        strategies: impl IntoIterator<Item = Strategy>,
    ) -> Result<Self> {
        Ok(Self {
            problem,
            input: input.into(),
            results_dir: results_dir.into(),
            strategies: normalize_strategies(strategies)?,
            verify: false,
        })
    }

    /// Turns witness verification on or off.
    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// The same configuration pointed at a different input file.
    #[must_use]
    pub fn for_input(&self, input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn problem(&self) -> ProblemKind {
        self.problem
    }

    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    #[must_use]
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Enabled strategies in canonical order.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[must_use]
    pub const fn verify(&self) -> bool {
        self.verify
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_strategy_file() {
        let selection = parse_strategy_file(
            r#"{"Project Configuration": {"Selection": "hamilton",
                "Sub Problem": [{"value": "backtracking"}, {"value": "brute_force"}, {"value": "backtracking"}]}}"#,
        )
        .unwrap();
        assert_eq!(selection.problem, Some(ProblemKind::Hamilton));
        assert_eq!(
            selection.strategies,
            vec![Strategy::BruteForce, Strategy::Backtracking]
        );
    }

    #[test]
    fn test_selection_is_optional() {
        let selection = parse_strategy_file(
            r#"{"Project Configuration": {"Sub Problem": [{"value": "best_case"}]}}"#,
        )
        .unwrap();
        assert_eq!(selection.problem, None);
        assert_eq!(selection.strategies, vec![Strategy::BestCase]);
    }

    #[test]
    fn test_unknown_tag() {
        let err = parse_strategy_file(
            r#"{"Project Configuration": {"Sub Problem": [{"value": "greedy"}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(tag) if tag == "greedy"));
    }

    #[test]
    fn test_empty_list() {
        let err =
            parse_strategy_file(r#"{"Project Configuration": {"Sub Problem": []}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            parse_strategy_file("{\"Project Configuration\": ").unwrap_err(),
            Error::Json(_)
        ));
        assert!(matches!(
            parse_strategy_file("{}").unwrap_err(),
            Error::Json(_)
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(
            load_strategy_file(&path).unwrap_err(),
            Error::MissingConfig(p) if p == path
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Project Configuration": {{"Selection": "sat", "Sub Problem": [{{"value": "simple"}}]}}}}"#
        )
        .unwrap();
        let selection = load_strategy_file(file.path()).unwrap();
        assert_eq!(selection.problem, Some(ProblemKind::Sat));
        assert_eq!(selection.strategies, vec![Strategy::Simple]);
    }

    #[test]
    fn test_run_config() {
        let config = RunConfig::new(
            ProblemKind::Sat,
            "a.cnf",
            "results",
            [Strategy::BestCase, Strategy::BruteForce],
        )
        .unwrap()
        .with_verify(true);
        assert_eq!(config.strategies(), &[Strategy::BruteForce, Strategy::BestCase]);
        assert!(config.verify());

        let other = config.for_input("b.cnf");
        assert_eq!(other.input(), Path::new("b.cnf"));
        assert_eq!(other.strategies(), config.strategies());

        assert!(RunConfig::new(ProblemKind::Sat, "a", "r", []).is_err());
    }
}
