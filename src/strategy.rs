#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The closed set of search strategies a run can enable.
//!
//! Every problem engine exposes one `solve(strategy, instance)` entry point that
//! dispatches on this enum, so the orchestrator can iterate over whatever subset
//! of strategies the configuration enables without knowing which problem it runs.

use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A search strategy tag.
///
/// The declaration order is the canonical order in which a run visits enabled
/// strategies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first search over one shared, explicitly undone state.
    #[value(name = "brute_force")]
    BruteForce,
    /// Depth-first search with an independent copy of the state per branch.
    #[value(name = "backtracking")]
    Backtracking,
    /// Reserved slot, no algorithm yet.
    #[value(name = "simple")]
    Simple,
    /// Reserved slot, no algorithm yet.
    #[value(name = "best_case")]
    BestCase,
}

impl Strategy {
    /// All strategies in canonical run order.
    pub const ALL: [Self; 4] = [
        Self::BruteForce,
        Self::Backtracking,
        Self::Simple,
        Self::BestCase,
    ];

    /// The tag used in configuration files and result file names.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Backtracking => "backtracking",
            Self::Simple => "simple",
            Self::BestCase => "best_case",
        }
    }

    /// The method name written into result rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BruteForce => "BruteForce",
            Self::Backtracking => "BackTracking",
            Self::Simple => "Simple",
            Self::BestCase => "BestCase",
        }
    }

    /// Whether an algorithm stands behind this strategy.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::BruteForce | Self::Backtracking)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownStrategy(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.tag().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_tag() {
        let err = "dpll".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(tag) if tag == "dpll"));
    }

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![Strategy::BestCase, Strategy::BruteForce, Strategy::Simple];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Strategy::BruteForce, Strategy::Simple, Strategy::BestCase]
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Strategy::BestCase).unwrap();
        assert_eq!(json, "\"best_case\"");
        let back: Strategy = serde_json::from_str("\"backtracking\"").unwrap();
        assert_eq!(back, Strategy::Backtracking);
    }

    #[test]
    fn test_only_search_strategies_are_implemented() {
        assert!(Strategy::BruteForce.is_implemented());
        assert!(Strategy::Backtracking.is_implemented());
        assert!(!Strategy::Simple.is_implemented());
        assert!(!Strategy::BestCase.is_implemented());
    }
}
