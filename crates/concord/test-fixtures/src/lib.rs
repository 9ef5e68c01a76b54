//! Golden scenarios for Concord tests.
//!
//! Scenarios are JSON files grouped by suite under `golden/` in this crate.
//! Each test crate deserializes them into its own scenario types.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// A directory of golden scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    /// Search inputs and the candidates they must produce.
    Discovery,
    /// Resolved decision histories and the insights they must yield.
    Consensus,
}

impl Suite {
    pub const ALL: [Suite; 2] = [Suite::Discovery, Suite::Consensus];

    fn dir_name(self) -> &'static str {
        match self {
            Suite::Discovery => "discovery",
            Suite::Consensus => "consensus",
        }
    }

    pub fn dir(self) -> PathBuf {
        golden_root().join(self.dir_name())
    }
}

/// A scenario and the file stem it came from.
#[derive(Debug)]
pub struct Golden<T> {
    pub name: String,
    pub scenario: T,
}

pub fn golden_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Scenario names in a suite, sorted.
pub fn scenario_names(suite: Suite) -> Vec<String> {
    let dir = suite.dir();
    let entries =
        fs::read_dir(&dir).unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension()? != "json" {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_string())
        })
        .collect();
    names.sort();
    names
}

/// Load one scenario by name, without the `.json` extension.
///
/// # Panics
/// When the file is missing or does not match `T`.
pub fn scenario<T: DeserializeOwned>(suite: Suite, name: &str) -> T {
    let path = suite.dir().join(format!("{name}.json"));
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("{} does not match the scenario shape: {e}", path.display()))
}

/// Every scenario in a suite, in name order.
pub fn load_suite<T: DeserializeOwned>(suite: Suite) -> Vec<Golden<T>> {
    scenario_names(suite)
        .into_iter()
        .map(|name| Golden {
            scenario: scenario(suite, &name),
            name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_suite_covers_each_decision_path() {
        assert_eq!(
            scenario_names(Suite::Discovery),
            [
                "category_merge",
                "regional_fallback",
                "slang_uncertain",
                "strict_separate"
            ]
        );
    }

    #[test]
    fn every_scenario_is_an_input_expected_pair() {
        let mut total = 0;
        for suite in Suite::ALL {
            for golden in load_suite::<serde_json::Value>(suite) {
                assert!(golden.scenario.get("input").is_some(), "{}", golden.name);
                assert!(golden.scenario.get("expected").is_some(), "{}", golden.name);
                total += 1;
            }
        }
        assert_eq!(total, 5);
    }

    #[test]
    #[should_panic(expected = "cannot read")]
    fn missing_scenario_panics_with_path() {
        let _: serde_json::Value = scenario(Suite::Consensus, "no_such_history");
    }
}
