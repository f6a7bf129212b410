//! Regression cases for the two-sum finder
//!
//! A case is a named input, target and optional expected list result. Cases
//! come from the built-in table or from a TOML file of `[[case]]` tables:
//!
//! ```toml
//! [[case]]
//! name = "issue-36"
//! nums = [2, 7, 11, 15]
//! target = 9
//! expected = [0, 1]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::Deserialize;
use twosum::{find, Outcome};

use crate::error::CaseError;

/// One regression input
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub name: String,
    pub nums: Vec<i64>,
    pub target: i64,
    /// Expected list form of the outcome; unchecked when absent
    #[serde(default)]
    pub expected: Option<Vec<i64>>,
}

impl Case {
    pub fn new(name: &str, nums: &[i64], target: i64, expected: &[i64]) -> Self {
        Self {
            name: name.to_string(),
            nums: nums.to_vec(),
            target,
            expected: Some(expected.to_vec()),
        }
    }
}

/// Parsed case file
#[derive(Debug, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub case: Vec<Case>,
}

impl CaseFile {
    /// Load and validate a case file from disk
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let content = fs::read_to_string(path).map_err(|source| CaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} bytes from {}", content.len(), path.display());
        Self::parse(&content)
    }

    /// Parse and validate case file content
    pub fn parse(content: &str) -> Result<Self, CaseError> {
        let file: CaseFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), CaseError> {
        if self.case.is_empty() {
            return Err(CaseError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, case) in self.case.iter().enumerate() {
            if case.name.trim().is_empty() {
                return Err(CaseError::EmptyName(i + 1));
            }
            if !seen.insert(case.name.as_str()) {
                return Err(CaseError::DuplicateName(case.name.clone()));
            }
        }

        Ok(())
    }
}

/// Built-in regression cases
pub static BUILTIN_CASES: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        Case::new("issue-36", &[2, 7, 11, 15], 9, &[0, 1]),
        Case::new("unsorted", &[3, 2, 4], 6, &[1, 2]),
        Case::new("duplicates", &[3, 3], 6, &[0, 1]),
        Case::new("no-match", &[1, 2, 3], 100, &[]),
        Case::new("empty", &[], 5, &[]),
        Case::new("single", &[4], 8, &[4]),
    ]
});

pub fn builtin_cases() -> &'static [Case] {
    &BUILTIN_CASES
}

/// Result of running one case
#[derive(Debug)]
pub struct CaseReport<'a> {
    pub case: &'a Case,
    pub outcome: Outcome,
    /// Outcome list matched `expected` (or nothing was expected)
    pub matches_expected: bool,
    /// Outcome is consistent with the input
    pub consistent: bool,
}

impl CaseReport<'_> {
    pub fn passed(&self) -> bool {
        self.matches_expected && self.consistent
    }
}

/// Run a single case through the finder
pub fn run_case(case: &Case) -> CaseReport<'_> {
    let outcome = find(&case.nums, case.target);

    let matches_expected = case
        .expected
        .as_ref()
        .map_or(true, |expected| *expected == outcome.to_list());

    let consistent = match &outcome {
        Outcome::Found(pair) => pair.is_solution(&case.nums, case.target),
        Outcome::NotFound => case.nums.len() >= 2,
        Outcome::Degenerate(nums) => *nums == case.nums,
    };

    debug!(
        "case {}: outcome {}, expected ok: {}, consistent: {}",
        case.name, outcome, matches_expected, consistent
    );

    CaseReport {
        case,
        outcome,
        matches_expected,
        consistent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_cases_pass() {
        for case in builtin_cases() {
            let report = run_case(case);
            assert!(report.passed(), "case {} failed: {}", case.name, report.outcome);
        }
    }

    #[test]
    fn test_parse_case_file() {
        let file = CaseFile::parse(
            r#"
[[case]]
name = "issue-36"
nums = [2, 7, 11, 15]
target = 9
expected = [0, 1]

[[case]]
name = "negatives"
nums = [-3, 4, 3, 90]
target = 0
"#,
        )
        .unwrap();

        assert_eq!(file.case.len(), 2);
        assert_eq!(file.case[0].expected, Some(vec![0, 1]));
        assert_eq!(file.case[1].expected, None);
        assert!(file.case.iter().all(|c| run_case(c).passed()));
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let case = Case::new("wrong", &[2, 7, 11, 15], 9, &[1, 0]);
        let report = run_case(&case);
        assert!(!report.matches_expected);
        assert!(report.consistent);
        assert!(!report.passed());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(CaseFile::parse(""), Err(CaseError::Empty)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = CaseFile::parse("[[case]]\nname = \" \"\nnums = [1, 2]\ntarget = 3\n");
        assert!(matches!(result, Err(CaseError::EmptyName(1))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let content = "[[case]]\nname = \"a\"\nnums = [1, 2]\ntarget = 3\n\n\
                       [[case]]\nname = \"a\"\nnums = [4]\ntarget = 4\n";
        match CaseFile::parse(content) {
            Err(CaseError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = CaseFile::parse("[[case]]\nname = \"a\"\nnums = \"oops\"\ntarget = 1\n");
        assert!(matches!(result, Err(CaseError::Parse(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.toml");
        fs::write(&path, "[[case]]\nname = \"pair\"\nnums = [3, 3]\ntarget = 6\nexpected = [0, 1]\n")
            .unwrap();

        let file = CaseFile::load(&path).unwrap();
        assert_eq!(file.case[0].name, "pair");
        assert!(run_case(&file.case[0]).passed());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = CaseFile::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CaseError::Io { .. })));
    }
}
