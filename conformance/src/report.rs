//! Conformance report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

impl Severity {
    /// Four-letter tag used in the printed report.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARN",
            Self::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Per-severity totals of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Passing checks.
    pub passed: usize,
    /// Warnings.
    pub warned: usize,
    /// Failures.
    pub failed: usize,
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Totals by severity.
    pub fn summary(&self) -> Summary {
        self.results
            .iter()
            .fold(Summary::default(), |mut s, r| {
                match r.severity {
                    Severity::Pass => s.passed += 1,
                    Severity::Warning => s.warned += 1,
                    Severity::Failure => s.failed += 1,
                }
                s
            })
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes a pass when `actual == expected`, a failure otherwise.
pub(crate) fn check_count(
    report: &mut ConformanceReport,
    validator: &str,
    label: &str,
    actual: usize,
    expected: usize,
) {
    if actual == expected {
        report.push(TestResult::pass(
            validator,
            format!("Correct {} count: {}", label, actual),
        ));
    } else {
        report.push(TestResult::fail(
            validator,
            format!(
                "Wrong {} count: expected {}, got {}",
                label, expected, actual
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("b", "hmm"));
        report.push(TestResult::fail_with_details("c", "bad", vec!["x".into()]));
        assert_eq!(
            report.summary(),
            Summary {
                passed: 2,
                warned: 1,
                failed: 1
            }
        );
        assert!(!report.all_passed());
    }

    #[test]
    fn check_count_reports_mismatch() {
        let mut report = ConformanceReport::new();
        check_count(&mut report, "v", "breath", 2, 2);
        check_count(&mut report, "v", "mother", 5, 6);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.results[1].message,
            "Wrong mother count: expected 6, got 5"
        );
    }

    #[test]
    fn serializes_without_empty_details() {
        let json = serde_json::to_string(&TestResult::pass("v", "ok")).unwrap();
        assert_eq!(json, r#"{"validator":"v","message":"ok","severity":"pass"}"#);
    }
}
