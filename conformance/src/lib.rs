//! Yijing conformance suite.
//!
//! Validates the fixed tables of the `yijing` crate against the counts and
//! identities they are known to satisfy, and reports each check as PASS,
//! WARN or FAIL.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | tables | lookup tables against bit arithmetic, root depths 4/12/48, Gray steps |
//! | partitions | disjoint cover, symmetry/mantra/balance/transition populations |
//! | sequences | bijections, bagua products, King Wen pairs, glyphs, palaces |
//! | genetic-code | codon round trip, degeneracy, spot checks |
//!
//! # Entry Point
//!
//! ```
//! let report = yijing_conformance::run_all().unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Lookup tables and nuclear convergence
/// 2. Classification partitions
/// 3. Sequences
/// 4. Genetic code
///
/// # Errors
///
/// Returns an error if a built-in ordering cannot be regenerated.
pub fn run_all() -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::tables::validate());
    report.extend(validators::partitions::validate());
    report.extend(validators::sequences::validate()?);
    report.extend(validators::genetic_code::validate());

    let summary = report.summary();
    tracing::info!(
        passed = summary.passed,
        warned = summary.warned,
        failed = summary.failed,
        "conformance run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    #[test]
    fn full_run_passes() {
        let report = run_all().unwrap();
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .collect();
        assert!(failures.is_empty(), "conformance failures: {:#?}", failures);
    }

    #[test]
    fn every_validator_reports() {
        let report = run_all().unwrap();
        for name in ["tables", "partitions", "sequences", "genetic-code"] {
            assert!(
                report.results.iter().any(|r| r.validator == name),
                "{name} produced no results"
            );
        }
    }

    #[test]
    fn report_serializes() {
        let report = run_all().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), report.results.len());
        assert_eq!(results[0]["severity"], "pass");
    }
}
