//! Lookup table validator.
//!
//! Re-derives every precomputed table from direct bit arithmetic and checks
//! the structural facts the rest of the crate relies on:
//! - every `center` walk ends on one of the four roots
//! - the depth histogram is 4 / 12 / 48
//! - `reverse` is an involution
//! - consecutive Gray codes differ in one bit

use tracing::debug;
use yijing::lut;
use yijing::Hexagram;

use crate::report::{check_count, ConformanceReport, TestResult};

const VALIDATOR: &str = "tables";

/// Expected number of hexagrams at nuclear depth 0, 1 and 2.
const EXPECTED_DEPTHS: [usize; 3] = [4, 12, 48];

/// Validates the lookup tables.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    validate_against_bits(&mut report);
    validate_convergence(&mut report);
    validate_gray(&mut report);
    debug!(results = report.results.len(), "table validation finished");
    report
}

/// Compares each table entry with the bit formula it caches.
fn validate_against_bits(report: &mut ConformanceReport) {
    let mut mismatches = Vec::new();
    for v in 0..64u8 {
        if lut::center(v) != lut::center_bits(v) {
            mismatches.push(format!("CENTER[{v}] = {}", lut::center(v)));
        }
        if lut::reverse(v) != lut::reverse_bits(v) {
            mismatches.push(format!("REVERSE[{v}] = {}", lut::reverse(v)));
        }
        if lut::reverse(lut::reverse(v)) != v {
            mismatches.push(format!("reverse is not an involution at {v}"));
        }
        if u32::from(lut::line_count(v)) != v.count_ones() {
            mismatches.push(format!("LINE_COUNT[{v}] = {}", lut::line_count(v)));
        }
    }
    if mismatches.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "CENTER, REVERSE and LINE_COUNT match bit arithmetic",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} table entries disagree with bit arithmetic", mismatches.len()),
            mismatches,
        ));
    }
}

/// Walks every hexagram to its root and checks the cached root and depth.
fn validate_convergence(report: &mut ConformanceReport) {
    let mut depths = [0usize; 3];
    let mut problems = Vec::new();

    for h in Hexagram::all() {
        let mut value = h;
        let mut steps = 0u8;
        while !value.is_root() && steps < 8 {
            value = value.center();
            steps += 1;
        }
        if !value.is_root() {
            problems.push(format!("{} never reaches a root", h.value()));
            continue;
        }
        if value != h.root() || steps != h.depth() {
            problems.push(format!(
                "{}: walked to {} in {} steps, table says {} in {}",
                h.value(),
                value.value(),
                steps,
                h.root().value(),
                h.depth()
            ));
        }
        match depths.get_mut(usize::from(steps)) {
            Some(slot) => *slot += 1,
            None => problems.push(format!("{} has depth {}", h.value(), steps)),
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every center walk ends on a root and matches ROOT_DEPTH",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Nuclear convergence does not match the cached table",
            problems,
        ));
    }

    for (depth, (&actual, &expected)) in depths.iter().zip(&EXPECTED_DEPTHS).enumerate() {
        check_count(report, VALIDATOR, &format!("depth-{depth}"), actual, expected);
    }
}

fn validate_gray(report: &mut ConformanceReport) {
    let broken: Vec<String> = (0..64u8)
        .filter(|&n| lut::from_gray(lut::to_gray(n)) != n)
        .map(|n| format!("from_gray(to_gray({n})) != {n}"))
        .chain(
            (0..63u8)
                .filter(|&n| (lut::to_gray(n) ^ lut::to_gray(n + 1)).count_ones() != 1)
                .map(|n| format!("gray({n}) and gray({}) differ in more than one bit", n + 1)),
        )
        .collect();

    if broken.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Gray code round-trips and steps one bit at a time",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Gray code tables are inconsistent",
            broken,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_pass() {
        let report = validate();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "table failures: {:#?}", failures);
        assert_eq!(report.results.len(), 6);
    }
}
