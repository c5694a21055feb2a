use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use log::{debug, error};

use super::cases::TestCase;
use super::reward::{decrypt_clue, derive_unlock_key};
use crate::cs::graph::NodeRef;
use crate::cs::list::{render_list, DEFAULT_RENDER_MAX_NODES};

const RULE_WIDTH: usize = 55;

/// Knobs for a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Node cap when rendering a case's list.
    pub render_max_nodes: usize,
    /// Attach the rendered list to each outcome.
    pub show_lists: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            render_max_nodes: DEFAULT_RENDER_MAX_NODES,
            show_lists: false,
        }
    }
}

/// Result of grading a single case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    /// 1-based position in the suite; doubles as the case signature.
    pub number: usize,
    pub description: String,
    pub passed: bool,
    /// `None` when the list could not be built or the detector panicked.
    pub result: Option<bool>,
    pub expected: bool,
    pub elapsed: Duration,
    pub rendered: Option<String>,
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "Test {:2}: {} | {}", self.number, status, self.description)?;
        if let Some(rendered) = &self.rendered {
            write!(f, "\n         List: {}", rendered)?;
        }
        if !self.passed {
            let got = match self.result {
                Some(found) => found.to_string(),
                None => "crashed".to_string(),
            };
            write!(f, "\n         Expected: {}, Got: {}", self.expected, got)?;
        }
        write!(f, "\n         Time: {:.2}ms", millis(self.elapsed))
    }
}

/// Outcomes of a full run, in suite order.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
    pub signatures: Vec<usize>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// 1-based numbers of the failed cases.
    pub fn failed_tests(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.number)
            .collect()
    }

    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| o.passed)
    }

    /// Percentage of passed cases, `0.0` for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.passed_count() as f64 / self.total() as f64 * 100.0
    }

    pub fn total_time(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }

    pub fn unlock_key(&self) -> String {
        derive_unlock_key(self.passed_count(), self.total(), &self.signatures)
    }

    /// The decoded clue, present only for a perfect run.
    pub fn clue(&self) -> Option<String> {
        decrypt_clue(&self.unlock_key())
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "TEST SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Tests passed: {}/{}", self.passed_count(), self.total())?;
        writeln!(f, "Success rate: {:.1}%", self.success_rate())?;
        write!(f, "Total execution time: {:.2}ms", millis(self.total_time()))?;

        let failed = self.failed_tests();
        if !failed.is_empty() {
            let failed: Vec<String> = failed.iter().map(|n| n.to_string()).collect();
            write!(f, "\nFailed tests: {}", failed.join(", "))?;
        }
        Ok(())
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Builds the case's list, times one detector call on it and grades the
/// answer. A detector that panics fails the case instead of aborting the run.
pub fn run_case<F>(
    detector: &F,
    case: &TestCase,
    number: usize,
    config: &HarnessConfig,
) -> CaseOutcome
where
    F: Fn(&NodeRef<i32>) -> bool,
{
    let mut outcome = CaseOutcome {
        number,
        description: case.description.clone(),
        passed: false,
        result: None,
        expected: case.expected,
        elapsed: Duration::ZERO,
        rendered: None,
    };

    let list = match case.build_list() {
        Ok(list) => list,
        Err(err) => {
            error!("test {} could not be built: {}", number, err);
            return outcome;
        }
    };

    if config.show_lists {
        outcome.rendered = Some(render_list(&list.head_link(), config.render_max_nodes));
    }

    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| detector(list.head())));
    outcome.elapsed = start.elapsed();

    match result {
        Ok(found) => {
            outcome.result = Some(found);
            outcome.passed = found == case.expected;
        }
        Err(_) => error!("test {} crashed", number),
    }
    debug!(
        "test {} finished in {:?}: {:?}",
        number, outcome.elapsed, outcome.result
    );
    outcome
}

/// Runs every case in order. Each case's signature is its 1-based number.
pub fn run_suite<F>(detector: F, cases: &[TestCase], config: &HarnessConfig) -> SuiteReport
where
    F: Fn(&NodeRef<i32>) -> bool,
{
    let mut report = SuiteReport::default();
    for (i, case) in cases.iter().enumerate() {
        let number = i + 1;
        report.outcomes.push(run_case(&detector, case, number, config));
        report.signatures.push(number);
    }
    report
}
