//! A scored challenge harness around a cycle detector: a fixed catalogue of
//! list shapes, a runner that times and grades each call, and the unlock
//! message revealed when every case passes.

pub mod cases;
pub mod reward;
pub mod runner;

pub use cases::{all_test_cases, TestCase, TOTAL_TEST_CASES};
pub use reward::{decrypt_clue, derive_unlock_key};
pub use runner::{run_case, run_suite, CaseOutcome, HarnessConfig, SuiteReport};
