use log::debug;

use super::cases::TOTAL_TEST_CASES;

const ENCRYPTED_CLUE: [u8; 7] = [34, 45, 33, 53, 51, 60, 61];
// "ALLPASS"
const VALIDATION_CHECKSUM: [u8; 7] = [65, 76, 76, 80, 65, 83, 83];
const UNLOCK_KEY: &str = "ALLPASS32";

/// Sentinel key when not every case passed.
pub const FAILED_KEY: &str = "FAILED";
/// Sentinel key when the case signatures do not add up.
pub const INVALID_KEY: &str = "INVALID";

/// Derives the unlock key from a finished run.
///
/// Only a run where every one of the catalogue's cases passed, and whose
/// 1-based signatures sum to `1 + 2 + ... + 32`, yields the real key.
pub fn derive_unlock_key(passed: usize, total: usize, signatures: &[usize]) -> String {
    if passed != total || passed != TOTAL_TEST_CASES {
        return FAILED_KEY.to_string();
    }

    let expected: usize = (1..=TOTAL_TEST_CASES).sum();
    if signatures.iter().sum::<usize>() != expected {
        debug!("signature sum mismatch, expected {}", expected);
        return INVALID_KEY.to_string();
    }

    let mut key: String = VALIDATION_CHECKSUM.iter().map(|&b| char::from(b)).collect();
    key.push_str(&TOTAL_TEST_CASES.to_string());
    key
}

/// XOR-decodes the clue with `key`. Any key other than the unlock key
/// returns `None`.
pub fn decrypt_clue(key: &str) -> Option<String> {
    if key != UNLOCK_KEY {
        return None;
    }

    let clue = ENCRYPTED_CLUE
        .iter()
        .zip(key.bytes().cycle())
        .map(|(&byte, k)| char::from(byte ^ k))
        .collect();
    Some(clue)
}
