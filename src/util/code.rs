//! Human-presentable code generation.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

const CODE_SUFFIX_LEN: usize = 8;

/// Generate a code of the form `{prefix}-{unix_millis}-{suffix}`.
///
/// The suffix is uppercase alphanumeric, so codes generated in the same
/// millisecond still collide only with negligible probability. The unique
/// index on `ticket.ticket_no` catches the residual case.
pub fn generate_code(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_SUFFIX_LEN)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();

    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), suffix)
}
