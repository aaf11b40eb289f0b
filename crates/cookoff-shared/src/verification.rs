//! One-time verification codes used to gate registration.
//!
//! A code is a 6-digit decimal string drawn uniformly from 100000–999999.
//! Verification is exact string equality: there is no expiry and no attempt
//! limit, so callers may re-prompt indefinitely.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{CODE_MAX, CODE_MIN};

/// A generated one-time code awaiting confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generate a fresh 6-digit code.
    pub fn generate() -> Self {
        Self(OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string())
    }

    /// The code digits, for handing to a delivery channel.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a submitted code against this one.
    pub fn verify(&self, submitted: &str) -> bool {
        self.0 == submitted.trim()
    }
}

impl std::fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
