//! Host-scoped random trace IDs for correlating log lines across services.
//!
//! A trace ID is a best-effort, human-debuggable tag of the form
//! `<host>-<millis>-<random>`: the last dot-delimited field of the local
//! hostname, the wall-clock time in milliseconds since the epoch, and a
//! random alphanumeric suffix. It is not a globally unique identifier —
//! there are no sequence counters and no cross-host coordination, only
//! enough entropy to make collisions a non-issue when grepping logs.
//!
//! ```
//! use trace_id::{IdGenerator, RandomIdGenerator};
//!
//! let generator = RandomIdGenerator::new();
//! let id = generator.generate();
//! tracing::info!(trace_id = %id, "request accepted");
//! ```

pub mod utils;

// Re-export the helpers at the crate root
pub use utils::hostname::last_dot_field;
pub use utils::random::{random_alphanumeric, random_alphanumeric_with};

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::warn;

use crate::utils::{hostname, random};

/// Source of correlation IDs.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh ID. Infallible: degraded inputs (an unresolvable
    /// hostname) are recovered internally, never surfaced to the caller.
    fn generate(&self) -> String;
}

/// Generates `<host>-<millis>-<random>` trace IDs.
///
/// The host fragment is the last dot-delimited field of the local hostname;
/// when the hostname cannot be resolved, a warning is logged and the
/// fragment is left empty. The fragment is not escaped, so a hostname that
/// itself contains `-` makes the three-field structure ambiguous to parse
/// from the left — consumers that split the ID should split from the right.
#[derive(Clone, Debug)]
pub struct RandomIdGenerator {
    /// Length of the random alphanumeric suffix (default: 8)
    pub suffix_len: usize,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self { suffix_len: 8 }
    }

    /// Set the random suffix length. Zero is allowed and yields an empty
    /// third field.
    pub fn suffix_len(mut self, len: usize) -> Self {
        self.suffix_len = len;
        self
    }

    /// Like [`IdGenerator::generate`], but draws the random suffix from the
    /// provided RNG. Seed it (e.g. `StdRng::seed_from_u64`) for
    /// reproducible suffixes in tests.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> String {
        let host = match hostname::local_host_name() {
            Some(name) => hostname::last_dot_field(&name).to_string(),
            None => {
                warn!("failed to resolve local hostname, leaving host fragment empty");
                String::new()
            }
        };
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let suffix = random::random_alphanumeric_with(rng, self.suffix_len);
        format!("{}-{}-{}", host, millis, suffix)
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }
}
