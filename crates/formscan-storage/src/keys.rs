//! Shared key generation for stored documents and analysis artifacts.
//!
//! Key format: `{millis}-{original_name}` for source documents and
//! `textract-output-{millis}.json` for analysis output.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Prefix of every analysis artifact key
pub const ANALYSIS_KEY_PREFIX: &str = "textract-output-";

/// Source of millisecond timestamps for storage keys.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock (UTC).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Generates storage keys from a clock.
///
/// Timestamps handed out by one generator are strictly increasing: when two
/// keys are requested within the same millisecond the second one is bumped
/// to the next millisecond, so same-name uploads never overwrite each other.
pub struct KeyGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicI64,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl KeyGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicI64::new(0),
        }
    }

    fn next_timestamp(&self) -> i64 {
        let now = self.clock.now_millis();
        // fetch_update returns the previous value on success; the closure never
        // returns None so this cannot fail.
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        now.max(prev + 1)
    }

    /// Key for an uploaded source document: `{millis}-{name}`.
    pub fn source_key(&self, original_name: &str) -> String {
        format!("{}-{}", self.next_timestamp(), file_name_component(original_name))
    }

    /// Key for an analysis artifact: `textract-output-{millis}.json`.
    pub fn analysis_key(&self) -> String {
        format!("{}{}.json", ANALYSIS_KEY_PREFIX, self.next_timestamp())
    }
}

/// Punctuation that object store paths keep as-is.
const KEY_SAFE_PUNCTUATION: &str = " -_.()+,!@=&$';:";

/// Final path component of a client-supplied file name, made key-safe.
///
/// Some browsers send `C:\fakepath\x.pdf` or relative paths; only the last
/// segment is kept. Characters an object store path would percent-encode
/// (`#`, `[`, `%`, non-ASCII, ...) become `_`, so the key written to the
/// bucket is byte-for-byte the key handed to the analyzer. Empty names become
/// `unknown`.
pub fn file_name_component(original_name: &str) -> String {
    let name = original_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        return "unknown".to_string();
    }
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || KEY_SAFE_PUNCTUATION.contains(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
