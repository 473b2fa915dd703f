//! Process-wide sentinel failures
//!
//! A sentinel is a failure class known ahead of time, such as "not found".
//! Each class is a single `static` item and is matched by address, so two
//! sentinels with the same message are still different classes. Downstream
//! crates may declare their own:
//!
//! ```
//! use faultline_core::{classify, wrap, Failure, Sentinel};
//!
//! static QUOTA_EXCEEDED: Sentinel = Sentinel::new("quota_exceeded", "quota exceeded");
//!
//! let err = wrap("upload", Failure::sentinel(&QUOTA_EXCEEDED));
//! assert!(classify(&err, &QUOTA_EXCEEDED));
//! ```
//!
//! Declare sentinels as `static`, never `const`: a `const` is copied at each
//! use site and has no stable address.

use std::fmt;
use std::ptr;

/// A distinguished failure class, compared by identity
#[derive(Debug)]
pub struct Sentinel {
    name: &'static str,
    message: &'static str,
}

impl Sentinel {
    /// Declare a sentinel class
    ///
    /// `name` is the stable lookup key, `message` is what the failure renders as.
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    /// Stable lookup key
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rendered message
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Sentinel {}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for Sentinel {}

/// The requested item does not exist
pub static NOT_FOUND: Sentinel = Sentinel::new("not_found", "not found");

/// The caller may not perform the operation
pub static PERMISSION_DENIED: Sentinel = Sentinel::new("permission_denied", "permission denied");

/// The operation gave up waiting
pub static TIMED_OUT: Sentinel = Sentinel::new("timed_out", "timed out");

/// A dependency could not be reached
pub static UNAVAILABLE: Sentinel = Sentinel::new("unavailable", "service unavailable");

static REGISTRY: [&Sentinel; 4] = [&NOT_FOUND, &PERMISSION_DENIED, &TIMED_OUT, &UNAVAILABLE];

/// The canonical sentinels, in declaration order
pub fn registry() -> &'static [&'static Sentinel] {
    &REGISTRY
}

/// Resolve a name to its canonical sentinel
pub fn lookup(name: &str) -> Option<&'static Sentinel> {
    REGISTRY.iter().copied().find(|s| s.name == name)
}
