//! Hardware description schema consumed by performance models.
//!
//! A hardware description is a nested JSON mapping produced by the
//! microbenchmark harness. Models only ever read it; ownership and
//! lifecycle stay with the caller. The portion this pipeline depends on is
//! the `cpus.benchmarks` mapping, whose fields are measured latencies and
//! size constants for the host CPU:
//!
//! ```json
//! {
//!   "cpus": {
//!     "benchmarks": {
//!       "T_float_gt": 2.0, "T_int_add": 1.0,
//!       "L1_linesize": 64, "L2_linesize": 64, "L3_linesize": 64,
//!       "T_L1_read": 1, "T_L2_read": 4, "T_L3_read": 12, "T_DRAM_read": 60
//!     }
//!   }
//! }
//! ```
//!
//! Field lookups report failures as [`MissingField`] values naming the
//! dotted path that did not resolve, so callers see `cpus.benchmarks`
//! rather than a bare key name.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A required path that did not resolve in a hardware description.
///
/// Carries the full dotted path (e.g. `cpus.benchmarks.T_L1_read`) so the
/// error message points at the exact missing or non-numeric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    path: String,
}

impl MissingField {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the dotted path that failed to resolve.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing field `{}` in hardware description", self.path)
    }
}

impl std::error::Error for MissingField {}

/// An externally-owned hardware description record.
///
/// Thin wrapper over the raw JSON value. Kept opaque rather than fully
/// typed because the harness records far more than any single model reads;
/// models pull out the fields they need and ignore the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareDescription(Value);

impl HardwareDescription {
    /// Wraps an already-parsed JSON document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a hardware description from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader).map(Self)
    }

    /// Resolves the `cpus.benchmarks` mapping.
    ///
    /// Fails with the first path segment that is absent (or not a
    /// mapping), so `{"cpus": {}}` reports `cpus.benchmarks` while an
    /// empty document reports `cpus`.
    pub fn benchmarks(&self) -> Result<BenchmarkSet<'_>, MissingField> {
        let cpus = self
            .0
            .get("cpus")
            .ok_or_else(|| MissingField::new("cpus"))?;
        cpus.get("benchmarks")
            .and_then(Value::as_object)
            .map(BenchmarkSet)
            .ok_or_else(|| MissingField::new("cpus.benchmarks"))
    }
}

impl From<Value> for HardwareDescription {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed view of the `cpus.benchmarks` mapping.
///
/// Obtained via [`HardwareDescription::benchmarks`]; lookups borrow the
/// description for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkSet<'a>(&'a serde_json::Map<String, Value>);

impl BenchmarkSet<'_> {
    /// Looks up a measured benchmark field as `f64`.
    ///
    /// A present-but-non-numeric value is reported the same way as an
    /// absent one: the caller asked for a measurement that isn't there.
    pub fn value(&self, field: &str) -> Result<f64, MissingField> {
        self.0
            .get(field)
            .and_then(Value::as_f64)
            .ok_or_else(|| MissingField::new(format!("cpus.benchmarks.{field}")))
    }
}
