use serde::Serialize;
use std::time::Duration;

/// One table row as extracted, before readiness is derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub icon: String,
    pub message: String,
    pub status: String,
    pub trays: Vec<String>,
    pub timestring: String,
}

/// A printer as served to callers.
///
/// `error` is empty exactly when `ready` is true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Printer {
    pub name: String,
    pub icon: String,
    pub message: String,
    pub status: String,
    pub trays: Vec<String>,
    pub timestring: String,
    pub ready: bool,
    pub error: String,
}

/// Successful response body: every printer plus cache freshness left.
#[derive(Clone, Debug, Serialize)]
pub struct PrinterReport {
    pub printers: Vec<Printer>,
    #[serde(rename = "ttl", serialize_with = "as_millis")]
    pub remaining: Duration,
}

fn as_millis<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
}
