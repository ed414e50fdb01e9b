use crate::models::printer::{Printer, RawRow};

const GO_ICON: &str = "go.gif";
const READY_PHRASE: &str = "ready to print";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readiness {
    pub ready: bool,
    pub error: String,
}

/// Decides whether a printer is usable.
///
/// The upstream page flags readiness either through the icon file name or
/// through the status text, so either signal is enough. When not ready the
/// error is the status, falling back to the message.
pub fn classify(icon: &str, status: &str, message: &str) -> Readiness {
    let ready = icon.eq_ignore_ascii_case(GO_ICON)
        || status.to_lowercase().contains(READY_PHRASE);

    let error = match (ready, status.is_empty()) {
        (true, _) => String::new(),
        (false, false) => status.to_string(),
        (false, true) => message.to_string(),
    };

    Readiness { ready, error }
}

pub fn annotate(row: RawRow) -> Printer {
    let Readiness { ready, error } = classify(&row.icon, &row.status, &row.message);

    Printer {
        name: row.name,
        icon: row.icon,
        message: row.message,
        status: row.status,
        trays: row.trays,
        timestring: row.timestring,
        ready,
        error,
    }
}
