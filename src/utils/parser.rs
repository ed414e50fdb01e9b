//! Row extraction for the printer statistics page.
//!
//! The upstream table alternates `epi-rowEven` / `epi-rowOdd` classes on its
//! data rows, which is the only dependable row boundary. Every data row has
//! six cells: name, icon, message, status, trays and last update time.

use crate::models::printer::RawRow;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, warn};

lazy_static! {
    static ref ROW_SELECTOR: Selector =
        Selector::parse(".epi-rowEven, .epi-rowOdd").expect("valid row selector");
    static ref IMG_SELECTOR: Selector = Selector::parse("img").expect("valid img selector");
    static ref TRAY_SELECTOR: Selector = Selector::parse("font").expect("valid tray selector");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("row has {cells} cells, expected 6")]
    RowMalformed { cells: usize },
}

/// Parses every data row out of `body`, in document order.
///
/// Returns `None` when there is nothing to parse (empty or blank body),
/// which callers must keep distinct from a page with zero rows. Malformed
/// rows are logged and skipped.
pub fn extract_rows(body: &[u8]) -> Option<Vec<RawRow>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        warn!("Nothing to parse: upstream body was empty");
        return None;
    }

    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    let mut rows = Vec::new();
    for (index, element) in document.select(&ROW_SELECTOR).enumerate() {
        match parse_row(element) {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Skipping row {}: {}", index, e),
        }
    }
    debug!("Parsed {} rows from response", rows.len());

    Some(rows)
}

/// Maps one `<tr>` onto a [`RawRow`].
pub fn parse_row(row: ElementRef<'_>) -> Result<RawRow, ParseError> {
    let cells: Vec<ElementRef<'_>> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| cell.value().name() == "td")
        .collect();

    let [name, icon, message, status, trays, time, ..] = cells.as_slice() else {
        return Err(ParseError::RowMalformed { cells: cells.len() });
    };

    Ok(RawRow {
        name: text(name),
        icon: icon_src(icon),
        message: text(message),
        status: text(status),
        trays: trays.select(&TRAY_SELECTOR).map(|tray| text(&tray)).collect(),
        timestring: time_text(time),
    })
}

fn text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

// A cell without an image yields an empty icon rather than failing the row.
fn icon_src(cell: &ElementRef<'_>) -> String {
    cell.select(&IMG_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| src.trim().to_string())
        .unwrap_or_default()
}

fn time_text(cell: &ElementRef<'_>) -> String {
    cell.inner_html()
        .replace("&nbsp;", " ")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}
