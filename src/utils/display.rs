use crate::models::printer::{Printer, PrinterReport};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use std::time::Duration;

pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self, text: &str) -> String {
        format!("\n=== {} ===", text.bright_white().bold())
    }

    pub fn format_printer_table(&self, printers: &[Printer]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(Row::new(
            ["Printer", "Ready", "Status", "Trays", "Updated"]
                .iter()
                .map(|h| Cell::new(h).style_spec("b"))
                .collect(),
        ));

        for printer in printers {
            let detail = if printer.ready {
                printer.status.as_str()
            } else {
                printer.error.as_str()
            };
            let ready = if printer.ready { "yes" } else { "no" };
            let trays = printer.trays.join(", ");

            table.add_row(Row::new(
                [printer.name.as_str(), ready, detail, trays.as_str(), printer.timestring.as_str()]
                    .iter()
                    .map(|text| Cell::new(&self.paint(text, printer.ready)))
                    .collect(),
            ));
        }

        table.to_string()
    }

    /// Ready rows in green, everything else in red.
    pub fn paint(&self, text: &str, ready: bool) -> String {
        if ready {
            text.green().to_string()
        } else {
            text.red().to_string()
        }
    }

    pub fn format_remaining(&self, remaining: Duration) -> String {
        format!("Cache fresh for {:.1}s", remaining.as_secs_f64())
    }

    pub fn format_report(&self, report: &PrinterReport) -> String {
        let ready = report.printers.iter().filter(|p| p.ready).count();

        let mut output = Vec::new();
        output.push(self.format_header(&format!(
            "Printers ({}/{} ready)",
            ready,
            report.printers.len()
        )));
        output.push(self.format_printer_table(&report.printers));
        output.push(self.format_remaining(report.remaining));

        output.join("\n")
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new()
    }
}
