pub mod cache;
pub mod printer;

pub use cache::{CacheEntry, Cached, TtlCache};
pub use printer::{Printer, PrinterReport, RawRow};
