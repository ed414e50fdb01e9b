pub mod fetcher;
pub mod printerstats;

pub use fetcher::{FetchError, Fetcher};
pub use printerstats::PrinterStatsApi;
