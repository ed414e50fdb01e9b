pub mod api;
pub mod config;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use services::printer_service::PrinterService;
