pub mod printer_service;

pub use printer_service::{PrinterService, ServiceError};
