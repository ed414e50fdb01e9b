pub mod display;
pub mod parser;
pub mod readiness;
