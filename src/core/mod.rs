pub mod aggregate;
pub mod analyze;
pub mod config;
pub mod history;
pub mod log;
pub mod model;
pub mod session;
pub mod trend;
