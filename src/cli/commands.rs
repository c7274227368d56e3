pub mod analyze;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod model;
pub mod trend;
pub mod whoami;
