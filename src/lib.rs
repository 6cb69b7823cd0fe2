pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod run;
pub mod user_config;
