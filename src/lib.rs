pub mod config;
pub mod console;
pub mod db;
pub mod observability;

pub use config::Config;
pub use console::Console;
