pub mod config;
pub mod errors;
pub mod logging;
mod macros;

pub use config::Settings;
pub use errors::*;
