mod config;
pub mod logging;

pub use config::{HOME_ENV, PROGRAM_LOG_LEVEL, PROGRAM_NAME, home_dir};

pub use logging::{init, init_with_verbosity};
