mod config;
pub mod console;
pub mod logging;

pub use config::{
    COLUMNS_ENV, DEFAULT_CONSOLE_WIDTH, DIAGNOSTIC_PREFIX, HIDDEN_PREFIX, PARENT_ENTRY,
    PROGRAM_LOG_LEVEL, PROGRAM_NAME, SELF_ENTRY,
};
pub use console::console_width;

pub use logging::init;
