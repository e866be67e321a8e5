pub mod input_utils;
pub mod log_utils;

pub use input_utils::collect;
pub use log_utils::{init_logging, run_log, timestamp};
