//! One file per subcommand, so the match in main stays a dispatch table.

mod config;
mod levels;
mod log;

pub use config::cmd_config;
pub use levels::cmd_levels;
pub use log::cmd_log;
