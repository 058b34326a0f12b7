//! Process-wide state shared across the binary.

mod state;

pub use state::{is_shutdown, register_server, setup_shutdown_handler};
