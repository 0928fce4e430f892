//! Front-ends shipped with the binary.
//!
//! Both talk to the rest of the system only through the [`UiBus`](retrobus_ui::UiBus).

mod cli;
mod command;
mod null;

pub use cli::CliFrontend;
pub use command::{describe_value, parse_value, Command, HELP};
pub use null::run_null;
