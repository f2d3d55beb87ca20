//! CLI command handlers. Each command is in its own file for clarity.

mod add;
mod generate;
mod interactive;
mod list;
mod remove;

pub use add::run_add;
pub use generate::run_generate;
pub use interactive::run_interactive;
pub use list::run_list;
pub use remove::run_remove;
