//! Command implementations.

pub mod check;
pub mod config;
pub mod labels;
pub mod layout;
pub mod resolve;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::labels::execute_labels;
pub use self::layout::execute_layout;
pub use self::resolve::execute_resolve;
