//! Command implementations

pub mod create;
pub mod init;
pub mod list;
pub mod serve;

pub use create::run_create;
pub use init::run_init;
pub use list::run_list;
pub use serve::run_serve;
