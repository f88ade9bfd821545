/// Handler modules for Discord events and framework errors
mod error;
mod ready;

// Re-export main handler functions
pub use error::handle_framework_error;
pub use ready::handle_ready;
