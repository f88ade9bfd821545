// Command modules
mod birthday;

// Re-export all commands
pub use birthday::{my_birthday, remove_birthday, set_birthday};
