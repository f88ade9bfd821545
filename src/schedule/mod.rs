/// Schedule management modules
mod birthday_tasks;
mod manager;

// Re-export public types and functions
pub use manager::start_schedule_manager;
