/// Pure functions for formatting command replies (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format a success message with emoji
pub fn format_success(message: &str) -> String {
    format!("✅ {}", message)
}

/// Format a birthday message with emoji
pub fn format_birthday(message: &str) -> String {
    format!("🎂 {}", message)
}

/// Reply for a date that is not `MM/DD` or `MM-DD`
pub fn build_invalid_date_error() -> String {
    format_error("Invalid date format! Please use MM/DD format (e.g., 12/25 or 3/15)")
}

/// Reply after a birthday was saved
pub fn build_birthday_saved(date: &str) -> String {
    format_birthday(&format!(
        "Birthday saved! I'll wish you a happy birthday on {}!",
        date
    ))
}

/// Reply showing the stored birthday
pub fn build_birthday_display(date: &str) -> String {
    format_birthday(&format!("Your birthday is set to: {}", date))
}

/// Reply when the user has no birthday stored
pub fn build_birthday_not_set() -> String {
    format_error("You haven't set your birthday yet! Use `/setbirthday` to set it.")
}

/// Reply after a birthday was removed
pub fn build_birthday_removed() -> String {
    format_success("Your birthday has been removed from the bot.")
}

/// Reply when there is no birthday to remove
pub fn build_nothing_to_remove() -> String {
    format_error("You don't have a birthday set.")
}

/// Build a storage error message (generic, doesn't expose internals)
pub fn build_storage_error() -> String {
    format_error("Something went wrong while updating your birthday. Please try again later.")
}
