/// Pure functions for birthday message formatting (Discord-agnostic)
use crate::utils::datetime::get_month_name;

/// Contents of the birthday direct message, before it becomes an embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayMessage {
    pub title: String,
    pub description: String,
    pub fact_title: String,
    pub fact: String,
    pub footer: String,
}

/// Build the birthday greeting for a user
pub fn build_birthday_message(username: &str, fact: &str) -> BirthdayMessage {
    BirthdayMessage {
        title: "🎉 Happy Birthday! 🎂".to_string(),
        description: build_birthday_greeting(username),
        fact_title: "📚 Fun Historical Fact".to_string(),
        fact: format!("*{}*", fact.trim()),
        footer: "Birthday wishes from your friendly Discord bot! 💕".to_string(),
    }
}

/// Build the greeting line shown at the top of the message
pub fn build_birthday_greeting(username: &str) -> String {
    format!(
        "Happy Birthday, {}! 🎈\n\nHope you have a wonderful day filled with joy, laughter, and cake! 🍰",
        username
    )
}

/// Fallback fact when the facts service answered with an error status
pub fn build_date_fallback_fact(month: u32, day: u32) -> String {
    format!(
        "On {} {}, history was made - just like today with your birthday!",
        get_month_name(month),
        day
    )
}

/// Fallback fact when the facts service could not be used at all
pub fn build_generic_fallback_fact() -> String {
    "Today is a special day in history - it's your birthday! 🎂".to_string()
}
