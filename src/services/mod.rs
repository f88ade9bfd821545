/// Business logic, kept apart from the Discord command and event plumbing
mod birthday_service;
pub mod facts;
pub mod notifier;

pub use birthday_service::{BirthdayError, BirthdayService};
pub use facts::{FactSource, NumbersApiClient};
pub use notifier::{DirectMessenger, SerenityMessenger};
