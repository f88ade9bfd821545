use tracing::{error, info};

use crate::models::{Data, MonthDay};
use crate::services::DirectMessenger;
use crate::services::notifier::send_birthday_message;

/// Outcome of one pass over the stored birthdays
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub matched: usize,
    pub delivered: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Check for birthdays on `today` and send every match their message
///
/// Users are processed one at a time; a failed delivery is logged and the
/// pass moves on to the next user.
pub async fn run_birthday_check(
    data: &Data,
    messenger: &dyn DirectMessenger,
    today: MonthDay,
    year: i32,
) -> CheckSummary {
    info!("Checking birthdays for {}...", today);

    let birthdays = data.birthdays.birthdays_on(today);
    let mut summary = CheckSummary {
        matched: birthdays.len(),
        ..Default::default()
    };

    for (user_id, record) in birthdays {
        if data.notify_once_per_day && record.last_notified_year == Some(year) {
            summary.skipped += 1;
            continue;
        }

        match send_birthday_message(data.facts.as_ref(), messenger, user_id, &record).await {
            Ok(()) => {
                summary.delivered += 1;
                info!("Birthday message sent to {} ({})", record.username, user_id);

                if data.notify_once_per_day {
                    if let Err(e) = data.birthdays.mark_notified(user_id, year).await {
                        error!("Failed to save notification marker for user {}: {}", user_id, e);
                    }
                }
            }
            Err(e) => {
                summary.failed += 1;
                error!("Failed to send birthday message to user {}: {}", user_id, e);
            }
        }
    }

    info!(
        "Birthday check for {} done: {} matched, {} sent, {} failed, {} already notified",
        today, summary.matched, summary.delivered, summary.failed, summary.skipped
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::facts::{FactError, FactSource};
    use crate::services::notifier::DeliveryError;
    use crate::services::BirthdayService;
    use crate::store::BirthdayStore;
    use crate::utils::message_formatter::BirthdayMessage;
    use async_trait::async_trait;
    use poise::serenity_prelude::{self as serenity, User, UserId};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Facts that either succeed with a canned line or fail with a status
    #[derive(Default)]
    struct FakeFacts {
        status: Option<u16>,
        requests: Arc<AtomicUsize>,
    }

    impl FakeFacts {
        fn failing(status: u16) -> Self {
            Self {
                status: Some(status),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl FactSource for FakeFacts {
        async fn fetch_fact(&self, date: MonthDay) -> Result<String, FactError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match self.status {
                Some(status) => Err(FactError::UnexpectedStatus(status)),
                None => Ok(format!("Something happened on {}", date)),
            }
        }
    }

    #[derive(Default)]
    struct RecordingMessenger {
        sent: Mutex<Vec<(UserId, BirthdayMessage)>>,
        blocked: Vec<UserId>,
        unknown: Vec<UserId>,
    }

    impl RecordingMessenger {
        fn blocking(blocked: Vec<UserId>) -> Self {
            Self {
                blocked,
                ..Default::default()
            }
        }

        fn missing(unknown: Vec<UserId>) -> Self {
            Self {
                unknown,
                ..Default::default()
            }
        }

        fn recipients(&self) -> Vec<UserId> {
            self.sent.lock().unwrap().iter().map(|(id, _)| *id).collect()
        }
    }

    #[async_trait]
    impl DirectMessenger for RecordingMessenger {
        async fn resolve_user(&self, user_id: UserId) -> Result<User, DeliveryError> {
            if self.unknown.contains(&user_id) {
                return Err(DeliveryError::ResolveUser(
                    user_id,
                    serenity::Error::Other("Unknown User"),
                ));
            }
            let mut user = User::default();
            user.id = user_id;
            Ok(user)
        }

        async fn send_birthday(
            &self,
            user: &User,
            message: &BirthdayMessage,
        ) -> Result<(), DeliveryError> {
            if self.blocked.contains(&user.id) {
                return Err(DeliveryError::Send(serenity::Error::Other(
                    "Cannot send messages to this user",
                )));
            }
            self.sent.lock().unwrap().push((user.id, message.clone()));
            Ok(())
        }
    }

    async fn data_with(
        dir: &tempfile::TempDir,
        birthdays: &[(u64, &str, &str)],
        facts: FakeFacts,
    ) -> Data {
        let service =
            BirthdayService::new(BirthdayStore::load(dir.path().join("birthdays.json")).await);
        for (id, name, date) in birthdays {
            service.set_birthday(UserId::new(*id), name, date).await.unwrap();
        }
        Data::new(service, Arc::new(facts))
    }

    #[tokio::test]
    async fn test_only_todays_birthdays_are_notified() {
        let dir = tempfile::tempdir().unwrap();
        let birthdays = [(1, "A", "6/1"), (2, "B", "6/2")];
        let data = data_with(&dir, &birthdays, FakeFacts::default()).await;
        let messenger = RecordingMessenger::default();

        let summary = run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        assert_eq!(messenger.recipients(), vec![UserId::new(1)]);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.delivered, 1);
    }

    #[tokio::test]
    async fn test_message_contains_name_and_fact() {
        let dir = tempfile::tempdir().unwrap();
        let data = data_with(&dir, &[(1, "Alice", "6/1")], FakeFacts::default()).await;
        let messenger = RecordingMessenger::default();

        run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        let sent = messenger.sent.lock().unwrap();
        let (_, message) = &sent[0];
        assert!(message.description.contains("Alice"));
        assert_eq!(message.fact, "*Something happened on 6/1*");
    }

    #[tokio::test]
    async fn test_error_status_uses_date_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let data = data_with(&dir, &[(1, "Alice", "6/1")], FakeFacts::failing(500)).await;
        let messenger = RecordingMessenger::default();

        run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        let sent = messenger.sent.lock().unwrap();
        assert_eq!(
            sent[0].1.fact,
            "*On June 1, history was made - just like today with your birthday!*"
        );
    }

    #[tokio::test]
    async fn test_failed_delivery_does_not_stop_the_pass() {
        let dir = tempfile::tempdir().unwrap();
        let data = data_with(
            &dir,
            &[(1, "A", "6/1"), (2, "B", "6/1"), (3, "C", "6-1")],
            FakeFacts::default(),
        )
        .await;
        let messenger = RecordingMessenger::blocking(vec![UserId::new(2)]);

        let summary = run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        assert_eq!(messenger.recipients(), vec![UserId::new(1), UserId::new(3)]);
        assert_eq!(
            summary,
            CheckSummary {
                matched: 3,
                delivered: 2,
                failed: 1,
                skipped: 0
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_user_gets_no_fact_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let facts = FakeFacts::default();
        let requests = facts.requests.clone();
        let data = data_with(&dir, &[(1, "A", "6/1"), (2, "B", "6/1")], facts).await;
        let messenger = RecordingMessenger::missing(vec![UserId::new(1)]);

        let summary = run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        assert_eq!(messenger.recipients(), vec![UserId::new(2)]);
        assert_eq!(requests.load(Ordering::SeqCst), 1);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn test_repeated_passes_notify_again_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let data = data_with(&dir, &[(1, "A", "6/1")], FakeFacts::default()).await;
        let messenger = RecordingMessenger::default();

        run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;
        run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;

        assert_eq!(messenger.recipients().len(), 2);
    }

    #[tokio::test]
    async fn test_once_per_day_mode_skips_notified_users() {
        let dir = tempfile::tempdir().unwrap();
        let birthdays = [(1, "A", "6/1"), (2, "B", "6/1")];
        let mut data = data_with(&dir, &birthdays, FakeFacts::default()).await;
        data.notify_once_per_day = true;
        let blocked = RecordingMessenger::blocking(vec![UserId::new(2)]);

        run_birthday_check(&data, &blocked, MonthDay::new(6, 1), 2026).await;

        // B failed the first time, so only B is retried
        let messenger = RecordingMessenger::default();
        let summary = run_birthday_check(&data, &messenger, MonthDay::new(6, 1), 2026).await;
        assert_eq!(messenger.recipients(), vec![UserId::new(2)]);
        assert_eq!(summary.skipped, 1);

        // A new year clears the marker
        let next_year = RecordingMessenger::default();
        run_birthday_check(&data, &next_year, MonthDay::new(6, 1), 2027).await;
        assert_eq!(next_year.recipients().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let data = data_with(&dir, &[], FakeFacts::default()).await;
        let messenger = RecordingMessenger::default();

        let summary = run_birthday_check(&data, &messenger, MonthDay::new(1, 1), 2026).await;

        assert_eq!(summary, CheckSummary::default());
    }
}
