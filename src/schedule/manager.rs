use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use super::birthday_tasks::run_birthday_check;
use crate::constants::BIRTHDAY_CHECK_INTERVAL;
use crate::models::Data;
use crate::services::DirectMessenger;
use crate::utils::datetime::current_month_day;

/// Start the hourly birthday check, unless it is already running
///
/// The first check runs right away, then once per hour.
/// Returns false if the check had already been started.
pub fn start_schedule_manager(data: Data, messenger: Arc<dyn DirectMessenger>) -> bool {
    if data.scheduler_started.swap(true, Ordering::SeqCst) {
        info!("Birthday check already running");
        return false;
    }

    tokio::spawn(async move {
        info!(
            "Birthday check started, running every {} minutes",
            BIRTHDAY_CHECK_INTERVAL.as_secs() / 60
        );

        let mut ticker = interval(BIRTHDAY_CHECK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let (today, year) = current_month_day(data.timezone);
            run_birthday_check(&data, messenger.as_ref(), today, year).await;
        }
    });

    true
}
