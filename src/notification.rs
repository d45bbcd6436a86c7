//! User-facing notifications and the try-and-notify wrapper around async actions.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

/// Presents the outcome of an action to the user.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Runs `action`, reports its outcome through `notifier`, then runs `cleanup`.
///
/// On success the action yields its value together with the message to show.
/// Failures are reported with the error's display text. `cleanup` runs exactly once
/// on both paths.
pub async fn try_and_notify<T, E, F>(
    notifier: &dyn Notifier,
    action: F,
    cleanup: impl FnOnce(),
) -> Result<T, E>
where
    F: Future<Output = Result<(T, String), E>>,
    E: Display,
{
    let result = match action.await {
        Ok((value, message)) => {
            notifier.success(&message);
            Ok(value)
        }
        Err(e) => {
            notifier.failure(&e.to_string());
            Err(e)
        }
    };
    cleanup();
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// Records notifications in memory and mirrors them to the log.
#[derive(Debug, Default)]
pub struct NotificationLog {
    shown: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, notification: Notification) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for NotificationLog {
    fn success(&self, message: &str) {
        info!(message, "Notify success");
        self.record(Notification::Success(message.to_owned()));
    }

    fn failure(&self, message: &str) {
        warn!(message, "Notify failure");
        self.record(Notification::Failure(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_cleanup_runs_after_success() {
        let log = NotificationLog::new();
        let cleaned = Cell::new(false);

        let result: Result<u8, String> =
            try_and_notify(&log, async { Ok((7, "done".to_owned())) }, || cleaned.set(true)).await;

        assert_eq!(result, Ok(7));
        assert!(cleaned.get());
        assert_eq!(log.shown(), [Notification::Success("done".into())]);
    }

    #[tokio::test]
    async fn test_cleanup_runs_after_failure() {
        let log = NotificationLog::new();
        let cleaned = Cell::new(false);

        let result: Result<u8, String> =
            try_and_notify(&log, async { Err("boom".to_owned()) }, || cleaned.set(true)).await;

        assert!(result.is_err());
        assert!(cleaned.get());
        assert_eq!(log.shown(), [Notification::Failure("boom".into())]);
    }
}
