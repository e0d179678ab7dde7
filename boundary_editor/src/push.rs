//! Background push-message wiring.
//!
//! Delivery is the messaging platform's concern; this module only turns a
//! received payload into an operator-facing notification.

use serde::Deserialize;

/// Notification content shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Sink that can display a notification to the operator.
pub trait NotificationPresenter {
    fn present(&mut self, notification: &Notification);
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    notification: Option<NotificationFields>,
}

#[derive(Debug, Deserialize)]
struct NotificationFields {
    title: Option<String>,
    body: Option<String>,
}

/// Dispatches background messages to a presenter.
pub struct BackgroundMessenger<P> {
    presenter: P,
}

impl<P: NotificationPresenter> BackgroundMessenger<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Handles one raw message payload.
    ///
    /// Extracts the notification's title and body and presents them.
    /// Payloads without a readable notification object are logged and
    /// dropped.
    pub fn on_background_message(&mut self, payload: &str) {
        log::info!("background message received");
        let parsed: MessagePayload = match serde_json::from_str(payload) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("unreadable message payload, dropping: {e}");
                return;
            }
        };
        let fields = match parsed.notification {
            Some(f) => f,
            None => {
                log::warn!("message payload carries no notification, dropping");
                return;
            }
        };
        self.presenter.present(&Notification {
            title: fields.title.unwrap_or_default(),
            body: fields.body.unwrap_or_default(),
        });
    }

    /// The wrapped presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPresenter {
        shown: Vec<Notification>,
    }

    impl NotificationPresenter for RecordingPresenter {
        fn present(&mut self, notification: &Notification) {
            self.shown.push(notification.clone());
        }
    }

    #[test]
    fn message_with_notification_is_presented() {
        let mut messenger = BackgroundMessenger::new(RecordingPresenter::default());
        messenger.on_background_message(
            r#"{"notification":{"title":"Ride update","body":"Driver arrived"}}"#,
        );
        assert_eq!(
            messenger.presenter().shown,
            vec![Notification {
                title: "Ride update".into(),
                body: "Driver arrived".into(),
            }]
        );
    }

    #[test]
    fn malformed_payload_is_dropped() {
        let mut messenger = BackgroundMessenger::new(RecordingPresenter::default());
        messenger.on_background_message("not json");
        messenger.on_background_message(r#"{"data":{"k":"v"}}"#);
        assert!(messenger.presenter().shown.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let mut messenger = BackgroundMessenger::new(RecordingPresenter::default());
        messenger.on_background_message(r#"{"notification":{"title":"Only title"}}"#);
        assert_eq!(messenger.presenter().shown.len(), 1);
        assert_eq!(messenger.presenter().shown[0].body, "");
    }
}
