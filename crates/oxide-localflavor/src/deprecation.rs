//! Deprecation notices for superseded components.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

/// A notice logged when a superseded component is constructed.
///
/// Declare one `static` per component and call [`emit`](Self::emit) from its
/// constructor, after the component itself is fully built. Every call logs;
/// rate limiting or deduplication belongs to the subscriber.
///
/// ```rust
/// use oxide_localflavor::DeprecationNotice;
///
/// static OLD_FIELD: DeprecationNotice =
///     DeprecationNotice::new("OldField", "1.4", "NewField");
///
/// assert!(!OLD_FIELD.emitted());
/// OLD_FIELD.emit();
/// assert!(OLD_FIELD.emitted());
/// ```
#[derive(Debug)]
pub struct DeprecationNotice {
    component: &'static str,
    since: &'static str,
    replacement: &'static str,
    emitted: AtomicBool,
}

impl DeprecationNotice {
    /// Creates a notice for `component`, deprecated in version `since`.
    pub const fn new(
        component: &'static str,
        since: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            component,
            since,
            replacement,
            emitted: AtomicBool::new(false),
        }
    }

    /// Returns the deprecated component's name.
    pub const fn component(&self) -> &'static str {
        self.component
    }

    /// Returns the version the component was deprecated in.
    pub const fn since(&self) -> &'static str {
        self.since
    }

    /// Returns what to use instead.
    pub const fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Returns the warning text.
    pub fn message(&self) -> String {
        format!(
            "{} is deprecated since {}; use {} instead",
            self.component, self.since, self.replacement
        )
    }

    /// Logs the warning.
    pub fn emit(&self) {
        self.emitted.store(true, Ordering::Relaxed);
        warn!(
            target: "oxide_localflavor::deprecation",
            component = self.component,
            since = self.since,
            replacement = self.replacement,
            "{}",
            self.message()
        );
    }

    /// Returns whether the warning has ever been logged.
    pub fn emitted(&self) -> bool {
        self.emitted.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(String, String)>>>);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((event.metadata().target().to_string(), visitor.0));
        }
    }

    #[test]
    fn test_message() {
        let notice = DeprecationNotice::new("PhoneField", "1.4", "phonenumber");
        assert_eq!(
            notice.message(),
            "PhoneField is deprecated since 1.4; use phonenumber instead"
        );
        assert!(!notice.emitted());
    }

    #[test]
    fn test_emit_logs_every_call() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let notice = DeprecationNotice::new("PhoneField", "1.4", "phonenumber");

        // Logged with no subscriber installed; later calls must still log.
        notice.emit();
        tracing::subscriber::with_default(subscriber, || {
            notice.emit();
            notice.emit();
        });

        let events = captured.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|(target, _)| target == "oxide_localflavor::deprecation"));
        assert!(events[0].1.contains("PhoneField is deprecated"));
        assert!(notice.emitted());
    }
}
