//! Test capture mode for deterministic logging assertions
//!
//! This module provides a subscriber layer that captures log events in
//! memory so tests can assert on what an assertion reported.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use verdict_core_types::schema::{
    FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP, FIELD_TEST,
};

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub test: Option<String>,
    pub kind: Option<String>,
    pub code: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Whether the event was emitted on the named test thread
    pub fn from_test(&self, test: &str) -> bool {
        self.test.as_deref() == Some(test)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting log events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let field = |key: &str| visitor.fields.get(key).cloned();
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: field(FIELD_COMPONENT),
            op: field(FIELD_OP),
            event: field(FIELD_EVENT),
            test: field(FIELD_TEST),
            kind: field(FIELD_ERR_KIND),
            code: field(FIELD_ERR_CODE),
            fields: visitor.fields.clone(),
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Get the events emitted on the named test thread
    pub fn events_for(&self, test: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.from_test(test))
            .collect()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first call and
/// returns the shared capture instance. Events from concurrently running
/// tests land in the same buffer, filter with [`TestCapture::events_for`].
///
/// # Example
///
/// ```
/// use verdict_core::logging_facility::test_capture::init_test_capture;
/// use verdict_core::log_assert_pass;
///
/// let capture = init_test_capture();
/// log_assert_pass!("my_operation");
/// capture.assert_event_exists("my_operation", "pass");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            // Loses to a subscriber that is already installed
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_event_clone() {
        let event = CapturedEvent {
            level: Level::ERROR,
            component: Some("verdict_core::assertions".to_string()),
            op: Some("equal".to_string()),
            event: Some("fail".to_string()),
            test: Some("tests::equal".to_string()),
            kind: Some("NotEqual".to_string()),
            code: Some("ERR_NOT_EQUAL".to_string()),
            fields: HashMap::new(),
        };

        let cloned = event.clone();
        assert_eq!(cloned.level, event.level);
        assert_eq!(cloned.code, event.code);
        assert!(cloned.from_test("tests::equal"));
    }

    #[test]
    fn test_layer_records_into_capture() {
        let (layer, capture) = TestCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(
                component = "verdict_core::assertions",
                op = "within",
                event = "fail",
                err.kind = "OutOfRange",
                err.code = "ERR_OUT_OF_RANGE",
            );
        });

        let events = capture.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].op.as_deref(), Some("within"));
        assert_eq!(events[0].component.as_deref(), Some("verdict_core::assertions"));
        assert_eq!(events[0].kind.as_deref(), Some("OutOfRange"));
        assert_eq!(events[0].code.as_deref(), Some("ERR_OUT_OF_RANGE"));

        capture.clear();
        assert_eq!(capture.count_events(|_| true), 0);
    }
}
