//! Guarded invocation with panic capture
//!
//! [`invoke_guarded`] runs a callback under `catch_unwind` and turns a panic
//! into a [`PanicOutcome`] carrying the payload and a stack snapshot. The
//! snapshot is taken by a process-wide panic hook while the panicking frames
//! are still on the stack, so it shows where the panic happened rather than
//! where it was caught.
//!
//! The hook is installed once and keeps every piece of state in
//! thread-locals. Panics on threads without an active guard are forwarded to
//! whichever hook was installed before.
//!
//! Panics can only be captured when the crate is built with
//! `panic = "unwind"` (the default for tests). The hook is installed on the
//! first guarded call; if user code later replaces it with
//! `std::panic::set_hook`, payloads are still recovered but `stack()` stays
//! empty.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

thread_local! {
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };
    static CAPTURED_STACK: RefCell<Option<String>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

/// Result of a guarded invocation.
pub struct PanicOutcome {
    raised: bool,
    payload: Option<Box<dyn Any + Send>>,
    stack: String,
}

impl PanicOutcome {
    fn returned() -> Self {
        Self {
            raised: false,
            payload: None,
            stack: String::new(),
        }
    }

    /// Whether the callback panicked
    pub fn raised(&self) -> bool {
        self.raised
    }

    /// The panic payload, if the callback panicked
    pub fn payload(&self) -> Option<&(dyn Any + Send)> {
        self.payload.as_deref()
    }

    /// Take ownership of the panic payload, e.g. to resume the panic
    pub fn into_payload(self) -> Option<Box<dyn Any + Send>> {
        self.payload
    }

    /// The panic message, when the payload is a `&str` or `String`
    pub fn message(&self) -> Option<&str> {
        let payload = self.payload.as_deref()?;
        payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Stack snapshot taken at the panic site, empty if the callback returned
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Render the recovered value for diagnostics
    ///
    /// String messages and primitive payloads are rendered with `Debug`. Any
    /// other payload type cannot be named at runtime and renders as
    /// `Box<dyn Any>`.
    pub fn describe_payload(&self) -> String {
        match (self.payload.as_deref(), self.message()) {
            (None, _) => "None".to_string(),
            (Some(_), Some(message)) => format!("{:?}", message),
            (Some(payload), None) => describe_any(payload),
        }
    }
}

macro_rules! debug_primitive {
    ($payload:expr, $($ty:ty),+ $(,)?) => {
        $(
            if let Some(value) = $payload.downcast_ref::<$ty>() {
                return format!("{:?}", value);
            }
        )+
    };
}

fn describe_any(payload: &(dyn Any + Send)) -> String {
    debug_primitive!(
        payload, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
        char,
    );
    "Box<dyn Any>".to_string()
}

impl fmt::Debug for PanicOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicOutcome")
            .field("raised", &self.raised)
            .field("payload", &self.describe_payload())
            .field("stack_len", &self.stack.len())
            .finish()
    }
}

/// Marks the current thread as guarded for the lifetime of the value.
///
/// Dropping the guard runs on every exit path, including unwinding, so the
/// thread never stays marked after the guarded call.
struct Guard;

impl Guard {
    fn enter() -> Self {
        GUARD_DEPTH.with(|depth| depth.set(depth.get() + 1));
        CAPTURED_STACK.with(|stack| stack.borrow_mut().take());
        Guard
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        GUARD_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if GUARD_DEPTH.with(Cell::get) == 0 {
                previous(info);
                return;
            }

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "<unknown>".to_string());
            let snapshot = format!("panicked at {}\n{}", location, Backtrace::force_capture());
            CAPTURED_STACK.with(|stack| {
                if let Ok(mut stack) = stack.try_borrow_mut() {
                    *stack = Some(snapshot);
                }
            });
        }));
    });
}

/// Run `f`, converting a panic into a [`PanicOutcome`].
///
/// The panic never propagates past this call. When `f` returns normally the
/// outcome has `raised() == false`, no payload and an empty stack.
pub fn invoke_guarded<F: FnOnce()>(f: F) -> PanicOutcome {
    install_hook();

    let result = {
        let _guard = Guard::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };

    match result {
        Ok(()) => PanicOutcome::returned(),
        Err(payload) => {
            let stack = CAPTURED_STACK
                .with(|stack| stack.borrow_mut().take())
                .unwrap_or_default();
            PanicOutcome {
                raised: true,
                payload: Some(payload),
                stack,
            }
        }
    }
}
