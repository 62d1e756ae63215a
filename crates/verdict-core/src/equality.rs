//! Structural deep-equality engine
//!
//! Deep equality is whatever the value's `PartialEq` says it is. Derived
//! `PartialEq` already descends into fields, elements and variants, so the
//! engine does not walk values itself. Two consequences callers rely on:
//!
//! - NaN is never equal to itself, so `equal(h, f64::NAN, f64::NAN)` fails.
//! - `None == None` for the same `Option<T>`, while `None` vs `Some` differs.
//!
//! When the concrete type is only known at runtime, values are compared as
//! [`DynEq`] trait objects. Values of different concrete types are never
//! equal, with no coercion between e.g. `bool` and `i32`.

use std::any::Any;
use std::fmt;

/// Compare two values of the same type by structure.
///
/// This is the single primitive used by the collection differ and the
/// assertion surface.
pub fn deep_equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Equality over values whose concrete type is erased.
///
/// Implemented for every `'static` type with `PartialEq + Debug`, so any
/// such value can be boxed into a `Box<dyn DynEq>`.
///
/// `Box<dyn DynEq>` is itself such a type. Call trait methods on the
/// unboxed `&dyn DynEq` (`boxed.as_ref()`), otherwise the box is compared as
/// a value of type `Box<dyn DynEq>`. `==` between boxes is unaffected.
pub trait DynEq: Any + fmt::Debug {
    /// Upcast to `Any` for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Compare against a value of possibly different concrete type
    fn dyn_eq(&self, other: &dyn DynEq) -> bool;

    /// Name of the concrete type, used in diagnostics
    fn type_name(&self) -> &'static str;
}

impl<T: PartialEq + fmt::Debug + 'static> DynEq for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynEq) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| deep_equal(self, other))
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl PartialEq for dyn DynEq {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

/// Erase the type of `value` for dynamic comparison.
pub fn dynamic<T: DynEq>(value: T) -> Box<dyn DynEq> {
    Box::new(value)
}
