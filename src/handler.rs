//! Handler signature deduction.
//!
//! A handler is any `FnOnce(&T) -> R` whose parameter names a catchable
//! target. The target and its extraction kind are read off the closure's
//! declared parameter type, so chains never spell them out:
//!
//! ```
//! use catch_this::{DynError, ErrorHandle};
//!
//! let handle = ErrorHandle::new(std::fmt::Error);
//! let kind = handle.dispatch((
//!     |_: &std::io::Error| "io",
//!     |_: &DynError| "other error",
//!     |_: &str| "panic message",
//! ));
//! assert_eq!(kind, Some("other error"));
//! ```
//!
//! Shapes that would match anything are rejected when the chain is built.
//! Taking the handle itself:
//!
//! ```compile_fail,E0277
//! use catch_this::ErrorHandle;
//!
//! let handle = ErrorHandle::default();
//! handle.dispatch((|_: &ErrorHandle| 0,));
//! ```
//!
//! Taking an untyped payload:
//!
//! ```compile_fail,E0277
//! use catch_this::ErrorHandle;
//!
//! let handle = ErrorHandle::default();
//! handle.dispatch((|_: &(dyn std::any::Any + Send + Sync)| 0,));
//! ```
//!
//! Taking nothing:
//!
//! ```compile_fail
//! use catch_this::ErrorHandle;
//!
//! let handle = ErrorHandle::default();
//! handle.dispatch((|| 0,));
//! ```
//!
//! Taking more than one parameter:
//!
//! ```compile_fail
//! use catch_this::ErrorHandle;
//!
//! let handle = ErrorHandle::default();
//! handle.dispatch((|_: &std::fmt::Error, _: &std::io::Error| 0,));
//! ```

use core::marker::PhantomData;

use crate::extract::Catch;
use crate::handle::ErrorHandle;

/// A callable that handles payloads of type `T`, extracted with kind `K`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an error handler",
    label = "expected a closure taking exactly one `&T` parameter",
    note = "handlers name the payload they match: `|e: &MyError| ...`, `|e: &DynError| ...` or `|msg: &str| ...`",
    note = "catch-all handlers (`&ErrorHandle`, `&dyn Any`, no parameter) are not supported"
)]
pub trait Handler<K, T: ?Sized> {
    /// Value produced when the handler runs.
    type Output;

    /// Invoke the handler if the payload matches `T`.
    fn try_handle(self, handle: &ErrorHandle) -> Option<Self::Output>;
}

impl<F, K, T, R> Handler<K, T> for F
where
    F: FnOnce(&T) -> R,
    T: ?Sized + Catch<K>,
{
    type Output = R;

    #[inline]
    fn try_handle(self, handle: &ErrorHandle) -> Option<R> {
        let view = T::extract(handle)?;
        Some(self(view))
    }
}

/// Deduced signature of one handler in a chain: extraction kind `K`, target
/// `T`. Only used as a type-level marker.
pub struct Match<K, T: ?Sized>(PhantomData<K>, PhantomData<T>);
