//! The `dispatch!` macro.
//!
//! This declarative front end passes `$crate` to the proc macro so the
//! expansion can name runtime types from any calling crate.

/// Dispatch a handle with `catch Type(e) { ... }` clauses.
///
/// Clauses are tried in order and at most one body runs. Without an `else`
/// the macro evaluates to `Option<T>`; `else escalate` and `else { ... }`
/// make it evaluate to `T`.
///
/// # Patterns
///
/// | Pattern | Description |
/// |---------|-------------|
/// | `catch Type(e) { }` | Run body with `e: &Type` |
/// | `catch Type { }` | Same, payload ignored |
/// | `catch str(msg) { }` | Panic messages |
/// | `catch DynError(e) { }` | Any error payload |
/// | `else escalate` | Abort when nothing matched |
/// | `else { }` | Fallback value when nothing matched |
///
/// # Examples
///
/// ```
/// use catch_this::{dispatch, ErrorHandle};
/// use std::{fmt, io};
///
/// let handle = ErrorHandle::new(fmt::Error);
///
/// let code = dispatch! { handle =>
///     catch io::Error(e) { e.raw_os_error().unwrap_or(1) }
///     catch fmt::Error { 2 }
/// };
/// assert_eq!(code, Some(2));
///
/// let code = dispatch! { &handle =>
///     catch io::Error { 1 }
///     else { 0 }
/// };
/// assert_eq!(code, 0);
/// ```
///
/// Clauses must name a type:
///
/// ```compile_fail
/// use catch_this::{dispatch, ErrorHandle};
///
/// let handle = ErrorHandle::default();
/// let _ = dispatch! { handle => catch e { 0 } };
/// ```
#[macro_export]
macro_rules! dispatch {
    ($handle:expr => $($clauses:tt)*) => {
        $crate::__macros::__dispatch_proc!($crate, $handle, $($clauses)*)
    };
}
