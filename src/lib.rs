//! catch-this - Typed dispatch of captured errors
//!
//! # Overview
//!
//! `catch-this` takes an error that has already been raised, whose concrete
//! type is only known at runtime, and hands it to the first handler in an
//! ordered list whose parameter type matches. Handlers are plain closures;
//! the type each one wants is read from its parameter.
//!
//! # Quick Start
//!
//! ```
//! use catch_this::{raise, ErrorHandle};
//! use std::{fmt, io};
//!
//! let handle = ErrorHandle::capture(|| { raise(fmt::Error); }).unwrap_err();
//!
//! let code = handle.dispatch((
//!     |_: &io::Error| 1,
//!     |_: &fmt::Error| 2,
//! ));
//! assert_eq!(code, Some(2));
//! ```
//!
//! # Operations
//!
//! | Operation | Result when nothing matches |
//! |-----------|-----------------------------|
//! | [`ErrorHandle::dispatch`] | `None` |
//! | [`ErrorHandle::catches`] | `false` (handlers return `()`) |
//! | [`ErrorHandle::try_dispatch`] | `Err(handle)` |
//! | [`ErrorHandle::dispatch_or_escalate`] | process aborts |
//! | [`ErrorHandle::escalate`] | always aborts |
//!
//! # Handler parameters
//!
//! | Parameter | Matches |
//! |-----------|---------|
//! | `&E` where `E: Error + Send + Sync + 'static` | payloads of exactly type `E` |
//! | `&DynError` | any error payload |
//! | `&str` | panic messages |
//! | `&OpaquePanic` | panics with any other payload |
//!
//! Handlers are tried in the order given, regardless of how specific their
//! parameter is. Handlers that would accept anything are rejected at
//! compile time.
//!
//! # Capturing
//!
//! | Source | Conversion |
//! |--------|------------|
//! | a panicking closure | [`ErrorHandle::capture`] |
//! | a closure returning `Result` | [`ErrorHandle::try_capture`] |
//! | an error value | [`ErrorHandle::new`], `From`, `?` |
//! | `catch_unwind` / `join` payloads | [`ErrorHandle::from_panic`] |
//!
//! # Features
//!
//! - `tracing` (default): emit `tracing` events on match, exhaustion and
//!   escalation.

mod chain;
mod dispatch;
mod ext;
mod extract;
mod handle;
mod handler;
mod macros;

// ============================================================
// Re-exports
// ============================================================

pub use chain::{HandlerChain, MAX_CHAIN_LEN};
pub use ext::DispatchExt;
pub use extract::{AsError, AsMessage, Catch, Exact};
pub use handle::{raise, DynError, ErrorHandle, OpaquePanic, TypeToken};
pub use handler::{Handler, Match};

// Re-export proc-macro crate for `dispatch!` expansion
#[doc(hidden)]
pub use catch_this_macros as __macros;
