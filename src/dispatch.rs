//! Dispatch entry points and the escalation path.

use std::io::{self, Write};
use std::process;

use crate::chain::HandlerChain;
use crate::handle::ErrorHandle;

impl ErrorHandle {
    /// Invoke the first handler whose parameter type matches the payload.
    ///
    /// Handlers are tried strictly in order; at most one runs. Returns `None`
    /// if none matched. An empty chain returns `None` without looking at the
    /// payload or its type.
    ///
    /// A handler that panics is not intercepted: the new panic propagates out
    /// of this call.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_this::ErrorHandle;
    /// use std::{fmt, io};
    ///
    /// let handle = ErrorHandle::new(fmt::Error);
    /// let code = handle.dispatch((
    ///     |_: &io::Error| 1,
    ///     |_: &fmt::Error| 2,
    /// ));
    /// assert_eq!(code, Some(2));
    /// ```
    pub fn dispatch<C, M>(&self, handlers: C) -> Option<C::Output>
    where
        C: HandlerChain<M>,
    {
        if C::LEN == 0 {
            return None;
        }

        let matched = handlers.dispatch(self);

        #[cfg(feature = "tracing")]
        match &matched {
            Some(_) => tracing::trace!(payload = self.type_name(), "handler matched"),
            None => tracing::debug!(payload = self.type_name(), "no handler matched"),
        }

        matched
    }

    /// Run a chain of handlers that return nothing, reporting whether one
    /// of them fired.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_this::ErrorHandle;
    ///
    /// let handle = ErrorHandle::capture(|| { panic!("lost connection"); }).unwrap_err();
    /// let mut seen = None;
    /// assert!(handle.catches((|msg: &str| seen = Some(msg.to_owned()),)));
    /// assert_eq!(seen.as_deref(), Some("lost connection"));
    /// ```
    pub fn catches<C, M>(&self, handlers: C) -> bool
    where
        C: HandlerChain<M, Output = ()>,
    {
        self.dispatch(handlers).is_some()
    }

    /// Like [`dispatch`](Self::dispatch), handing the handle back when no
    /// handler matched so it can be propagated with `?`.
    pub fn try_dispatch<C, M>(self, handlers: C) -> Result<C::Output, ErrorHandle>
    where
        C: HandlerChain<M>,
    {
        match self.dispatch(handlers) {
            Some(value) => Ok(value),
            None => Err(self),
        }
    }

    /// Invoke the first matching handler, escalating if none matches.
    ///
    /// The value is returned unwrapped: either a handler ran or the process
    /// is terminated through [`escalate`](Self::escalate).
    pub fn dispatch_or_escalate<C, M>(&self, handlers: C) -> C::Output
    where
        C: HandlerChain<M>,
    {
        match self.dispatch(handlers) {
            Some(value) => value,
            None => self.escalate(),
        }
    }

    /// Report the held error on stderr, re-raise it, then abort the process.
    ///
    /// This is the zero-handler form of
    /// [`dispatch_or_escalate`](Self::dispatch_or_escalate) and never
    /// returns, whatever the payload. The abort fires while the re-raised
    /// error is still unwinding, so no caller can catch it.
    pub fn escalate(&self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(
            payload = self.type_name(),
            error = %self,
            "unhandled error, aborting"
        );

        let _ = writeln!(io::stderr().lock(), "unhandled error escalated: {:?}", self);

        let _abort = AbortOnUnwind;
        self.clone().reraise()
    }
}

/// Aborts the process when dropped during unwinding.
struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
    fn drop(&mut self) {
        process::abort();
    }
}
