//! Extension trait for Result types.

use crate::chain::HandlerChain;
use crate::handle::ErrorHandle;

/// Extension trait for dispatching the error side of a `Result`.
pub trait DispatchExt<T> {
    /// Run `handlers` over the error, turning a match into `Ok`.
    ///
    /// An unmatched error is returned as an [`ErrorHandle`].
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_this::DispatchExt;
    ///
    /// let port: Result<u16, _> = "http".parse::<u16>();
    /// let port = port.recover((|_: &std::num::ParseIntError| 80,));
    /// assert_eq!(port.unwrap(), 80);
    /// ```
    fn recover<C, M>(self, handlers: C) -> Result<T, ErrorHandle>
    where
        C: HandlerChain<M, Output = T>;

    /// Run `handlers` over the error, escalating if none matches.
    fn recover_or_escalate<C, M>(self, handlers: C) -> T
    where
        C: HandlerChain<M, Output = T>;
}

impl<T, E: Into<ErrorHandle>> DispatchExt<T> for Result<T, E> {
    fn recover<C, M>(self, handlers: C) -> Result<T, ErrorHandle>
    where
        C: HandlerChain<M, Output = T>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => e.into().try_dispatch(handlers),
        }
    }

    fn recover_or_escalate<C, M>(self, handlers: C) -> T
    where
        C: HandlerChain<M, Output = T>,
    {
        match self {
            Ok(v) => v,
            Err(e) => e.into().dispatch_or_escalate(handlers),
        }
    }
}
