//! Ordered handler chains.
//!
//! A chain is a tuple of handlers tried front to back. Every handler in a
//! chain returns the same `Output`; the empty tuple is the terminal chain and
//! never matches.

use crate::handle::ErrorHandle;
use crate::handler::{Handler, Match};

/// An ordered, statically sized list of handlers.
///
/// `M` records the deduced signature of each handler and is always inferred.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a handler chain",
    label = "expected a tuple of handlers that all return the same type",
    note = "each handler takes exactly one `&T` parameter: `(|e: &A| 1, |e: &B| 2)`",
    note = "catch-all handlers (`&ErrorHandle`, `&dyn Any`, no parameter) are not supported"
)]
pub trait HandlerChain<M> {
    /// Value produced by whichever handler matches.
    type Output;

    /// Number of handlers in the chain.
    const LEN: usize;

    /// Invoke the first handler whose target matches, or return `None` once
    /// the chain is exhausted.
    fn dispatch(self, handle: &ErrorHandle) -> Option<Self::Output>;
}

impl HandlerChain<()> for () {
    type Output = ();

    const LEN: usize = 0;

    #[inline]
    fn dispatch(self, _handle: &ErrorHandle) -> Option<()> {
        None
    }
}

macro_rules! impl_handler_chain {
    ($($handler:ident $kind:ident $target:ident $var:ident),+) => {
        impl<R, $($handler, $kind, $target: ?Sized),+> HandlerChain<($(Match<$kind, $target>,)+)>
            for ($($handler,)+)
        where
            $($handler: Handler<$kind, $target, Output = R>,)+
        {
            type Output = R;

            const LEN: usize = [$(stringify!($handler)),+].len();

            #[inline]
            fn dispatch(self, handle: &ErrorHandle) -> Option<R> {
                let ($($var,)+) = self;
                $(
                    if let Some(value) = $var.try_handle(handle) {
                        return Some(value);
                    }
                )+
                None
            }
        }
    };
}

impl_handler_chain!(H1 K1 T1 h1);
impl_handler_chain!(H1 K1 T1 h1, H2 K2 T2 h2);
impl_handler_chain!(H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3);
impl_handler_chain!(H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4);
impl_handler_chain!(H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7, H8 K8 T8 h8
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7, H8 K8 T8 h8, H9 K9 T9 h9
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7, H8 K8 T8 h8, H9 K9 T9 h9, H10 K10 T10 h10
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7, H8 K8 T8 h8, H9 K9 T9 h9, H10 K10 T10 h10, H11 K11 T11 h11
);
impl_handler_chain!(
    H1 K1 T1 h1, H2 K2 T2 h2, H3 K3 T3 h3, H4 K4 T4 h4, H5 K5 T5 h5, H6 K6 T6 h6,
    H7 K7 T7 h7, H8 K8 T8 h8, H9 K9 T9 h9, H10 K10 T10 h10, H11 K11 T11 h11,
    H12 K12 T12 h12
);

/// Largest chain accepted by [`HandlerChain`]; the `dispatch!` macro splits
/// longer clause lists into groups of this size.
pub const MAX_CHAIN_LEN: usize = 12;
