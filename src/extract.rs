//! Type-identity checked extraction of typed views from a handle.

use std::error::Error as StdError;

use crate::handle::{DynError, ErrorHandle};

// ============================================================
// Extraction kinds
// ============================================================

/// Kind marker: the payload's concrete type must be exactly the target.
#[derive(Debug)]
pub enum Exact {}

/// Kind marker: any error payload, viewed as [`DynError`].
#[derive(Debug)]
pub enum AsError {}

/// Kind marker: a panic message, viewed as `str`.
#[derive(Debug)]
pub enum AsMessage {}

/// Types a handler can name as its parameter.
///
/// `K` selects how the view is produced; it is inferred from the target and
/// never has to be written out. Three families are catchable:
///
/// | Target | Kind | Matches |
/// |--------|------|---------|
/// | `E: Error + Send + Sync + 'static` | [`Exact`] | payloads of type `E` |
/// | [`DynError`] | [`AsError`] | any error payload |
/// | `str` | [`AsMessage`] | panic messages |
///
/// There is deliberately no target matching every payload.
pub trait Catch<K>: 'static {
    /// Borrow the handle's payload as `Self`, or `None` on a type mismatch.
    fn extract(handle: &ErrorHandle) -> Option<&Self>;
}

impl<E: StdError + Send + Sync + 'static> Catch<Exact> for E {
    #[inline]
    fn extract(handle: &ErrorHandle) -> Option<&E> {
        handle.payload()?.as_any().downcast_ref::<E>()
    }
}

impl Catch<AsError> for DynError {
    #[inline]
    fn extract(handle: &ErrorHandle) -> Option<&DynError> {
        handle.as_error()
    }
}

impl Catch<AsMessage> for str {
    #[inline]
    fn extract(handle: &ErrorHandle) -> Option<&str> {
        handle.message()
    }
}

impl ErrorHandle {
    /// Typed view of the payload if it matches `T`.
    ///
    /// Never copies the payload; the view borrows from the handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_this::{DynError, ErrorHandle};
    ///
    /// let handle = ErrorHandle::new(std::fmt::Error);
    /// assert!(handle.try_extract::<std::fmt::Error, _>().is_some());
    /// assert!(handle.try_extract::<DynError, _>().is_some());
    /// assert!(handle.try_extract::<str, _>().is_none());
    /// ```
    #[inline]
    pub fn try_extract<T, K>(&self) -> Option<&T>
    where
        T: ?Sized + Catch<K>,
    {
        T::extract(self)
    }

    /// Exact-type view of the payload.
    #[inline]
    pub fn downcast_ref<E: StdError + Send + Sync + 'static>(&self) -> Option<&E> {
        <E as Catch<Exact>>::extract(self)
    }

    /// Check whether the payload is exactly an `E`.
    #[inline]
    pub fn is<E: StdError + Send + Sync + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }
}
