//! Captured error handle and the unwind primitives it is built on.

use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::ReentrantMutex;

/// Trait object every error payload can be viewed as.
///
/// Naming this type in a handler matches any payload that is an error,
/// regardless of its concrete type.
pub type DynError = dyn StdError + Send + Sync + 'static;

// ============================================================
// Type identity
// ============================================================

/// Opaque, comparable identifier of a payload's concrete type.
///
/// Equality and hashing only consider the underlying [`TypeId`]; the name is
/// carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for the type `T`.
    #[inline]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Underlying [`TypeId`].
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name as reported by [`core::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this token identifies `T`.
    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================
// Payload storage
// ============================================================

/// Type-erased storage behind a handle.
///
/// Implemented only by the three payload shapes below, so a handle is always
/// one of: an error value, a panic message, or an opaque panic.
pub(crate) trait Payload: Send + Sync + 'static {
    fn token(&self) -> TypeToken;
    fn as_any(&self) -> &(dyn Any + Send + Sync);
    fn as_error(&self) -> Option<&DynError>;
    fn as_message(&self) -> Option<&str>;
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct ErrorPayload<E>(E);

impl<E: StdError + Send + Sync + 'static> Payload for ErrorPayload<E> {
    fn token(&self) -> TypeToken {
        TypeToken::of::<E>()
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &self.0
    }

    fn as_error(&self) -> Option<&DynError> {
        Some(&self.0)
    }

    fn as_message(&self) -> Option<&str> {
        None
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Panic message: `&'static str` from `panic!("literal")`, `String` from
/// formatted panics.
struct MessagePayload<M>(M);

impl<M: AsRef<str> + Send + Sync + 'static> Payload for MessagePayload<M> {
    fn token(&self) -> TypeToken {
        TypeToken::of::<M>()
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &self.0
    }

    fn as_error(&self) -> Option<&DynError> {
        None
    }

    fn as_message(&self) -> Option<&str> {
        Some(self.0.as_ref())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_ref())
    }
}

/// A panic payload that is neither an error handle nor a message.
///
/// Raw panic payloads are only `Send`, so the box is kept behind a reentrant
/// lock to let the owning handle be shared between threads. Name this type in
/// a handler to match such panics, then inspect the payload with
/// [`with`](Self::with). The payload is never moved out: every clone of the
/// handle sees it for as long as the handle lives.
pub struct OpaquePanic {
    inner: TypeId,
    payload: ReentrantMutex<Box<dyn Any + Send>>,
}

impl OpaquePanic {
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
        Self {
            inner: (&*payload).type_id(),
            payload: ReentrantMutex::new(payload),
        }
    }

    /// [`TypeId`] of the original panic payload.
    pub fn payload_type_id(&self) -> TypeId {
        self.inner
    }

    /// Check whether the original payload was a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner == TypeId::of::<T>()
    }

    /// Borrow the payload as `T` for the duration of `f`.
    ///
    /// Returns `None` if the payload is not a `T`. Calls may nest on the same
    /// thread; another thread calling `with` waits until `f` returns.
    pub fn with<T: Any, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.payload.lock();
        let payload = (**guard).downcast_ref::<T>()?;
        Some(f(payload))
    }
}

impl fmt::Debug for OpaquePanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaquePanic")
            .field("payload_type_id", &self.inner)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for OpaquePanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("panic with a non-string payload")
    }
}

impl StdError for OpaquePanic {}

// ============================================================
// ErrorHandle
// ============================================================

/// Shared-ownership handle to a captured error.
///
/// A handle is either empty or refers to exactly one payload. Clones share
/// the payload, which is released when the last clone is dropped. Handles
/// are `Send + Sync`; the payload is immutable once captured.
///
/// # Examples
///
/// ```
/// use catch_this::ErrorHandle;
///
/// let handle = ErrorHandle::capture(|| { panic!("disk on fire"); }).unwrap_err();
/// assert_eq!(handle.message(), Some("disk on fire"));
/// ```
#[derive(Clone, Default)]
pub struct ErrorHandle {
    payload: Option<Arc<dyn Payload>>,
}

impl ErrorHandle {
    /// Wrap an error value.
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self {
            payload: Some(Arc::new(ErrorPayload(error))),
        }
    }

    /// Handle that refers to no error.
    #[inline]
    pub const fn empty() -> Self {
        Self { payload: None }
    }

    fn from_message<M: AsRef<str> + Send + Sync + 'static>(message: M) -> Self {
        Self {
            payload: Some(Arc::new(MessagePayload(message))),
        }
    }

    /// Convert a raw panic payload.
    ///
    /// A payload raised by [`reraise`](Self::reraise) is unwrapped back into
    /// the original handle, so a reraise/capture round trip yields the same
    /// payload. Panic messages keep their string type; anything else is
    /// stored as an [`OpaquePanic`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<ErrorHandle>() {
            Ok(handle) => return *handle,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::from_message(*message),
            Err(payload) => payload,
        };
        match payload.downcast::<String>() {
            Ok(message) => Self::from_message(*message),
            Err(payload) => Self::new(OpaquePanic::new(payload)),
        }
    }

    /// Run `f`, capturing the error it raises.
    ///
    /// Returns `Ok` with the closure's value if nothing was raised.
    pub fn capture<R>(f: impl FnOnce() -> R) -> Result<R, ErrorHandle> {
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(Self::from_panic)
    }

    /// Like [`capture`](Self::capture), for closures that also report errors
    /// through their return value.
    pub fn try_capture<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<T, ErrorHandle>
    where
        E: Into<ErrorHandle>,
    {
        Self::capture(f)?.map_err(Into::into)
    }

    /// Raise the held error again, preserving its payload and identity.
    pub fn reraise(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }

    // ========================================
    // Low level accessors
    // ========================================

    pub(crate) fn payload(&self) -> Option<&dyn Payload> {
        self.payload.as_deref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    /// Identity of the payload's concrete type, `None` for an empty handle.
    pub fn type_of(&self) -> Option<TypeToken> {
        self.payload().map(Payload::token)
    }

    /// Name of the payload's concrete type.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_of().map(|token| token.name())
    }

    /// Untyped view of the payload.
    pub fn raw_view(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.payload().map(Payload::as_any)
    }

    /// Untyped view of the payload, only if its identity is `expected`.
    pub fn raw_view_as(&self, expected: TypeToken) -> Option<&(dyn Any + Send + Sync)> {
        let payload = self.payload()?;
        (payload.token() == expected).then(|| payload.as_any())
    }

    /// The payload as an error, if it is one.
    pub fn as_error(&self) -> Option<&DynError> {
        self.payload()?.as_error()
    }

    /// The panic message, if the payload is one.
    pub fn message(&self) -> Option<&str> {
        self.payload()?.as_message()
    }

    /// Whether both handles share the same payload. Two empty handles are
    /// considered equal.
    pub fn ptr_eq(&self, other: &ErrorHandle) -> bool {
        match (&self.payload, &other.payload) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Number of handles sharing this payload (0 when empty).
    pub fn ref_count(&self) -> usize {
        self.payload.as_ref().map_or(0, Arc::strong_count)
    }
}

/// Raise `error` as a new handle.
///
/// # Examples
///
/// ```
/// use catch_this::{raise, ErrorHandle};
///
/// let handle = ErrorHandle::capture(|| { raise(std::fmt::Error); }).unwrap_err();
/// assert!(handle.downcast_ref::<std::fmt::Error>().is_some());
/// ```
pub fn raise<E: StdError + Send + Sync + 'static>(error: E) -> ! {
    ErrorHandle::new(error).reraise()
}

// `ErrorHandle` does not implement `Error`, so this does not overlap with
// `From<T> for T`.
impl<E: StdError + Send + Sync + 'static> From<E> for ErrorHandle {
    fn from(error: E) -> Self {
        ErrorHandle::new(error)
    }
}

impl fmt::Display for ErrorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => payload.describe(f),
            None => f.write_str("no active error"),
        }
    }
}

impl fmt::Debug for ErrorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(payload) => {
                write!(f, "ErrorHandle({}: ", payload.token().name())?;
                payload.describe(f)?;
                f.write_str(")")
            }
            None => f.write_str("ErrorHandle(<empty>)"),
        }
    }
}
