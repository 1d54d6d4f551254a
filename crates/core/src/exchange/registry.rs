//! The process-wide exchange backend registry.
//!
//! At most one backend is active at a time. [`Registry`] is an injectable
//! holder that any component can own for isolation; [`xrates`] returns the
//! process-wide instance most hosts use. All access to the active backend
//! goes through a read-write lock, so installs, uninstalls, and rate
//! lookups are safe to interleave across threads.

use std::any::Any;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tracing::debug;

use crate::money::Currency;

use super::backend::ExchangeBackend;
use super::error::ExchangeError;

type BackendSlot = Option<Box<dyn ExchangeBackend>>;

/// Holds at most one active exchange backend.
///
/// Queries forward to the installed backend and fail with
/// [`ExchangeError::Unavailable`] when none is installed; they never fall
/// back to silent defaults. When a backend is installed, lookups still
/// return `Ok(None)` for pairs it has no data for, keeping "no data"
/// distinct from "no backend".
#[derive(Debug)]
pub struct Registry {
    backend: RwLock<BackendSlot>,
}

impl Registry {
    /// Creates a registry with no backend installed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backend: RwLock::new(None),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BackendSlot> {
        self.backend.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BackendSlot> {
        self.backend.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs `backend`, replacing any previously installed one.
    ///
    /// The previous backend and its state are dropped.
    pub fn install<B: ExchangeBackend>(&self, backend: B) {
        debug!(backend = backend.name(), "exchange backend installed");
        *self.write() = Some(Box::new(backend));
    }

    /// Removes the active backend, if any.
    pub fn uninstall(&self) {
        if let Some(old) = self.write().take() {
            debug!(backend = old.name(), "exchange backend uninstalled");
        }
    }

    /// Returns true when a backend is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.read().is_some()
    }

    /// Name of the installed backend, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.read().as_deref().map(ExchangeBackend::name)
    }

    /// The installed backend's base currency.
    ///
    /// `Ok(None)` when the backend has no base configured yet.
    pub fn base(&self) -> Result<Option<Currency>, ExchangeError> {
        self.with_backend(ExchangeBackend::base)
    }

    /// Rate lookup on the installed backend.
    pub fn rate(&self, currency: Currency) -> Result<Option<Decimal>, ExchangeError> {
        self.with_backend(|backend| backend.rate(currency))
    }

    /// Quotation lookup on the installed backend.
    pub fn quotation(
        &self,
        from: Currency,
        to: Currency,
    ) -> Result<Option<Decimal>, ExchangeError> {
        self.with_backend(|backend| backend.quotation(from, to))
    }

    /// Runs `f` against the installed backend.
    ///
    /// Fails with [`ExchangeError::Unavailable`] when nothing is installed.
    /// The read lock is held for the duration of `f`.
    pub fn with_backend<R>(
        &self,
        f: impl FnOnce(&dyn ExchangeBackend) -> R,
    ) -> Result<R, ExchangeError> {
        match self.read().as_deref() {
            Some(backend) => Ok(f(backend)),
            None => Err(ExchangeError::Unavailable),
        }
    }

    /// Runs `f` against the installed backend downcast to `B`.
    ///
    /// This is the doorway to backend-specific configuration such as
    /// [`SimpleBackend::set_rate`](super::simple::SimpleBackend::set_rate).
    /// Fails with [`ExchangeError::Unavailable`] when nothing is installed;
    /// answers `Ok(None)` when the installed backend is not a `B`.
    pub fn with_backend_mut<B, R>(
        &self,
        f: impl FnOnce(&mut B) -> R,
    ) -> Result<Option<R>, ExchangeError>
    where
        B: ExchangeBackend,
    {
        let mut slot = self.write();
        let Some(backend) = slot.as_deref_mut() else {
            return Err(ExchangeError::Unavailable);
        };
        let any: &mut dyn Any = backend;
        Ok(any.downcast_mut::<B>().map(f))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry backing [`Money::to`](crate::money::Money::to).
static XRATES: Registry = Registry::new();

/// Returns the process-wide exchange registry.
///
/// Starts with nothing installed; hosts install a backend during startup
/// and may uninstall it on teardown. Code that needs isolation constructs
/// its own [`Registry`] and passes it to
/// [`Money::convert_in`](crate::money::Money::convert_in).
#[must_use]
pub fn xrates() -> &'static Registry {
    &XRATES
}
