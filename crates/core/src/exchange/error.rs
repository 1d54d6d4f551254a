//! Exchange layer error types.

use thiserror::Error;

use crate::money::Currency;

/// Errors that can occur during rate lookup and backend registration.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// A backend-dependent operation ran with no backend installed.
    #[error("no exchange backend installed; install one on the registry first")]
    Unavailable,

    /// The installed backend has no quotation for the requested pair.
    #[error("rate not found in backend '{backend}': {from}/{to}")]
    RateNotFound {
        /// Name of the installed backend.
        backend: &'static str,
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// A rate was offered before the backend's base currency was set.
    #[error("set the base currency before adding rates")]
    BaseNotSet,
}
