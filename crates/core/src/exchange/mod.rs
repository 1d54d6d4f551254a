//! Exchange rate lookup.
//!
//! This module implements the rate side of the crate:
//! - `backend` - The `ExchangeBackend` contract and quotation derivation
//! - `simple` - In-memory reference backend
//! - `registry` - Process-wide backend holder with guarded access
//! - `error` - Exchange layer errors

pub mod backend;
pub mod error;
pub mod registry;
pub mod simple;

#[cfg(test)]
mod props;

pub use backend::ExchangeBackend;
pub use error::ExchangeError;
pub use registry::{Registry, xrates};
pub use simple::SimpleBackend;
