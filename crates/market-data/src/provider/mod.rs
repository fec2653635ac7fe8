//! Upstream price providers.

pub(crate) mod headers;
pub mod sjc;
