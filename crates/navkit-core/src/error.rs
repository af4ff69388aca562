//! Error types for component configuration.

use thiserror::Error;

/// A rejected combination of declared component options.
///
/// Raised before any rendering takes place. It is not retryable: the caller
/// has to change the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `justify` was requested on a nav hosted in a navbar.
    #[error("justify navbar `Nav`s are not supported")]
    JustifiedNavbar,
}
