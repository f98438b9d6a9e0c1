//! Application Error Types

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not open the cache")]
    Cache,
    #[display("could not set up the upstream client")]
    Client,
    #[display("request failed")]
    Request,
    #[display("could not start the HTTP server")]
    Server,
    #[display("could not write output")]
    Output,
}
