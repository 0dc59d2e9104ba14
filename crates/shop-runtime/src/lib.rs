//! Page-serving runtime for the NextCommerce storefront.
//!
//! Shared plumbing for the storefront workload: request context and IDs,
//! the HTML shell, the shell-first streaming sink, and structured logging.

mod context;
mod logging;
mod shell;
mod sink;

pub use context::{RequestContext, RequestId, TimingContext};
pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use shell::{HeadContent, Shell};
pub use sink::StreamingSink;

use thiserror::Error;

/// Errors raised by the streaming runtime.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A section was sent before the shell.
    #[error("Shell must be sent before sections")]
    ShellNotSent,

    /// The underlying sink failed.
    #[error("Stream error: {0}")]
    StreamError(String),
}
