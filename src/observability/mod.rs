//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (registration, dispatch, fallbacks, handler faults)
//!     → logging.rs (subscriber: env filter + fmt output)
//!
//! HTTP layer adds:
//!     → tower-http TraceLayer spans per request
//!     → x-request-id correlation header
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event, never formatted prose only
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init;
