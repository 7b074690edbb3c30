//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (address, method, rpc_url)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or compact)
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of interpolated messages
//! - `RUST_LOG` overrides the configured level
//! - Private keys and signatures are never logged

pub mod logging;

pub use logging::init_logging;
