//! # number-lookup
//!
//! Looks up metadata for a phone number from a remote JSON service and renders
//! it for the terminal.
//!
//! The pipeline for every target is:
//! - **validate** - [`validator::validate`] turns raw input into a [`TargetNumber`]
//!   (10 to 15 ASCII digits) or a [`RejectionReason`]
//! - **fetch** - [`LookupClient`] issues one GET and folds every outcome into a
//!   [`LookupResult`]
//! - **render** - [`presenter::render`] lays out known fields in a fixed order,
//!   followed by any auxiliary fields
//!
//! [`Session`] runs that pipeline for a single number, a batch file or an
//! interactive prompt.
//!
//! ## Quick Start
//!
//! ```no_run
//! use number_lookup::{Config, LookupClient, Painter, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         endpoint: "https://lookup.example.com/v1/details".to_string(),
//!         ..Default::default()
//!     };
//!     config.validate()?;
//!
//!     let client = LookupClient::new(&config)?;
//!     let mut session = Session::new(client, std::io::stdout(), Painter::plain(), &config);
//!     session.run_single("9876543210").await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Startup banner
pub mod banner;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// HTTP lookup client
pub mod fetcher;
/// Result rendering and terminal colors
pub mod presenter;
/// Scan animation
pub mod progress;
/// Single, batch and interactive modes
pub mod session;
/// Core types
pub mod types;
/// Target number validation
pub mod validator;

// Re-export commonly used types
pub use config::{AnimationConfig, Config};
pub use error::{Error, RejectionReason, Result};
pub use fetcher::{LookupClient, LookupService};
pub use presenter::{Line, Painter, Report, Tone, render};
pub use session::{BatchSummary, Session, TargetOutcome};
pub use types::{FIELD_MAPPING, LookupResult, Payload, TargetNumber};
