//! Startup banner

use std::path::Path;
use tracing::debug;

/// Printed when no banner file can be read
pub const DEFAULT_BANNER: &str = "WASP - Wireless Asset Search Protocol v2.1.0";

/// Contents of the banner file, or [`DEFAULT_BANNER`] if it cannot be read
pub fn load_banner(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "banner file unavailable, using default");
            DEFAULT_BANNER.to_string()
        }
    }
}
