//! Network constants for the board API.

use std::time::Duration;

/// Default REST API base URL (no trailing slash).
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Path of the signed-in user's profile.
pub const USER_PATH: &str = "/api/user";

/// Path of the full user list.
pub const EVERYBODY_PATH: &str = "/api/user/everybody";

/// Default interval between polling ticks.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(5000);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
