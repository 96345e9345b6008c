//! Configuration constructors for tests.

use crate::config::IndiaraceConfig;

/// Site config pointing at a test server, with short timeouts.
pub fn test_site_config(base_url: String) -> IndiaraceConfig {
    IndiaraceConfig {
        base_url,
        user_agent: "test-agent".to_string(),
        timeout_seconds: 5,
    }
}
