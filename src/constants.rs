// -
// Watch filters

/// Destination value that matches every route
pub const WILDCARD_DESTINATION: &str = "*";

// -
// Configuration

/// Environment variable prefix for configuration overrides
pub(crate) const CONFIG_ENV_PREFIX: &str = "ROUTE_WATCH";

/// Environment variable naming an extra configuration file
pub(crate) const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
