//! Default configuration values

/// Directory under the config home holding the client config
pub const CONFIG_DIR_NAME: &str = "xcat";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable for the management node URL
pub const ENV_MASTER: &str = "XCAT_MASTER";

/// Environment variable for the auth token
pub const ENV_TOKEN: &str = "XCAT_TOKEN";

/// Environment variable for skipping TLS verification
pub const ENV_INSECURE: &str = "XCAT_INSECURE";

/// Environment variable for the request timeout in seconds
pub const ENV_TIMEOUT: &str = "XCAT_TIMEOUT";
