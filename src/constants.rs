// constants.rs

// API
pub const API_BASE_PATH: &str = "/api/v1";

// HTTP headers
pub const HTTP_HEADER_AUTHORIZATION: &str = "Authorization";
pub const HTTP_HEADER_AUTH_BEARER: &str = "Bearer ";
pub const HTTP_HEADER_TEAM_ID: &str = "X-Team-Id";
pub const HTTP_HEADER_KEY_USER_AGENT: &str = "User-Agent";
pub const HTTP_USER_AGENT: &str = concat!("coolify-rs/", env!("CARGO_PKG_VERSION"));

// Query parameters
pub const HTTP_QUERY_KEY_UUID: &str = "uuid";
pub const HTTP_QUERY_KEY_FORCE: &str = "force";

// Other constants
pub const REST_TEXT_HEALTH_OK: &str = "OK";
