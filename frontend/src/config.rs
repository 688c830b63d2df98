pub struct Config;

impl Config {
    /// Local storage key holding the serialized signed-in user.
    pub const SESSION_KEY: &'static str = "user";
    /// Local storage key holding the bearer token issued at login.
    pub const TOKEN_KEY: &'static str = "token";
    pub const DASHBOARD_ENDPOINT: &'static str = "/analytics/dashboard";
    pub const TOAST_DURATION_MS: u32 = 5_000;

    pub fn api_base_url() -> String {
        // Set at build time to point at a backend on another origin. The
        // default is relative so Trunk's proxy and the nginx proxy both work.
        option_env!("GCDL_API_BASE_URL")
            .unwrap_or("/api")
            .trim_end_matches('/')
            .to_string()
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
