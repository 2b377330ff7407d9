pub const DEFAULT_PORT: u16 = 3000;

/// Gateway runtime configuration, read from the environment.
///
/// `PORT` selects the listen port. `APP_ENV=development` exposes upstream
/// error details in 500 bodies; any other value (or none) suppresses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    pub expose_error_details: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let expose_error_details = lookup("APP_ENV")
            .map(|value| value.trim().eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        Self {
            port,
            expose_error_details,
        }
    }
}
