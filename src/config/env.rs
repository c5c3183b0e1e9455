//! Environment-backed configuration accessors
//!
//! Every accessor reads the process environment at call time and never
//! fails: missing or malformed values degrade to the documented default.
//! The parsing rules live in the `parse_*` functions so they can be tested
//! without mutating the process environment.

use std::fmt;

/// Name of the runtime environment ("development", "production", ...)
pub const APP_ENV: &str = "APP_ENV";

/// Set to "true" to let the external auth guard skip authentication
pub const SKIP_AUTH: &str = "SKIP_AUTH";

/// "*" or a comma-separated list of origins allowed by CORS
pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

/// Port for the local HTTP listener
pub const PORT: &str = "PORT";

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u64 = 5001;

/// Origin allowed when `ALLOWED_ORIGINS` is unset or empty
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is allowed ("*")
    Any,
    /// Only these origins, in configuration order. Never empty.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// The single-origin fallback list
    pub fn default_list() -> Self {
        AllowedOrigins::List(vec![DEFAULT_ORIGIN.to_string()])
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowedOrigins::Any)
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::default_list()
    }
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigins::Any => f.write_str("*"),
            AllowedOrigins::List(origins) => f.write_str(&origins.join(",")),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Raw value of `APP_ENV`, passed through verbatim.
pub fn execution_environment() -> Option<String> {
    read_env(APP_ENV)
}

/// Whether `SKIP_AUTH` is set to "true" (trimmed, any case).
pub fn auth_bypass_enabled() -> bool {
    parse_auth_bypass(read_env(SKIP_AUTH).as_deref())
}

/// CORS origins from `ALLOWED_ORIGINS`.
pub fn allowed_origins() -> AllowedOrigins {
    parse_allowed_origins(read_env(ALLOWED_ORIGINS).as_deref())
}

/// Listener port from `PORT`, always positive.
pub fn network_port() -> u64 {
    parse_network_port(read_env(PORT).as_deref())
}

pub fn parse_auth_bypass(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

pub fn parse_allowed_origins(raw: Option<&str>) -> AllowedOrigins {
    let Some(raw) = raw else {
        return AllowedOrigins::default_list();
    };

    if raw.trim() == "*" {
        return AllowedOrigins::Any;
    }

    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        AllowedOrigins::default_list()
    } else {
        AllowedOrigins::List(origins)
    }
}

pub fn parse_network_port(raw: Option<&str>) -> u64 {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|port| *port > 0)
        .unwrap_or(DEFAULT_PORT)
}

/// Whether an environment label names production (case-insensitive).
pub fn is_production(environment: Option<&str>) -> bool {
    environment.is_some_and(|env| env.trim().eq_ignore_ascii_case("production"))
}

/// All four settings read at one instant.
///
/// Used for startup logging. Nothing caches a snapshot: call
/// [`ConfigSnapshot::capture`] again to observe changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub execution_environment: Option<String>,
    pub network_port: u64,
    pub allowed_origins: AllowedOrigins,
    pub auth_bypass_enabled: bool,
}

impl ConfigSnapshot {
    pub fn capture() -> Self {
        Self {
            execution_environment: execution_environment(),
            network_port: network_port(),
            allowed_origins: allowed_origins(),
            auth_bypass_enabled: auth_bypass_enabled(),
        }
    }

    pub fn is_production(&self) -> bool {
        is_production(self.execution_environment.as_deref())
    }

    /// Log level used when neither `RUST_LOG` nor a CLI level is given
    pub fn default_log_level(&self) -> &'static str {
        if self.is_production() { "info" } else { "debug" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DEFAULT_PORT)]
    #[case(Some(""), DEFAULT_PORT)]
    #[case(Some("   "), DEFAULT_PORT)]
    #[case(Some("abc"), DEFAULT_PORT)]
    #[case(Some("12abc"), DEFAULT_PORT)]
    #[case(Some("3.5"), DEFAULT_PORT)]
    #[case(Some("0"), DEFAULT_PORT)]
    #[case(Some("-8080"), DEFAULT_PORT)]
    #[case(Some("8080"), 8080)]
    #[case(Some(" 3000 "), 3000)]
    #[case(Some("70000"), 70000)]
    #[case(Some("9223372036854775808"), 9_223_372_036_854_775_808)]
    #[case(Some("18446744073709551615"), u64::MAX)]
    #[case(Some("18446744073709551616"), DEFAULT_PORT)]
    fn test_parse_network_port(#[case] raw: Option<&str>, #[case] expected: u64) {
        assert_eq!(parse_network_port(raw), expected);
    }

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("True"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some(" true "), true)]
    #[case(Some("false"), false)]
    #[case(Some("1"), false)]
    #[case(Some("yes"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn test_parse_auth_bypass(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_auth_bypass(raw), expected);
    }

    #[test]
    fn test_parse_allowed_origins_wildcard() {
        assert_eq!(parse_allowed_origins(Some("*")), AllowedOrigins::Any);
        assert_eq!(parse_allowed_origins(Some("  *  ")), AllowedOrigins::Any);
        // A star inside a list is just another origin string
        assert_eq!(
            parse_allowed_origins(Some("*,http://a.com")),
            AllowedOrigins::List(vec!["*".into(), "http://a.com".into()])
        );
    }

    #[test]
    fn test_parse_allowed_origins_list() {
        assert_eq!(
            parse_allowed_origins(Some("http://localhost:3000,https://example.com")),
            AllowedOrigins::List(vec![
                "http://localhost:3000".into(),
                "https://example.com".into()
            ])
        );
        assert_eq!(
            parse_allowed_origins(Some(" http://a.com , , http://b.com ")),
            AllowedOrigins::List(vec!["http://a.com".into(), "http://b.com".into()])
        );
    }

    #[test]
    fn test_parse_allowed_origins_keeps_duplicates() {
        assert_eq!(
            parse_allowed_origins(Some("http://a.com,http://a.com")),
            AllowedOrigins::List(vec!["http://a.com".into(), "http://a.com".into()])
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some(",,,"))]
    #[case(Some(" , ,"))]
    fn test_parse_allowed_origins_fallback(#[case] raw: Option<&str>) {
        assert_eq!(parse_allowed_origins(raw), AllowedOrigins::default_list());
    }

    #[test]
    fn test_allowed_origins_display() {
        assert_eq!(AllowedOrigins::Any.to_string(), "*");
        assert_eq!(
            AllowedOrigins::List(vec!["http://a.com".into(), "http://b.com".into()]).to_string(),
            "http://a.com,http://b.com"
        );
    }

    #[test]
    fn test_is_production() {
        assert!(is_production(Some("production")));
        assert!(is_production(Some("Production")));
        assert!(!is_production(Some("development")));
        assert!(!is_production(None));
    }

    #[test]
    fn test_snapshot_default_log_level() {
        let mut snapshot = ConfigSnapshot {
            execution_environment: Some("production".into()),
            network_port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::default(),
            auth_bypass_enabled: false,
        };
        assert_eq!(snapshot.default_log_level(), "info");

        snapshot.execution_environment = None;
        assert_eq!(snapshot.default_log_level(), "debug");
    }
}
