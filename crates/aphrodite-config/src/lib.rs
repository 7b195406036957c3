use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "APHRODITE_CONFIG";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7870";
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7870/birth-chart";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Swiss Ephemeris data files
    Swiss,
    /// No ephemeris; every chart is served in sun-sign form
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisConfig {
    pub provider: ProviderKind,
    /// Data directory; `None` lets the adapter consult `SWISS_EPHEMERIS_PATH`
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub ephemeris: EphemerisConfig,
    pub client: ClientSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerToml {
    #[serde(default)]
    bind_addr: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default = "default_provider")]
    provider: String,
    #[serde(default)]
    path: Option<PathBuf>,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClientToml {
    #[serde(default = "default_endpoint")]
    endpoint: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for ClientToml {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    "swiss".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: ServerToml,
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    client: ClientToml,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                bind_addr: SocketAddr::from(([127, 0, 0, 1], 7870)),
            },
            ephemeris: EphemerisConfig {
                provider: ProviderKind::Swiss,
                path: None,
            },
            client: ClientSettings {
                endpoint: default_endpoint(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        }
    }
}

/// Try `$APHRODITE_CONFIG`, then common relative paths for `configs/chartd.toml`.
///
/// Returns the path and text of the first readable file, or `None` when no
/// file exists. An explicitly named file that cannot be read is an error.
pub fn read_config_toml_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(explicit);
        let text = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("{} points at {}, which could not be read: {e}", CONFIG_ENV, path.display())
        })?;
        return Ok(Some((path, text)));
    }
    let paths = ["configs/chartd.toml", "../../configs/chartd.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), c)));
        }
    }
    Ok(None)
}

/// Load settings from the first config file found, or defaults when there is none.
pub fn load_settings() -> anyhow::Result<Settings> {
    match read_config_toml_text()? {
        Some((path, text)) => parse_settings(&text)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display())),
        None => Ok(Settings::default()),
    }
}

pub fn parse_settings(text: &str) -> anyhow::Result<Settings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse chartd.toml: {e}"))?;
    validate(root)
}

fn validate(root: RootConfigToml) -> anyhow::Result<Settings> {
    let RootConfigToml {
        server,
        ephemeris,
        client,
    } = root;

    let bind_addr = server.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
    let bind_addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("server.bind_addr {bind_addr:?} is not a socket address: {e}"))?;

    let provider = match ephemeris.provider.to_lowercase().as_str() {
        "swiss" => ProviderKind::Swiss,
        "none" => ProviderKind::None,
        other => anyhow::bail!("ephemeris.provider must be \"swiss\" or \"none\", got {other:?}"),
    };
    if let Some(path) = &ephemeris.path {
        if provider == ProviderKind::None {
            anyhow::bail!(
                "ephemeris.path ({}) is set but ephemeris.provider is \"none\"",
                path.display()
            );
        }
    }

    if client.timeout_secs == 0 {
        anyhow::bail!("client.timeout_secs must be greater than zero");
    }
    if !(client.endpoint.starts_with("http://") || client.endpoint.starts_with("https://")) {
        anyhow::bail!("client.endpoint must be an http(s) URL, got {:?}", client.endpoint);
    }

    Ok(Settings {
        server: ServerSettings { bind_addr },
        ephemeris: EphemerisConfig {
            provider,
            path: ephemeris.path,
        },
        client: ClientSettings {
            endpoint: client.endpoint,
            timeout: Duration::from_secs(client.timeout_secs),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.bind_addr.to_string(), "127.0.0.1:7870");
        assert_eq!(settings.ephemeris.provider, ProviderKind::Swiss);
        assert_eq!(settings.client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_full_file() {
        let settings = parse_settings(
            r#"
            [server]
            bind_addr = "0.0.0.0:8080"

            [ephemeris]
            provider = "swiss"
            path = "/opt/ephe"

            [client]
            endpoint = "https://charts.example.com/birth-chart"
            timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.server.bind_addr.port(), 8080);
        assert_eq!(settings.ephemeris.path, Some(PathBuf::from("/opt/ephe")));
        assert_eq!(settings.client.endpoint, "https://charts.example.com/birth-chart");
        assert_eq!(settings.client.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[ephemeris]\nprovider = \"jpl\"").is_err());
        assert!(parse_settings("[server]\nbind_addr = \"localhost\"").is_err());
        assert!(parse_settings("[client]\ntimeout_secs = 0").is_err());
        assert!(parse_settings("[client]\nendpoint = \"ftp://x\"").is_err());
        assert!(parse_settings("[ephemeris]\nprovider = \"none\"\npath = \"/x\"").is_err());
        assert!(parse_settings("[server]\nport = 1").is_err());
    }
}
