//! Server configuration for `LookOutline`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! SMTP settings are parsed by [`SmtpConfig::from_lookup`] so the server and
//! the CLI agree on variable names.

use std::net::SocketAddr;

use lookout_core::error::MailError;
use lookout_core::mailer::SmtpConfig;

/// Port used when neither `LOOKOUT_BIND_ADDR` nor `PORT` is set.
const DEFAULT_PORT: u16 = 5000;

/// Browser origins allowed to call `/api/*` unless overridden.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 5] = [
    "http://localhost:5173",
    "http://localhost:4173",
    "http://localhost:3000",
    "https://lookoutline.com",
    "http://lookoutline.com",
];

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but unusable.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// SMTP settings are incomplete or malformed.
    #[error(transparent)]
    Smtp(#[from] MailError),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Origins permitted to call `/api/*`. Requests without `Origin` are
    /// always permitted.
    pub allowed_origins: Vec<String>,
    /// SMTP connection profile.
    pub smtp: SmtpConfig,
    /// Operator inbox receiving lead notifications.
    pub leads_email: String,
    /// Whether to check the relay once at startup.
    pub verify_smtp_on_startup: bool,
    /// Contact details rendered on the landing page.
    pub site: SiteConfig,
}

/// Contact details shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Phone number as displayed, e.g. `+91 98765 43210`.
    pub contact_phone: String,
    /// Digits-only number for `wa.me` links.
    pub whatsapp_number: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_phone: "+91 98765 43210".to_owned(),
            whatsapp_number: "919876543210".to_owned(),
        }
    }
}

impl SiteConfig {
    /// `tel:` URI for the contact phone (spaces removed).
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    /// WhatsApp chat link with a prefilled greeting.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            urlencoding::encode("Hi LookOutline, I'd like a CCTV / biometric quote.")
        )
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Variables:
    /// - `PORT` (binds to `0.0.0.0`, default `5000`)
    /// - `LOOKOUT_BIND_ADDR`: full bind address, overrides `PORT`
    /// - `LOOKOUT_LOG_LEVEL`: log filter (default: `info`)
    /// - `LOOKOUT_ALLOWED_ORIGINS`: comma-separated allow-list
    /// - `LOOKOUT_PUBLIC_ORIGIN`: origin the landing page is served from,
    ///   appended to the allow-list (default: `http://localhost:<port>`)
    /// - `LEADS_EMAIL`: operator inbox (required)
    /// - `SMTP_VERIFY_ON_STARTUP`: check the relay at startup (default: `true`)
    /// - `LOOKOUT_CONTACT_PHONE`, `LOOKOUT_WHATSAPP_NUMBER`: landing page contacts
    /// - `SMTP_*`: see [`SmtpConfig::from_lookup`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Priority: LOOKOUT_BIND_ADDR > PORT > default 0.0.0.0:5000
        let bind_addr = if let Some(addr) = non_empty("LOOKOUT_BIND_ADDR") {
            addr.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "LOOKOUT_BIND_ADDR",
                reason: format!("'{addr}' is not a socket address"),
            })?
        } else if let Some(port) = non_empty("PORT") {
            let port: u16 = port.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                reason: format!("'{port}' is not a valid port"),
            })?;
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        };

        let log_level = non_empty("LOOKOUT_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let mut allowed_origins: Vec<String> = match non_empty("LOOKOUT_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_owned())
                .filter(|o| !o.is_empty())
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| (*o).to_owned()).collect(),
        };

        let public_origin = non_empty("LOOKOUT_PUBLIC_ORIGIN")
            .map(|o| o.trim().trim_end_matches('/').to_owned())
            .unwrap_or_else(|| format!("http://localhost:{}", bind_addr.port()));
        if !allowed_origins.contains(&public_origin) {
            allowed_origins.push(public_origin);
        }

        let leads_email = non_empty("LEADS_EMAIL").ok_or(ConfigError::Missing("LEADS_EMAIL"))?;

        let verify_smtp_on_startup = non_empty("SMTP_VERIFY_ON_STARTUP")
            .is_none_or(|v| !(v.trim().eq_ignore_ascii_case("false") || v.trim() == "0"));

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            contact_phone: non_empty("LOOKOUT_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            whatsapp_number: non_empty("LOOKOUT_WHATSAPP_NUMBER")
                .map(|n| n.chars().filter(char::is_ascii_digit).collect())
                .unwrap_or(defaults.whatsapp_number),
        };

        let smtp = SmtpConfig::from_lookup(&lookup)?;

        Ok(Self {
            bind_addr,
            log_level,
            allowed_origins,
            smtp,
            leads_email,
            verify_smtp_on_startup,
            site,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    const MINIMAL: [(&str, &str); 3] = [
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USER", "leads@example.com"),
        ("LEADS_EMAIL", "owner@example.com"),
    ];

    #[test]
    fn minimal_config_uses_defaults() {
        let config = load(&MINIMAL).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 5000)));
        assert_eq!(config.log_level, "info");
        assert!(config.verify_smtp_on_startup);
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len() + 1);
        assert_eq!(
            config.allowed_origins.last().map(String::as_str),
            Some("http://localhost:5000")
        );
    }

    #[test]
    fn port_and_bind_addr_priority() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("PORT", "8080"));
        let config = load(&pairs).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);

        pairs.push(("LOOKOUT_BIND_ADDR", "127.0.0.1:9000"));
        let config = load(&pairs).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[test]
    fn invalid_port_is_reported() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("PORT", "eighty"));
        assert!(matches!(
            load(&pairs),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
    }

    #[test]
    fn leads_email_is_required() {
        let err = load(&MINIMAL[..2]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("LEADS_EMAIL")));
    }

    #[test]
    fn smtp_host_is_required() {
        let err = load(&MINIMAL[1..]).unwrap_err();
        assert!(matches!(err, ConfigError::Smtp(MailError::MissingConfig(_))));
    }

    #[test]
    fn custom_origins_are_normalized() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push((
            "LOOKOUT_ALLOWED_ORIGINS",
            " https://example.com/ , ,http://localhost:8000",
        ));
        pairs.push(("LOOKOUT_PUBLIC_ORIGIN", "https://example.com"));
        let config = load(&pairs).unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://example.com", "http://localhost:8000"]
        );
    }

    #[test]
    fn startup_verify_can_be_disabled() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("SMTP_VERIFY_ON_STARTUP", "false"));
        assert!(!load(&pairs).unwrap().verify_smtp_on_startup);
    }

    #[test]
    fn verify_flag_ignores_case() {
        for value in ["FALSE", "False", " false ", "0"] {
            let mut pairs = MINIMAL.to_vec();
            pairs.push(("SMTP_VERIFY_ON_STARTUP", value));
            assert!(!load(&pairs).unwrap().verify_smtp_on_startup, "value {value:?}");
        }

        let mut pairs = MINIMAL.to_vec();
        pairs.push(("SMTP_VERIFY_ON_STARTUP", "TRUE"));
        assert!(load(&pairs).unwrap().verify_smtp_on_startup);
    }

    #[test]
    fn site_links() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("LOOKOUT_CONTACT_PHONE", "+91 80000 11111"));
        pairs.push(("LOOKOUT_WHATSAPP_NUMBER", "+91 80000-11111"));
        let site = load(&pairs).unwrap().site;
        assert_eq!(site.tel_href(), "tel:+918000011111");
        assert!(
            site.whatsapp_url()
                .starts_with("https://wa.me/918000011111?text=Hi%20LookOutline")
        );
    }
}
