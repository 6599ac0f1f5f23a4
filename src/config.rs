use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub upload_dir: String,
    pub supported_languages: Vec<String>,
    pub jwt_secret: String,
    pub smtp: SmtpConfig,
}

pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender mailbox of the forwarded contact emails
    pub from: String,
    /// Company inbox the contact form delivers to
    pub to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR", "0.0.0.0:8080"),
            upload_dir: optional("UPLOAD_DIR", "uploads"),
            supported_languages: parse_languages(&optional("SUPPORTED_LANGUAGES", "tr,en,de,fr"))?,
            jwt_secret: require("JWT_SECRET")?,
            smtp: SmtpConfig {
                host: require("SMTP_HOST")?,
                port: parse_port(&optional("SMTP_PORT", "587"))?,
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
                from: require("CONTACT_FROM")?,
                to: require("CONTACT_TO")?,
            },
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_languages(raw: &str) -> Result<Vec<String>, ConfigError> {
    let codes: Vec<String> = raw
        .split(',')
        .map(|code| code.trim().to_ascii_lowercase())
        .filter(|code| !code.is_empty())
        .collect();

    if codes.is_empty() {
        return Err(ConfigError::InvalidVar {
            name: "SUPPORTED_LANGUAGES".to_string(),
            reason: "expected a comma-separated list of language codes".to_string(),
        });
    }

    Ok(codes)
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidVar {
        name: "SMTP_PORT".to_string(),
        reason: format!("{raw:?} is not a valid port number"),
    })
}
