//! Settings schema and fail-fast environment loading.

use {
    anyhow::{Context, anyhow},
    secrecy::Secret,
    tracing::debug,
};

const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Record source (Notion) credentials.
#[derive(Clone, Debug)]
pub struct NotionSettings {
    pub token: Secret<String>,
    pub database_id: String,
}

/// Messaging (Z-API) instance credentials.
#[derive(Clone, Debug)]
pub struct ZapiSettings {
    pub instance_id: String,
    pub token: Secret<String>,
    pub security_token: Secret<String>,
}

/// SMTP relay settings. Host and port carry defaults; credentials do not.
#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
}

/// Process-wide configuration, read once at startup and then read-only.
#[derive(Clone, Debug)]
pub struct Settings {
    pub notion: NotionSettings,
    pub zapi: ZapiSettings,
    pub smtp: SmtpSettings,
}

impl Settings {
    /// Load from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an explicit lookup function (test seam).
    ///
    /// Fails on the first missing required variable, naming it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |name: &str| -> anyhow::Result<String> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("missing required environment variable {name}"))
        };

        let settings = Self {
            notion: NotionSettings {
                token: Secret::new(required("NOTION_TOKEN")?),
                database_id: required("NOTION_DATABASE_ID")?,
            },
            zapi: ZapiSettings {
                instance_id: required("ZAPI_INSTANCE_ID")?,
                token: Secret::new(required("ZAPI_TOKEN")?),
                security_token: Secret::new(required("ZAPI_SECURITY_TOKEN")?),
            },
            smtp: SmtpSettings {
                server: lookup("SMTP_SERVER")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                port: match lookup("SMTP_PORT").filter(|v| !v.is_empty()) {
                    Some(raw) => raw
                        .parse()
                        .with_context(|| format!("invalid SMTP_PORT value '{raw}'"))?,
                    None => DEFAULT_SMTP_PORT,
                },
                user: required("SMTP_USER")?,
                password: Secret::new(required("SMTP_PASSWORD")?),
            },
        };
        debug!(
            smtp_server = %settings.smtp.server,
            smtp_port = settings.smtp.port,
            "settings loaded"
        );
        Ok(settings)
    }
}
