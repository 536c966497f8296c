use thiserror::Error;

const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

pub fn get_emailjs_api_url() -> &'static str {
    option_env!("XVAL_EMAILJS_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_EMAILJS_API_URL)
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} was not set at build time")]
    Missing(&'static str),
}

/// EmailJS identifiers needed to send a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

/// Settings baked in at build time. Missing values are reported when they
/// are first needed, never at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub emailjs_public_key: Option<String>,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub recaptcha_site_key: Option<String>,
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            emailjs_public_key: present(option_env!("XVAL_EMAILJS_PUBLIC_KEY")),
            emailjs_service_id: present(option_env!("XVAL_EMAILJS_SERVICE_ID")),
            emailjs_template_id: present(option_env!("XVAL_EMAILJS_TEMPLATE_ID")),
            recaptcha_site_key: present(option_env!("XVAL_RECAPTCHA_SITE_KEY")),
        }
    }

    pub fn relay_credentials(&self) -> Result<RelayCredentials, ConfigError> {
        let field = |value: &Option<String>, name: &'static str| {
            value.clone().ok_or(ConfigError::Missing(name))
        };
        Ok(RelayCredentials {
            public_key: field(&self.emailjs_public_key, "XVAL_EMAILJS_PUBLIC_KEY")?,
            service_id: field(&self.emailjs_service_id, "XVAL_EMAILJS_SERVICE_ID")?,
            template_id: field(&self.emailjs_template_id, "XVAL_EMAILJS_TEMPLATE_ID")?,
        })
    }

    pub fn recaptcha_site_key(&self) -> Result<&str, ConfigError> {
        self.recaptcha_site_key
            .as_deref()
            .ok_or(ConfigError::Missing("XVAL_RECAPTCHA_SITE_KEY"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SiteConfig {
        SiteConfig {
            emailjs_public_key: Some("pk".into()),
            emailjs_service_id: Some("svc".into()),
            emailjs_template_id: Some("tpl".into()),
            recaptcha_site_key: Some("site".into()),
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(Some(" key ")), Some("key".to_string()));
        assert_eq!(present(None), None);
    }

    #[test]
    fn credentials_require_all_three_ids() {
        assert_eq!(
            complete().relay_credentials(),
            Ok(RelayCredentials {
                public_key: "pk".into(),
                service_id: "svc".into(),
                template_id: "tpl".into(),
            })
        );

        let config = SiteConfig {
            emailjs_template_id: None,
            ..complete()
        };
        assert_eq!(
            config.relay_credentials(),
            Err(ConfigError::Missing("XVAL_EMAILJS_TEMPLATE_ID"))
        );
    }

    #[test]
    fn missing_site_key_is_a_config_error() {
        assert_eq!(complete().recaptcha_site_key(), Ok("site"));
        assert_eq!(
            SiteConfig::default().recaptcha_site_key(),
            Err(ConfigError::Missing("XVAL_RECAPTCHA_SITE_KEY"))
        );
    }
}
