//! Plugin configuration parsed from environment variables.

use crate::consts::MOBILE_MAX_WIDTH_PX;

pub const DEFAULT_LINK_SCHEME: &str = "mattermusic";
pub const DEFAULT_API_BASE: &str = "/api/v4";

/// Errors produced while reading [`PluginConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric value could not be parsed.
    #[error("config parse failed: {var}={value:?}")]
    Parse { var: String, value: String },

    /// The deep link scheme is not a valid URL scheme.
    #[error("invalid link scheme: {0:?}")]
    InvalidScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Scheme used for generated deep links, e.g. `mattermusic`.
    pub link_scheme: String,
    /// Prefix of the host's REST API, without a trailing slash.
    pub api_base: String,
    /// Widest viewport that still gets the docked mobile layout.
    pub mobile_max_width: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            link_scheme: DEFAULT_LINK_SCHEME.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            mobile_max_width: MOBILE_MAX_WIDTH_PX,
        }
    }
}

impl PluginConfig {
    /// Build typed plugin config from environment variables.
    ///
    /// Optional:
    /// - `MATTERMUSIC_LINK_SCHEME`: default `mattermusic`
    /// - `MATTERMUSIC_API_BASE`: default `/api/v4`
    /// - `MATTERMUSIC_MOBILE_MAX_WIDTH`: default 768
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScheme`] for a scheme that cannot appear
    /// in a URL and [`ConfigError::Parse`] for a non-numeric width.
    pub fn from_env() -> Result<Self, ConfigError> {
        let link_scheme =
            std::env::var("MATTERMUSIC_LINK_SCHEME").unwrap_or_else(|_| DEFAULT_LINK_SCHEME.to_owned());
        if !is_valid_scheme(&link_scheme) {
            return Err(ConfigError::InvalidScheme(link_scheme));
        }

        let api_base = std::env::var("MATTERMUSIC_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let mobile_max_width = match std::env::var("MATTERMUSIC_MOBILE_MAX_WIDTH") {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Parse {
                var: "MATTERMUSIC_MOBILE_MAX_WIDTH".into(),
                value: raw.clone(),
            })?,
            Err(_) => MOBILE_MAX_WIDTH_PX,
        };

        tracing::debug!(%link_scheme, %api_base, mobile_max_width, "plugin config loaded");
        Ok(Self { link_scheme, api_base, mobile_max_width })
    }

    /// URL the media element fetches the file bytes from.
    #[must_use]
    pub fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{file_id}", self.api_base)
    }

    /// Whether a viewport of `width` logical pixels gets the mobile layout.
    #[must_use]
    pub fn is_mobile(&self, width: f64) -> bool {
        width <= f64::from(self.mobile_max_width)
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
