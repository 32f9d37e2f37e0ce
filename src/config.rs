//! Console configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so overrides are baked in at
//! build time through `option_env!` and funnelled through the same lookup path
//! the tests use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Auth endpoint probed on mount and on sign-in.
pub const DEFAULT_AUTH_ENDPOINT: &str = "/api/auth/";

/// Backend origin as seen from inside the development containers.
pub const DEV_BACKEND_ORIGIN: &str = "http://web:8000";

/// The same backend as reachable from the developer's browser.
pub const PUBLIC_BACKEND_ORIGIN: &str = "http://localhost:8000";

pub const DEFAULT_SITE_TITLE: &str = "Mozilla Symbol Server";

/// Error returned by [`ConsoleConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
    #[error("{key} must be a same-origin path starting with '/', got {value:?}")]
    NotAPath { key: &'static str, value: String },
    #[error("{set} is set but {missing} is not")]
    IncompleteRewrite {
        set: &'static str,
        missing: &'static str,
    },
}

/// Substring substitution applied to sign-in URLs issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRewrite {
    pub from: String,
    pub to: String,
}

impl HostRewrite {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Replace the first occurrence of `from` in `url`; other URLs pass through.
    #[must_use]
    pub fn apply(&self, url: &str) -> String {
        if self.from.is_empty() {
            return url.to_owned();
        }
        url.replacen(&self.from, &self.to, 1)
    }
}

impl Default for HostRewrite {
    fn default() -> Self {
        Self::new(DEV_BACKEND_ORIGIN, PUBLIC_BACKEND_ORIGIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub auth_endpoint: String,
    pub host_rewrite: Option<HostRewrite>,
    pub site_title: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            host_rewrite: Some(HostRewrite::default()),
            site_title: DEFAULT_SITE_TITLE.to_owned(),
        }
    }
}

impl ConsoleConfig {
    /// Build from values captured at compile time.
    ///
    /// Falls back to defaults (with a warning) if the baked-in values are invalid.
    #[must_use]
    pub fn from_build_env() -> Self {
        let lookup = |key: &str| -> Option<String> {
            let value = match key {
                "CONSOLE_AUTH_ENDPOINT" => option_env!("CONSOLE_AUTH_ENDPOINT"),
                "CONSOLE_DEV_BACKEND_ORIGIN" => option_env!("CONSOLE_DEV_BACKEND_ORIGIN"),
                "CONSOLE_PUBLIC_BACKEND_ORIGIN" => option_env!("CONSOLE_PUBLIC_BACKEND_ORIGIN"),
                "CONSOLE_SITE_TITLE" => option_env!("CONSOLE_SITE_TITLE"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        match Self::from_lookup(lookup) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid console configuration, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build from an arbitrary key lookup, starting from [`ConsoleConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the auth endpoint is not a path, a value is
    /// blank, or only one side of the host rewrite is provided.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = non_blank(&lookup, "CONSOLE_AUTH_ENDPOINT")? {
            if !endpoint.starts_with('/') {
                return Err(ConfigError::NotAPath {
                    key: "CONSOLE_AUTH_ENDPOINT",
                    value: endpoint,
                });
            }
            config.auth_endpoint = endpoint;
        }

        let dev = non_blank(&lookup, "CONSOLE_DEV_BACKEND_ORIGIN")?;
        let public = non_blank(&lookup, "CONSOLE_PUBLIC_BACKEND_ORIGIN")?;
        match (dev, public) {
            (Some(from), Some(to)) => config.host_rewrite = Some(HostRewrite::new(from, to)),
            (Some(_), None) => {
                return Err(ConfigError::IncompleteRewrite {
                    set: "CONSOLE_DEV_BACKEND_ORIGIN",
                    missing: "CONSOLE_PUBLIC_BACKEND_ORIGIN",
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteRewrite {
                    set: "CONSOLE_PUBLIC_BACKEND_ORIGIN",
                    missing: "CONSOLE_DEV_BACKEND_ORIGIN",
                });
            }
            (None, None) => {}
        }

        if let Some(title) = non_blank(&lookup, "CONSOLE_SITE_TITLE")? {
            config.site_title = title;
        }

        Ok(config)
    }

    /// Apply the configured host rewrite, if any.
    #[must_use]
    pub fn rewrite_sign_in_url(&self, url: &str) -> String {
        match &self.host_rewrite {
            Some(rule) => rule.apply(url),
            None => url.to_owned(),
        }
    }
}

fn non_blank<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ConfigError::Empty { key })
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
    }
}
