//! Console configuration.

use crate::i18n::Locale;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// Validated settings for one console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub locale: Locale,
    pub page_size: usize,
    /// Request queue capacity of the client actor.
    pub channel_buffer: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            page_size: DEFAULT_PAGE_SIZE,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl AdminConfig {
    pub fn new(locale: Locale, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(Self {
            locale,
            page_size,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(
            AdminConfig::new(Locale::Fr, 0),
            Err(ConfigError::InvalidPageSize)
        );
        let config = AdminConfig::new(Locale::Fr, 25).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }
}
