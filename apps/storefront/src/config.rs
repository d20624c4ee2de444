//! # Storefront Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`READNEST_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// All fields have sensible defaults; the environment overrides exist
/// mostly for development and demos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name (shown on the welcome banner and receipts).
    pub store_name: String,

    /// Session user name. One user per session, created at startup.
    pub user_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    /// Returns the default configuration: the ReadNest bookstore pricing
    /// in rupees, browsed by a guest user.
    fn default() -> Self {
        StoreConfig {
            store_name: "ReadNest".to_string(),
            user_name: "Guest".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `READNEST_STORE_NAME`: Override store name
    /// - `READNEST_USER`: Override session user name
    /// - `READNEST_CURRENCY`: Override currency symbol
    /// - `READNEST_CURRENCY_DECIMALS`: Override decimal places (must parse
    ///   as a small integer; unparsable values keep the default)
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("READNEST_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(user_name) = std::env::var("READNEST_USER") {
            config.user_name = user_name;
        }

        if let Ok(symbol) = std::env::var("READNEST_CURRENCY") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = std::env::var("READNEST_CURRENCY_DECIMALS")
            .ok()
            .and_then(|raw| raw.parse::<u8>().ok())
        {
            config.currency_decimals = decimals;
        }

        config
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(59900), "₹599.00");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = paise / divisor;
        let frac = (paise % divisor).abs();

        format!(
            "{}{}{}",
            if paise < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
