//! Store configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Highest billing order that still counts as a starring role by default.
pub const DEFAULT_STAR_BILLING_MAX_ORDER: u32 = 3;

/// Upper bound for the star billing cutoff.
const MAX_STAR_BILLING_ORDER: u32 = 1_000;

/// Query settings for the stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Highest billing order (0-based) still counted as a starring role
    pub star_billing_max_order: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            star_billing_max_order: DEFAULT_STAR_BILLING_MAX_ORDER,
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.star_billing_max_order > MAX_STAR_BILLING_ORDER {
            return Err(ConfigError::StarBillingOrder {
                order: self.star_billing_max_order,
                max: MAX_STAR_BILLING_ORDER,
            });
        }
        Ok(())
    }
}
