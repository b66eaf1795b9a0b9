//! Order placement configuration

use serde::Deserialize;

/// Order placement switches
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OrderConfig {
    /// Check stock before decrementing it
    #[serde(default = "default_validate_stock")]
    pub validate_stock: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            validate_stock: default_validate_stock(),
        }
    }
}

fn default_validate_stock() -> bool {
    true
}
