//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default database file path.
fn default_db_path() -> String {
    "sigi.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path to the libSQL database file.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Default operator rol for review commands ("estudiante" or "tutor").
    /// Empty means the CLI requires an explicit `--rol`.
    #[serde(default)]
    pub rol: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            rol: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.db_path, "sigi.db");
        assert!(config.rol.is_empty());
    }
}
