use crate::entities::icon::DEFAULT_ICON_MATERIAL;
use crate::host::PlayerId;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Plugin configuration, loaded from a YAML file in the data directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarpConfig {
    /// Warps a player may own unless overridden below.
    pub default_limit: usize,
    /// Per-player overrides, keyed by player id.
    pub limits: HashMap<String, usize>,
    /// Material for freshly created warp icons.
    pub default_icon: String,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            default_limit: 3,
            limits: HashMap::new(),
            default_icon: DEFAULT_ICON_MATERIAL.to_string(),
        }
    }
}

impl WarpConfig {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|err| format!("config read failed for {}: {}", path.display(), err))?;
        serde_yaml::from_str(&data)
            .map_err(|err| format!("config parse failed for {}: {}", path.display(), err))
    }

    pub fn limit_for(&self, player: &PlayerId) -> usize {
        self.limits
            .get(player.as_str())
            .copied()
            .unwrap_or(self.default_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = WarpConfig::default();
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.default_icon, "conduit");
        assert!(config.limits.is_empty());
    }

    #[test]
    fn limit_override_wins_over_default() {
        let mut config = WarpConfig::default();
        config.limits.insert("u-vip".to_string(), 10);
        assert_eq!(config.limit_for(&PlayerId::new("u-vip")), 10);
        assert_eq!(config.limit_for(&PlayerId::new("u-other")), 3);
    }

    #[test]
    fn config_parses_from_yaml() {
        let yaml = "default_limit: 5\nlimits:\n  u-vip: 20\ndefault_icon: beacon\n";
        let config: WarpConfig = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.limits.get("u-vip"), Some(&20));
        assert_eq!(config.default_icon, "beacon");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: WarpConfig = serde_yaml::from_str("default_limit: 1\n").expect("parse");
        assert_eq!(config.default_limit, 1);
        assert_eq!(config.default_icon, "conduit");
    }
}
