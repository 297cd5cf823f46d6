use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            window_size: [900.0, 600.0],
        }
    }
}

impl AppConfig {
    pub fn with_assets_dir(mut self, assets_dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = assets_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_assets_dir() {
        let config = AppConfig::default();
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.window_size, [900.0, 600.0]);
    }

    #[test]
    fn assets_dir_can_be_overridden() {
        let config = AppConfig::default().with_assets_dir("/srv/art");
        assert_eq!(config.assets_dir, PathBuf::from("/srv/art"));
    }
}
