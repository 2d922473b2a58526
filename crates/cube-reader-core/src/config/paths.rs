//! Locations of configuration files

use std::path::{Path, PathBuf};

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "cube-reader";

/// Directory holding `config.json` and sample layouts
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Path of the default config file
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.json"))
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_in_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("cube-reader/config.json"));
        }
    }

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/etc/cube-reader");
        assert_eq!(
            resolve_relative(base, Path::new("front.json")),
            PathBuf::from("/etc/cube-reader/front.json")
        );
        let abs = std::env::temp_dir().join("layout.json");
        assert_eq!(resolve_relative(base, &abs), abs);
    }
}
