/// Start-up configuration read from the environment
///
/// - `PORTFOLIO_CATALOG`: path to a catalog JSON file
/// - `PORTFOLIO_LANG`: `en` or `zh`
/// - `PORTFOLIO_THEME`: `light` or `dark`
///
/// Without `PORTFOLIO_CATALOG` the catalog is looked up in the user's config
/// directory:
/// - Linux: ~/.config/portfolio-gallery/catalog.json
/// - macOS: ~/Library/Application Support/portfolio-gallery/catalog.json
/// - Windows: %APPDATA%\portfolio-gallery\catalog.json

use std::path::PathBuf;

use super::catalog::Catalog;
use super::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl ThemeChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeChoice::Light),
            "dark" => Some(ThemeChoice::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub language: Language,
    pub theme: ThemeChoice,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if config.catalog_path.is_none() {
            config.catalog_path = default_catalog_path().filter(|path| path.exists());
        }
        config
    }

    /// Build from any key lookup; unknown values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let language = match lookup("PORTFOLIO_LANG") {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                log::warn!("Unknown PORTFOLIO_LANG {:?}, using English", code);
                Language::default()
            }),
            None => Language::default(),
        };

        let theme = match lookup("PORTFOLIO_THEME") {
            Some(name) => ThemeChoice::from_name(&name).unwrap_or_else(|| {
                log::warn!("Unknown PORTFOLIO_THEME {:?}, using dark", name);
                ThemeChoice::default()
            }),
            None => ThemeChoice::default(),
        };

        let catalog_path = lookup("PORTFOLIO_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            catalog_path,
            language,
            theme,
        }
    }

    /// Load the configured catalog, falling back to the bundled showcase
    pub fn load_catalog(&self) -> Catalog {
        let Some(path) = &self.catalog_path else {
            log::info!("No catalog configured, showing bundled showcase");
            return Catalog::demo();
        };

        match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{}; showing bundled showcase instead", e);
                Catalog::demo()
            }
        }
    }
}

fn default_catalog_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("portfolio-gallery");
    path.push("catalog.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_reads_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORTFOLIO_LANG", "zh"),
            ("PORTFOLIO_THEME", "Light"),
            ("PORTFOLIO_CATALOG", "/srv/showcase/catalog.json"),
        ]));
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/showcase/catalog.json"))
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORTFOLIO_LANG", "klingon"),
            ("PORTFOLIO_THEME", "sepia"),
            ("PORTFOLIO_CATALOG", "  "),
        ]));
        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_broken_catalog_falls_back_to_demo() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            language: Language::En,
            theme: ThemeChoice::Dark,
        };
        assert_eq!(config.load_catalog(), Catalog::demo());
    }
}
