use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OBSERVATORY_ADDRESS_COLUMN: &str = "ADDRESS_NAME";
pub const DEFAULT_OBSERVATORY_NAME_COLUMN: &str = "NEAREST_OBSERVATORY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 住所データの列名
    pub address_column: Option<String>,
    /// 観測所マスタ（CSV/Excel）
    pub observatory_path: Option<PathBuf>,
    /// 観測所マスタの所在地列
    pub observatory_address_column: String,
    /// 観測所マスタの観測所名列
    pub observatory_name_column: String,
    /// 日次降水量データ
    pub rainfall_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address_column: None,
            observatory_path: None,
            observatory_address_column: DEFAULT_OBSERVATORY_ADDRESS_COLUMN.into(),
            observatory_name_column: DEFAULT_OBSERVATORY_NAME_COLUMN.into(),
            rainfall_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("amedas-matcher").join("config.json"))
    }

    /// 観測所マスタのパス（引数優先）
    pub fn resolve_observatory(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.observatory_path.clone())
            .ok_or(MatcherError::MissingObservatory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.observatory_name_column, "NEAREST_OBSERVATORY");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            address_column: Some("ADDRESS".into()),
            observatory_path: Some(PathBuf::from("observatory.csv")),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"address_column": "住所"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.address_column.as_deref(), Some("住所"));
        assert_eq!(loaded.observatory_address_column, "ADDRESS_NAME");
    }

    #[test]
    fn test_resolve_observatory_prefers_argument() {
        let config = Config {
            observatory_path: Some(PathBuf::from("from_config.csv")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_observatory(Some(PathBuf::from("arg.csv"))).unwrap(),
            PathBuf::from("arg.csv")
        );
        assert_eq!(
            config.resolve_observatory(None).unwrap(),
            PathBuf::from("from_config.csv")
        );
        assert!(matches!(
            Config::default().resolve_observatory(None),
            Err(MatcherError::MissingObservatory)
        ));
    }
}
