use crate::error::{Result, WeighProError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use weighpro_common::types::DEFAULT_TOLERANCE_GRAMS;
use weighpro_common::{default_recipes, default_samples, Ingredient, Recipe, SampleSlot};

/// 計量ステーション設定
///
/// 起動時に一度だけ読み込み、プロセス終了まで変更しない。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// シリアルポート名（例: COM3, /dev/ttyUSB0）
    pub port: String,
    pub baud_rate: u32,
    /// 許容誤差（±グラム）
    pub tolerance_grams: f64,
    /// ログブック（xlsx）の保存先
    pub log_path: PathBuf,
    pub recipes: Vec<Recipe>,
    pub samples: Vec<SampleSlot>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default_config()
        };
        config.validate()?;
        Ok(config)
    }

    /// `reset` なら既存ファイルを読まずに既定値を返す
    ///
    /// 壊れた設定ファイルを既定値で上書きする場合に使う。
    pub fn load_or_reset(reset: bool) -> Result<Self> {
        Self::load_or_reset_from(&Self::config_path()?, reset)
    }

    pub fn load_or_reset_from(config_path: &Path, reset: bool) -> Result<Self> {
        if reset {
            Ok(Self::default_config())
        } else {
            Self::load_from(config_path)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WeighProError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("weighpro").join("config.json"))
    }

    fn default_config() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            port: "COM3".into(),
            baud_rate: 9600,
            tolerance_grams: DEFAULT_TOLERANCE_GRAMS,
            log_path: base.join("weight data").join("leapsys_weighpro.xlsx"),
            recipes: default_recipes(),
            samples: default_samples(),
        }
    }

    /// 設定の整合性チェック
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_grams.is_finite() || self.tolerance_grams < 0.0 {
            return Err(WeighProError::Config(format!(
                "許容誤差が不正です: {}",
                self.tolerance_grams
            )));
        }

        if self.baud_rate == 0 {
            return Err(WeighProError::Config("ボーレートが0です".into()));
        }

        let mut names = HashSet::new();
        for recipe in &self.recipes {
            if !names.insert(recipe.name.as_str()) {
                return Err(WeighProError::Config(format!("レシピ名が重複しています: {}", recipe.name)));
            }
            if recipe.ingredients.is_empty() {
                return Err(WeighProError::Config(format!("レシピに材料がありません: {}", recipe.name)));
            }
        }

        for slot in &self.samples {
            if !names.contains(slot.recipe.as_str()) {
                return Err(WeighProError::Config(format!(
                    "{} のレシピが見つかりません: {}",
                    slot.label, slot.recipe
                )));
            }
        }

        Ok(())
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// サンプル枠とそのレシピを取得
    pub fn sample(&self, label: &str) -> Result<(&SampleSlot, &Recipe)> {
        let slot = self
            .samples
            .iter()
            .find(|s| s.label == label)
            .ok_or_else(|| WeighProError::UnknownSample(label.to_string()))?;
        let recipe = self
            .recipe(&slot.recipe)
            .ok_or_else(|| WeighProError::Config(format!("レシピが見つかりません: {}", slot.recipe)))?;
        Ok((slot, recipe))
    }

    /// サンプル枠・材料名から材料を解決
    pub fn ingredient(&self, label: &str, ingredient: &str) -> Result<(&SampleSlot, &Recipe, &Ingredient)> {
        let (slot, recipe) = self.sample(label)?;
        let found = recipe
            .ingredient(ingredient)
            .ok_or_else(|| WeighProError::UnknownIngredient {
                recipe: recipe.name.clone(),
                ingredient: ingredient.to_string(),
            })?;
        Ok((slot, recipe, found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, "COM3");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.tolerance_grams, 5.0);
        assert!(config.log_path.ends_with("leapsys_weighpro.xlsx"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
        assert_eq!(config.samples.len(), 4);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.port = "/dev/ttyUSB0".into();
        config.tolerance_grams = 2.5;
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.port, "/dev/ttyUSB0");
        assert_eq!(loaded.tolerance_grams, 2.5);
        assert_eq!(loaded.recipes, config.recipes);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"port": "COM7"}"#).unwrap();

        let config = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(config.port, "COM7");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.recipes.len(), 4);
    }

    #[test]
    fn test_broken_file_can_be_reset() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_or_reset_from(&path, false),
            Err(WeighProError::JsonParse(_))
        ));

        let config = Config::load_or_reset_from(&path, true).expect("既定値にならない");
        assert_eq!(config.port, "COM3");
        config.save_to(&path).expect("保存失敗");
        assert!(Config::load_from(&path).is_ok());
    }

    #[test]
    fn test_sample_with_unknown_recipe_rejected() {
        let mut config = Config::default();
        config.samples.push(SampleSlot::new("Sample Weight 5", "BIRYANI"));
        assert!(matches!(config.validate(), Err(WeighProError::Config(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let mut config = Config::default();
        config.tolerance_grams = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let mut config = Config::default();
        let dup = config.recipes[0].clone();
        config.recipes.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ingredient_lookup() {
        let config = Config::default();
        let (slot, recipe, ingredient) = config
            .ingredient("Sample Weight 1", "Noodles")
            .expect("材料が見つからない");
        assert_eq!(slot.recipe, "MAGGI");
        assert_eq!(recipe.name, "MAGGI");
        assert_eq!(ingredient.target_grams, 420.0);

        assert!(matches!(
            config.ingredient("Sample Weight 9", "Noodles"),
            Err(WeighProError::UnknownSample(_))
        ));
        assert!(matches!(
            config.ingredient("Sample Weight 1", "Cheese"),
            Err(WeighProError::UnknownIngredient { .. })
        ));
    }
}
