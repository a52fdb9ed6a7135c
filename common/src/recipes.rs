//! 既定のレシピ表とサンプル枠
//!
//! 設定ファイルが無い場合に使用する固定データ。

use crate::types::{Ingredient, Recipe, SampleSlot};

/// 既定のレシピ表（材料の順序は画面表示順）
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "MAGGI",
            vec![
                Ingredient::new("Noodles", 420.0),
                Ingredient::new("Water", 840.0),
                Ingredient::new("Masala", 35.0),
                Ingredient::new("Oil", 20.0),
            ],
        ),
        Recipe::new(
            "PASTA",
            vec![
                Ingredient::new("Pasta", 500.0),
                Ingredient::new("Water", 1000.0),
                Ingredient::new("Sauce", 120.0),
                Ingredient::new("Oil", 30.0),
            ],
        ),
        Recipe::new(
            "SANDWICH",
            vec![
                Ingredient::new("Bread", 120.0),
                Ingredient::new("Butter", 30.0),
                Ingredient::new("Filling", 150.0),
                Ingredient::new("Sauce", 40.0),
            ],
        ),
        Recipe::new(
            "PIZZA",
            vec![
                Ingredient::new("Base", 150.0),
                Ingredient::new("Sauce", 80.0),
                Ingredient::new("Cheese", 120.0),
                Ingredient::new("Toppings", 100.0),
            ],
        ),
    ]
}

/// 既定のサンプル枠
pub fn default_samples() -> Vec<SampleSlot> {
    vec![
        SampleSlot::new("Sample Weight 1", "MAGGI"),
        SampleSlot::new("Sample Weight 2", "PASTA"),
        SampleSlot::new("Sample Weight 3", "SANDWICH"),
        SampleSlot::new("Sample Weight 4", "PIZZA"),
    ]
}
