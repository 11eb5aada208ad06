use serde::{Deserialize, Serialize};

/// Structured analysis of one dish photo. Serialized field names follow the
/// web client's contract, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,  // free-form portion size, e.g. "150г"
    #[serde(default)]
    pub category: IngredientCategory,
}

/// Ingredient categories the analysis prompt pins the model to. Wire labels
/// are the Russian strings the client colors its badges by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IngredientCategory {
    #[serde(rename = "Белок")]
    Protein,
    #[serde(rename = "Овощи")]
    Vegetables,
    #[serde(rename = "Молочное")]
    Dairy,
    #[serde(rename = "Соусы")]
    Sauces,
    #[serde(rename = "Углеводы")]
    Carbs,
    #[serde(rename = "Другое")]
    Other,
}

impl IngredientCategory {
    /// Any label outside the fixed set collapses to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Белок" => IngredientCategory::Protein,
            "Овощи" => IngredientCategory::Vegetables,
            "Молочное" => IngredientCategory::Dairy,
            "Соусы" => IngredientCategory::Sauces,
            "Углеводы" => IngredientCategory::Carbs,
            _ => IngredientCategory::Other,
        }
    }
}

impl Default for IngredientCategory {
    fn default() -> Self {
        IngredientCategory::Other
    }
}

impl<'de> Deserialize<'de> for IngredientCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(IngredientCategory::from_label(&label))
    }
}
