use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub i64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Ingredient names in declared order, with the author's casing.
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Minutes.
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl Recipe {
    pub fn new(id: i64, name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            id: RecipeId(id),
            name: name.into(),
            ingredients,
            description: None,
            instructions: None,
            prep_time: None,
            cook_time: None,
            servings: None,
        }
    }
}
