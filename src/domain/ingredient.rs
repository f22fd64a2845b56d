/// Opaque identifier of a menu ingredient, as listed under `data[]._id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IngredientHash(String);

impl IngredientHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientHash {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for IngredientHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for IngredientHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IngredientHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: IngredientHash,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}
