use crate::domain::{AccessToken, Ingredient, IngredientHash};
use secrecy::Secret;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
}

/// Returned by registration and login.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserInfo,
    pub access_token: AccessToken,
    pub refresh_token: Secret<String>,
}

/// Shape of every failed request.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct IngredientsResponse {
    pub success: bool,
    pub data: Vec<Ingredient>,
}

impl IngredientsResponse {
    pub fn hashes(&self) -> Vec<IngredientHash> {
        self.data.iter().map(|i| i.id.clone()).collect()
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatedOrder {
    pub number: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatedOrderResponse {
    pub success: bool,
    pub name: String,
    pub order: CreatedOrder,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct OrderSummary {
    pub number: u64,
    pub status: String,
    pub ingredients: Vec<IngredientHash>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderSummary>,
    pub total: u64,
    pub total_today: u64,
}

/// Returned by a successful profile update.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserInfo,
}
