//! Wire types of the drinks API

use serde::{Deserialize, Serialize};

/// A drink on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// One layer of a drink's recipe
///
/// The public listing only carries `color` and `parts`; `name` is present in
/// the detail representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub parts: u32,
}

/// Request body for creating or patching a drink
///
/// Both fields are optional on PATCH; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrinkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Vec<Ingredient>>,
}

/// `{"success": true, "drinks": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct DrinksResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

/// `{"success": true, "delete": id}`
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: u64,
}

/// `{"success": false, "error": 404, "message": "resource not found"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// Body of an authorization failure, e.g.
/// `{"code": "invalid_header", "description": "Authorization header is expected."}`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorBody {
    pub code: String,
    pub description: String,
}
