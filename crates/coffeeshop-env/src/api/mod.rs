//! Drinks API client layer
//!
//! `apiServerUrl` is used as given: request URLs are formed by plain
//! concatenation with the route path, without trailing-slash normalization.

mod client;
mod types;

pub use client::{ClientBuilder, DrinksClient, DEFAULT_TIMEOUT_SECS};
pub use types::{
    AuthErrorBody, DeleteResponse, Drink, DrinkPayload, DrinksResponse, ErrorBody, Ingredient,
};

use std::fmt;

/// Permission required to read the full recipe representation
pub const PERMISSION_GET_DRINKS_DETAIL: &str = "get:drinks-detail";
/// Permission required to create drinks
pub const PERMISSION_POST_DRINKS: &str = "post:drinks";
/// Permission required to edit drinks
pub const PERMISSION_PATCH_DRINKS: &str = "patch:drinks";
/// Permission required to delete drinks
pub const PERMISSION_DELETE_DRINKS: &str = "delete:drinks";

/// Routes exposed by the drinks API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkRoute {
    /// `GET /drinks`, public, short recipe representation
    ListDrinks,
    /// `GET /drinks-detail`, long recipe representation
    DrinksDetail,
    /// `POST /drinks`
    CreateDrink,
    /// `PATCH /drinks/{id}`
    UpdateDrink(u64),
    /// `DELETE /drinks/{id}`
    DeleteDrink(u64),
}

impl DrinkRoute {
    /// One instance of every route, with `id` filled into the parameterized ones
    pub fn all(id: u64) -> [DrinkRoute; 5] {
        [
            DrinkRoute::ListDrinks,
            DrinkRoute::DrinksDetail,
            DrinkRoute::CreateDrink,
            DrinkRoute::UpdateDrink(id),
            DrinkRoute::DeleteDrink(id),
        ]
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            DrinkRoute::ListDrinks | DrinkRoute::DrinksDetail => reqwest::Method::GET,
            DrinkRoute::CreateDrink => reqwest::Method::POST,
            DrinkRoute::UpdateDrink(_) => reqwest::Method::PATCH,
            DrinkRoute::DeleteDrink(_) => reqwest::Method::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            DrinkRoute::ListDrinks | DrinkRoute::CreateDrink => "/drinks".to_string(),
            DrinkRoute::DrinksDetail => "/drinks-detail".to_string(),
            DrinkRoute::UpdateDrink(id) | DrinkRoute::DeleteDrink(id) => format!("/drinks/{id}"),
        }
    }

    /// Permission the API checks, `None` for public routes
    pub fn required_permission(&self) -> Option<&'static str> {
        match self {
            DrinkRoute::ListDrinks => None,
            DrinkRoute::DrinksDetail => Some(PERMISSION_GET_DRINKS_DETAIL),
            DrinkRoute::CreateDrink => Some(PERMISSION_POST_DRINKS),
            DrinkRoute::UpdateDrink(_) => Some(PERMISSION_PATCH_DRINKS),
            DrinkRoute::DeleteDrink(_) => Some(PERMISSION_DELETE_DRINKS),
        }
    }
}

impl fmt::Display for DrinkRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// `{base_url}{path}`
pub fn route_url(base_url: &str, route: &DrinkRoute) -> String {
    format!("{}{}", base_url, route.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let cases = [
            (DrinkRoute::ListDrinks, "GET", "/drinks", None),
            (
                DrinkRoute::DrinksDetail,
                "GET",
                "/drinks-detail",
                Some("get:drinks-detail"),
            ),
            (DrinkRoute::CreateDrink, "POST", "/drinks", Some("post:drinks")),
            (
                DrinkRoute::UpdateDrink(7),
                "PATCH",
                "/drinks/7",
                Some("patch:drinks"),
            ),
            (
                DrinkRoute::DeleteDrink(7),
                "DELETE",
                "/drinks/7",
                Some("delete:drinks"),
            ),
        ];

        for (route, method, path, permission) in cases {
            assert_eq!(route.method().as_str(), method);
            assert_eq!(route.path(), path);
            assert_eq!(route.required_permission(), permission);
        }
    }

    #[test]
    fn test_route_url_is_plain_concatenation() {
        assert_eq!(
            route_url("http://127.0.0.1:5000", &DrinkRoute::ListDrinks),
            "http://127.0.0.1:5000/drinks"
        );
        // a trailing slash in the base is kept as configured
        assert_eq!(
            route_url("http://127.0.0.1:5000/", &DrinkRoute::DrinksDetail),
            "http://127.0.0.1:5000//drinks-detail"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DrinkRoute::DeleteDrink(3).to_string(), "DELETE /drinks/3");
    }
}
