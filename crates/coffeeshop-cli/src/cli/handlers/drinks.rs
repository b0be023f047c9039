//! `drinks`

use crate::error::{CliError, Result};
use coffeeshop_env::api::{ClientBuilder, Drink, DrinksClient};
use coffeeshop_env::EnvironmentConfig;
use tracing::debug;

/// Fetch drinks from the environment's API server
pub async fn handle_drinks(
    env: &EnvironmentConfig,
    detail: bool,
    token: Option<String>,
) -> Result<String> {
    let mut builder = ClientBuilder::from_environment(env);
    if let Some(token) = token {
        builder = builder.with_bearer_token(token);
    }
    let client = builder.build()?;

    fetch_drinks(&client, detail).await
}

/// List drinks through `client` and render them
pub async fn fetch_drinks(client: &DrinksClient, detail: bool) -> Result<String> {
    if detail && client.bearer_token().is_none() {
        return Err(CliError::MissingToken);
    }

    debug!("Fetching drinks from {} (detail: {})", client.base_url(), detail);
    let drinks = if detail {
        client.drinks_detail().await?
    } else {
        client.list_drinks().await?
    };

    Ok(render_drinks(&drinks))
}

/// `#id title` followed by one indented line per recipe layer
pub fn render_drinks(drinks: &[Drink]) -> String {
    if drinks.is_empty() {
        return "No drinks on the menu".to_string();
    }

    let mut lines = Vec::new();
    for drink in drinks {
        lines.push(format!("#{} {}", drink.id, drink.title));
        for ingredient in &drink.recipe {
            match &ingredient.name {
                Some(name) => lines.push(format!(
                    "    {} x{} ({})",
                    name, ingredient.parts, ingredient.color
                )),
                None => lines.push(format!("    x{} ({})", ingredient.parts, ingredient.color)),
            }
        }
    }
    lines.join("\n")
}
