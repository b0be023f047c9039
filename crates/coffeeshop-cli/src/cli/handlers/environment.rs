//! `show` and `routes`

use crate::cli::commands::OutputFormat;
use crate::error::Result;
use coffeeshop_env::api::{route_url, DrinkRoute};
use coffeeshop_env::EnvironmentConfig;
use tracing::debug;

/// Render the environment in the frontend's shape
pub fn render_environment(env: &EnvironmentConfig, format: OutputFormat) -> Result<String> {
    debug!("Rendering {} environment as {:?}", env.mode(), format);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(env)?,
        OutputFormat::Toml => toml::to_string_pretty(env)?,
    };
    Ok(rendered)
}

/// One line per route: method, URL, required permission
pub fn render_routes(env: &EnvironmentConfig, id: u64) -> String {
    DrinkRoute::all(id)
        .iter()
        .map(|route| {
            format!(
                "{:<7} {:<40} {}",
                route.method().as_str(),
                route_url(env.api_server_url, route),
                route.required_permission().unwrap_or("public")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeeshop_env::environment::development;

    #[test]
    fn test_render_json() {
        let rendered = render_environment(&development::ENVIRONMENT, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["apiServerUrl"], "http://127.0.0.1:5000");
        assert_eq!(value["auth0"]["url"], "thedevscott");
    }

    #[test]
    fn test_render_routes() {
        let rendered = render_routes(&development::ENVIRONMENT, 5);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("GET"));
        assert!(lines[0].contains("http://127.0.0.1:5000/drinks "));
        assert!(lines[0].ends_with("public"));
        assert!(lines[4].contains("/drinks/5"));
        assert!(lines[4].ends_with("delete:drinks"));
    }
}
