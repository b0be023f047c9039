//! Production environment
//!
//! Points at the same Auth0 tenant and API as development; only the mode flag
//! differs until a hosted deployment exists.

use super::{Auth0Settings, EnvironmentConfig};

pub const ENVIRONMENT: EnvironmentConfig = EnvironmentConfig {
    production: true,
    api_server_url: "http://127.0.0.1:5000",
    auth0: Auth0Settings {
        provider_domain_prefix: "thedevscott",
        audience: "localhost:5000",
        client_id: "I67b3U2Nr1MTBBn0nGQlDOkKvG68gBi1",
        callback_url: "http://localhost:8100",
    },
};
