//! Shared Test Utilities

use std::sync::Arc;

use axum_test::TestServer;

use calc_server::config::{CorsSettings, ServerSettings, Settings};
use calc_server::presentation::http::routes;
use calc_server::startup::AppState;

/// Settings for in-process tests; the port is never bound.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Build a test server running the real router in-process.
pub fn spawn_app() -> TestServer {
    let state = AppState {
        settings: Arc::new(test_settings()),
    };
    let router = routes::create_router(state);

    TestServer::new(router).expect("Failed to start test server")
}
