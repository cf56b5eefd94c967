use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::database::seed;
use mergington::web::build_router;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 2. Config + roster
    let config = ServerConfig::from_env();
    let roster = seed::seed_roster();
    info!(activities = roster.len(), "roster seeded");

    // 3. Router
    let app = build_router(roster, &config.static_dir);

    // 4. Bind (with fallback port) and serve
    let addr = config.addr().expect("HOST/PORT do not form a valid address");
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                panic!("could not bind {}: {}; no fallback port available", addr, e);
            };
            warn!("could not bind {}: {}; trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener
        .local_addr()
        .expect("listener has no local address");
    info!("Mergington activities API listening on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
