//! latgrid Gateway
//!
//! Startup order: tracing -> config -> dataset -> router -> serve.
//! - Missing config file: defaults apply.
//! - Missing dataset file: empty dataset, every region reports the zero record.
//! - Corrupt dataset file: fatal; never serve partial data.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use latgrid_gateway::{app_state, config, dataset, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("latgrid.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let data = dataset::load_from_file(&cfg.dataset.path).expect("dataset load failed");

    let state = app_state::AppState::new(cfg, data);
    let app = router::build_router(state);

    tracing::info!(%listen, "latgrid-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
