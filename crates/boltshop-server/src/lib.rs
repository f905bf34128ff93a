//! HTTP API for Boltshop.
//!
//! Serves the login and admin product endpoints backed by the JSON store,
//! plus read-only catalog endpoints over the asset-derived catalog.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /api/login` | [`routes::login`] |
//! | `GET /api/products` | [`routes::list_products`] |
//! | `POST /api/products` | [`routes::create_product`] |
//! | `PUT /api/products/{id}` | [`routes::update_product`] |
//! | `GET /api/catalog` | [`routes::catalog_page`] |
//! | `GET /api/catalog/categories` | [`routes::catalog_categories`] |
//! | `GET /api/catalog/{id}` | [`routes::catalog_product`] |

use axum::{
    routing::{get, post, put},
    Router,
};
use boltshop_commerce::catalog::Catalog;
use boltshop_db::Db;
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ApiError, ServerError};
pub use state::AppState;

/// API routes without CORS or static files.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(routes::login))
        .route(
            "/api/products",
            get(routes::list_products).post(routes::create_product),
        )
        .route("/api/products/{id}", put(routes::update_product))
        .route("/api/catalog", get(routes::catalog_page))
        .route("/api/catalog/categories", get(routes::catalog_categories))
        .route("/api/catalog/{id}", get(routes::catalog_product))
        .with_state(state)
}

/// Full application: API routes, asset files and permissive CORS.
pub fn app(config: &ServerConfig, state: AppState) -> Router {
    let mut app = router(state);
    if let Some(dir) = &config.assets_dir {
        let route = config.asset_route();
        app = if route == "/" {
            app.fallback_service(ServeDir::new(dir))
        } else {
            app.nest_service(&route, ServeDir::new(dir))
        };
    }
    app.layer(CorsLayer::permissive())
}

/// Build handler state from config: open the store and index the assets.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let db = Db::open(&config.db_path);
    let catalog = match &config.assets_dir {
        Some(dir) => Catalog::from_dir(dir, &config.asset_route())?,
        None => Catalog::default(),
    };
    info!(
        db = %config.db_path.display(),
        products = catalog.len(),
        "state initialised"
    );
    Ok(AppState::new(db, catalog))
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = build_state(&config)?;
    let app = app(&config, state);

    let address = config.bind_addr();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
