use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    database,
    error::Result,
    routes,
    store::{PgProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState {
        store: Arc::new(PgProductStore::new(pool)),
    };

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
