//! Router assembly. Each entity mounts one generic router instantiation
//! under its own prefix; derivative and common routes sit at the root.

use crate::handlers::convert::{compactar, converter_xml, hash};
use crate::handlers::crud::{count, create, filter, get_one, list, remove, update};
use crate::model::{
    Aluguel, AluguelFilter, Cliente, ClienteFilter, Filme, FilmeFilter, Record, RecordFilter,
};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

/// Full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/filmes", entity_routes::<Filme, FilmeFilter>(state.clone()))
        .nest(
            "/clientes",
            entity_routes::<Cliente, ClienteFilter>(state.clone()),
        )
        .nest(
            "/alugueis",
            entity_routes::<Aluguel, AluguelFilter>(state.clone()),
        )
        .merge(convert_routes(state))
}

/// Consistent per-entity surface: create, list, count, filter, get, update,
/// delete.
fn entity_routes<T: Record, F: RecordFilter<T>>(state: AppState) -> Router {
    Router::new()
        .route("/", post(create::<T>).get(list::<T>))
        .route("/quantidade", get(count::<T>))
        .route("/filtrar", get(filter::<T, F>))
        .route(
            "/:id",
            get(get_one::<T>).put(update::<T>).delete(remove::<T>),
        )
        .with_state(state)
}

fn convert_routes(state: AppState) -> Router {
    Router::new()
        .route("/compactar/:entidade", get(compactar))
        .route("/hash/:entidade", get(hash))
        .route("/converter/:entidade/xml", get(converter_xml))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes: GET /health, GET /version.
fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}
