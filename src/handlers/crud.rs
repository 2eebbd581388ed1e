//! Generic per-entity CRUD handlers. Each route registration picks the
//! record type; wire shape and message nouns come from the Record impl.
//!
//! Malformed bodies and non-integer path ids are rejected by the extractors
//! before the handler body runs. Store I/O is synchronous and blocks the
//! worker serving the request.

use crate::error::AppError;
use crate::model::{Record, RecordFilter};
use crate::state::AppState;
use crate::store::CsvStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

pub async fn create<T: Record>(
    State(state): State<AppState>,
    Json(record): Json<T>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    record.validate()?;
    let id = record.id();
    CsvStore::<T>::new(&state.data_dir).create(record)?;
    let mensagem = format!("{} criado com sucesso (ID: {})", T::LABEL, id);
    tracing::info!("{}", mensagem);
    Ok((StatusCode::CREATED, Json(json!({ "mensagem": mensagem }))))
}

pub async fn list<T: Record>(State(state): State<AppState>) -> Result<Json<Vec<T>>, AppError> {
    tracing::info!("Listagem de {} solicitada", T::DATASET);
    Ok(Json(CsvStore::<T>::new(&state.data_dir).read_all()?))
}

pub async fn count<T: Record>(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!("Contagem de {} solicitada", T::DATASET);
    let records = CsvStore::<T>::new(&state.data_dir).read_all()?;
    Ok(Json(json!({ "quantidade": records.len() })))
}

pub async fn filter<T: Record, F: RecordFilter<T>>(
    State(state): State<AppState>,
    Query(criteria): Query<F>,
) -> Result<Json<Vec<T>>, AppError> {
    tracing::info!(
        "Filtragem de {} solicitada: {}",
        T::DATASET,
        criteria.describe()
    );
    let matches = CsvStore::<T>::new(&state.data_dir).filter(|r| criteria.matches(r))?;
    Ok(Json(matches))
}

pub async fn get_one<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<T>, AppError> {
    match CsvStore::<T>::new(&state.data_dir).get_by_id(id)? {
        Some(record) => {
            tracing::info!("{} consultado (ID: {})", T::LABEL, id);
            Ok(Json(record))
        }
        None => {
            tracing::warn!(
                "Tentativa de acesso a {} inexistente (ID: {})",
                T::LABEL.to_lowercase(),
                id
            );
            Err(AppError::NotFound(format!("{} não encontrado", T::LABEL)))
        }
    }
}

pub async fn update<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(record): Json<T>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    record.validate()?;
    if !CsvStore::<T>::new(&state.data_dir).update(id, record)? {
        tracing::warn!(
            "Tentativa de atualizar {} inexistente (ID: {})",
            T::LABEL.to_lowercase(),
            id
        );
        return Err(AppError::NotFound(format!("{} não encontrado", T::LABEL)));
    }
    let mensagem = format!("{} atualizado com sucesso (ID: {})", T::LABEL, id);
    tracing::info!("{}", mensagem);
    Ok(Json(json!({ "mensagem": mensagem })))
}

pub async fn remove<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !CsvStore::<T>::new(&state.data_dir).delete(id)? {
        tracing::warn!(
            "Tentativa de exclusão de {} inexistente (ID: {})",
            T::LABEL.to_lowercase(),
            id
        );
        return Err(AppError::NotFound(format!("{} não encontrado", T::LABEL)));
    }
    let mensagem = format!("{} excluído com sucesso (ID: {})", T::LABEL, id);
    tracing::info!("{}", mensagem);
    Ok(Json(json!({ "mensagem": mensagem })))
}
