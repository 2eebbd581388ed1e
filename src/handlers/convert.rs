//! Derivative endpoints: archive, digest and XML export of a dataset named
//! by its entity path segment.

use crate::convert;
use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::fs;

/// GET /compactar/:entidade — zip the dataset and return the archive.
pub async fn compactar(
    State(state): State<AppState>,
    Path(entidade): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Solicitação para compactar arquivo CSV: {}", entidade);
    let zip_path = convert::compress_dataset(&state.data_dir, &entidade)
        .map_err(|e| log_missing(e, &entidade))?;
    tracing::info!("Arquivo CSV compactado com sucesso: {}", entidade);
    let bytes = fs::read(&zip_path)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{entidade}.zip\""),
            ),
        ],
        bytes,
    ))
}

/// GET /hash/:entidade — SHA-256 of the dataset bytes.
pub async fn hash(
    State(state): State<AppState>,
    Path(entidade): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Solicitação para calcular hash do arquivo CSV: {}", entidade);
    let digest =
        convert::dataset_hash(&state.data_dir, &entidade).map_err(|e| log_missing(e, &entidade))?;
    tracing::info!("Hash calculado com sucesso para: {}", entidade);
    Ok(Json(json!({ "entidade": entidade, "hash": digest })))
}

/// GET /converter/:entidade/xml — convert the dataset to XML and return it.
pub async fn converter_xml(
    State(state): State<AppState>,
    Path(entidade): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Solicitação para converter CSV para XML: {}", entidade);
    let xml_path =
        convert::export_xml(&state.data_dir, &entidade).map_err(|e| log_missing(e, &entidade))?;
    tracing::info!("Conversão para XML concluída com sucesso: {}", entidade);
    let body = fs::read_to_string(&xml_path)?;
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/xml; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{entidade}.xml\""),
            ),
        ],
        body,
    ))
}

fn log_missing(err: AppError, entidade: &str) -> AppError {
    if matches!(err, AppError::NotFound(_)) {
        tracing::error!("Arquivo CSV não encontrado: {}", entidade);
    }
    err
}
