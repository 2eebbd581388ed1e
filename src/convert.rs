//! Dataset derivatives: zip archive, SHA-256 digest and XML export.
//!
//! These work on the raw dataset file of a named entity, bypassing the typed
//! store. Derived files land next to the source and are overwritten on every
//! request.

use crate::error::AppError;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn dataset_path(data_dir: &Path, entidade: &str) -> PathBuf {
    data_dir.join(format!("{entidade}.csv"))
}

fn not_found(entidade: &str) -> AppError {
    AppError::NotFound(format!("Arquivo {entidade}.csv não encontrado"))
}

/// Writes `<entidade>.zip` next to the dataset, with the CSV as its single
/// entry under its own file name. Returns the archive path.
pub fn compress_dataset(data_dir: &Path, entidade: &str) -> Result<PathBuf, AppError> {
    let csv_path = dataset_path(data_dir, entidade);
    if !csv_path.exists() {
        return Err(not_found(entidade));
    }
    let zip_path = data_dir.join(format!("{entidade}.zip"));
    let mut writer = ZipWriter::new(fs::File::create(&zip_path)?);
    writer.start_file(format!("{entidade}.csv"), SimpleFileOptions::default())?;
    writer.write_all(&fs::read(&csv_path)?)?;
    writer.finish()?;
    Ok(zip_path)
}

/// SHA-256 of the raw dataset bytes, as lowercase hex.
pub fn dataset_hash(data_dir: &Path, entidade: &str) -> Result<String, AppError> {
    let csv_path = dataset_path(data_dir, entidade);
    if !csv_path.exists() {
        return Err(not_found(entidade));
    }
    let bytes = fs::read(&csv_path)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Re-emits the dataset as `<entidade>.xml`: UTF-8 declaration, root element
/// named after the entity, one child per row named by the singular form, one
/// leaf element per field holding the raw text value.
pub fn export_xml(data_dir: &Path, entidade: &str) -> Result<PathBuf, AppError> {
    let csv_path = dataset_path(data_dir, entidade);
    if !csv_path.exists() {
        return Err(not_found(entidade));
    }
    let mut reader = csv::Reader::from_path(&csv_path)?;
    let headers = reader.headers()?.clone();

    let item = singularize(entidade);
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!("<{entidade}>"));
    for row in reader.records() {
        let row = row.map_err(|e| {
            AppError::Validation(format!("registro inválido em {entidade}: {e}"))
        })?;
        doc.push_str(&format!("<{item}>"));
        for (field, value) in headers.iter().zip(row.iter()) {
            doc.push_str(&format!("<{field}>{}</{field}>", escape_text(value)));
        }
        doc.push_str(&format!("</{item}>"));
    }
    doc.push_str(&format!("</{entidade}>"));

    let xml_path = data_dir.join(format!("{entidade}.xml"));
    fs::write(&xml_path, doc)?;
    Ok(xml_path)
}

/// Naive singular form: the entity name minus its final character
/// ("filmes" becomes "filme").
fn singularize(entidade: &str) -> &str {
    let mut chars = entidade.chars();
    chars.next_back();
    chars.as_str()
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
