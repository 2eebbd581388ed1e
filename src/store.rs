//! Generic whole-file CRUD over one CSV dataset per record type.
//!
//! Every operation reloads the backing file; mutations rewrite it completely
//! by writing a temp file and renaming it over the target, so a concurrent
//! reader never observes a truncated dataset. Ids are lookup keys only:
//! duplicates are accepted on create and the first match wins on lookup.

use crate::error::AppError;
use crate::model::Record;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub struct CsvStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: Record> CsvStore<T> {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.csv", T::DATASET)),
            _record: PhantomData,
        }
    }

    /// Backing file for this dataset.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the whole dataset in row order. A missing file is an empty
    /// dataset; a row that fails type coercion or record validation fails
    /// the whole read.
    pub fn read_all(&self) -> Result<Vec<T>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: T = row.map_err(|e| {
                AppError::Validation(format!("registro inválido em {}: {}", T::DATASET, e))
            })?;
            record.validate()?;
            records.push(record);
        }
        Ok(records)
    }

    /// Rewrites the dataset: header row, then one row per record. The new
    /// content lands in `<dataset>.csv.tmp` and is renamed over the target.
    pub fn write_all(&self, records: &[T]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("csv.tmp");
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;
        writer.write_record(T::FIELDS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Linear scan; first record with a matching id wins.
    pub fn get_by_id(&self, id: i64) -> Result<Option<T>, AppError> {
        Ok(self.read_all()?.into_iter().find(|r| r.id() == id))
    }

    /// Appends the record and persists. No duplicate-id check.
    pub fn create(&self, record: T) -> Result<(), AppError> {
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// Replaces the first record with a matching id, keeping its position.
    /// Returns false, writing nothing, when no record matches.
    pub fn update(&self, id: i64, new_record: T) -> Result<bool, AppError> {
        let mut records = self.read_all()?;
        match records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                records[idx] = new_record;
                self.write_all(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every record with a matching id. Returns false, writing
    /// nothing, when no record was removed.
    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let records = self.read_all()?;
        let kept: Vec<T> = records.iter().filter(|r| r.id() != id).cloned().collect();
        if kept.len() == records.len() {
            return Ok(false);
        }
        self.write_all(&kept)?;
        Ok(true)
    }

    /// Ordered subsequence of records satisfying the predicate.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>, AppError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| predicate(r))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Aluguel, Cliente, Filme};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn matrix() -> Filme {
        Filme {
            id: 1,
            titulo: "Matrix".into(),
            genero: "Ficção".into(),
            ano_lancamento: 1999,
            disponivel: true,
        }
    }

    fn dogma() -> Filme {
        Filme {
            id: 2,
            titulo: "Dogma".into(),
            genero: "Comédia".into(),
            ano_lancamento: 1999,
            disponivel: false,
        }
    }

    #[test]
    fn read_all_treats_missing_file_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn create_then_get_by_id_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        assert_eq!(store.get_by_id(1).unwrap(), Some(matrix()));
    }

    #[test]
    fn records_keep_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        store.create(dogma()).unwrap();
        let ids: Vec<i64> = store.read_all().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn update_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        store.create(dogma()).unwrap();

        let mut novo = matrix();
        novo.titulo = "Matrix Reloaded".into();
        assert!(store.update(1, novo).unwrap());

        let records = store.read_all().unwrap();
        assert_eq!(records[0].titulo, "Matrix Reloaded");
        assert_eq!(records[1], dogma());
    }

    #[test]
    fn update_missing_id_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(!store.update(99, dogma()).unwrap());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn delete_removes_every_matching_id() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        store.create(matrix()).unwrap();
        store.create(dogma()).unwrap();

        assert!(store.delete(1).unwrap());
        let ids: Vec<i64> = store.read_all().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn delete_missing_id_keeps_file_byte_identical() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(!store.delete(99).unwrap());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn duplicate_ids_are_accepted_and_first_match_wins() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        let mut second = matrix();
        second.titulo = "Matrix Reloaded".into();
        store.create(matrix()).unwrap();
        store.create(second).unwrap();

        assert_eq!(store.get_by_id(1).unwrap().unwrap().titulo, "Matrix");
    }

    #[test]
    fn write_all_of_read_all_preserves_content() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.create(matrix()).unwrap();
        store.create(dogma()).unwrap();

        let before = fs::read_to_string(store.path()).unwrap();
        let records = store.read_all().unwrap();
        store.write_all(&records).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn empty_dataset_is_written_as_header_only() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        store.write_all(&[]).unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "id,titulo,genero,ano_lancamento,disponivel\n"
        );
    }

    #[test]
    fn unparsable_row_fails_the_whole_read() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Filme>::new(dir.path());
        fs::write(
            store.path(),
            "id,titulo,genero,ano_lancamento,disponivel\nx,Matrix,Ficção,1999,true\n",
        )
        .unwrap();
        assert!(matches!(
            store.read_all(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn malformed_stored_date_fails_the_whole_read() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Cliente>::new(dir.path());
        fs::write(
            store.path(),
            "id,nome,email,telefone,data_cadastro\n1,Maria,maria@exemplo.com,11 99999-0000,15/03/2024\n",
        )
        .unwrap();
        assert!(matches!(
            store.read_all(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn invalid_stored_email_fails_the_whole_read() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Cliente>::new(dir.path());
        fs::write(
            store.path(),
            "id,nome,email,telefone,data_cadastro\n1,Maria,sem-arroba,11 99999-0000,2024-03-15\n",
        )
        .unwrap();
        assert!(matches!(
            store.read_all(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn optional_return_date_round_trips_through_empty_field() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::<Aluguel>::new(dir.path());
        let aberto = Aluguel {
            id: 1,
            cliente_id: 1,
            filme_id: 1,
            data_aluguel: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            data_devolucao: None,
            status: "ativo".into(),
        };
        let devolvido = Aluguel {
            id: 2,
            data_devolucao: NaiveDate::from_ymd_opt(2024, 5, 9),
            status: "finalizado".into(),
            ..aberto.clone()
        };
        store.create(aberto.clone()).unwrap();
        store.create(devolvido.clone()).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records, vec![aberto, devolvido]);
    }
}
