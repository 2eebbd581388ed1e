use super::{Record, RecordFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "ativo".to_string()
}

/// An empty `data_devolucao` means the movie has not been returned yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aluguel {
    pub id: i64,
    pub cliente_id: i64,
    pub filme_id: i64,
    pub data_aluguel: NaiveDate,
    pub data_devolucao: Option<NaiveDate>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Record for Aluguel {
    const DATASET: &'static str = "alugueis";
    const LABEL: &'static str = "Aluguel";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "cliente_id",
        "filme_id",
        "data_aluguel",
        "data_devolucao",
        "status",
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

/// Query parameters for GET /alugueis/filtrar. `status` is matched by
/// case-insensitive equality; date bounds are inclusive ISO-8601 string
/// comparisons on `data_aluguel`.
#[derive(Debug, Deserialize)]
pub struct AluguelFilter {
    pub status: Option<String>,
    pub cliente_id: Option<i64>,
    pub filme_id: Option<i64>,
    pub data_aluguel_min: Option<String>,
    pub data_aluguel_max: Option<String>,
}

impl RecordFilter<Aluguel> for AluguelFilter {
    fn matches(&self, aluguel: &Aluguel) -> bool {
        if let Some(status) = &self.status {
            if !status.eq_ignore_ascii_case(&aluguel.status) {
                return false;
            }
        }
        if let Some(cliente_id) = self.cliente_id {
            if aluguel.cliente_id != cliente_id {
                return false;
            }
        }
        if let Some(filme_id) = self.filme_id {
            if aluguel.filme_id != filme_id {
                return false;
            }
        }
        let data_aluguel = aluguel.data_aluguel.to_string();
        if let Some(min) = &self.data_aluguel_min {
            if data_aluguel < *min {
                return false;
            }
        }
        if let Some(max) = &self.data_aluguel_max {
            if data_aluguel > *max {
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        format!(
            "status={:?}, cliente_id={:?}, filme_id={:?}",
            self.status, self.cliente_id, self.filme_id
        )
    }
}
