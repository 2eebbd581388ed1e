use super::{contains_ci, Record, RecordFilter};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filme {
    pub id: i64,
    pub titulo: String,
    pub genero: String,
    pub ano_lancamento: i64,
    pub disponivel: bool,
}

impl Record for Filme {
    const DATASET: &'static str = "filmes";
    const LABEL: &'static str = "Filme";
    const FIELDS: &'static [&'static str] =
        &["id", "titulo", "genero", "ano_lancamento", "disponivel"];

    fn id(&self) -> i64 {
        self.id
    }
}

/// Query parameters for GET /filmes/filtrar.
#[derive(Debug, Deserialize)]
pub struct FilmeFilter {
    pub genero: Option<String>,
    pub ano_min: Option<i64>,
    pub ano_max: Option<i64>,
}

impl RecordFilter<Filme> for FilmeFilter {
    fn matches(&self, filme: &Filme) -> bool {
        if let Some(genero) = &self.genero {
            if !contains_ci(&filme.genero, genero) {
                return false;
            }
        }
        if let Some(min) = self.ano_min {
            if filme.ano_lancamento < min {
                return false;
            }
        }
        if let Some(max) = self.ano_max {
            if filme.ano_lancamento > max {
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        format!(
            "genero={:?}, ano_min={:?}, ano_max={:?}",
            self.genero, self.ano_min, self.ano_max
        )
    }
}
