use super::{contains_ci, Record, RecordFilter};
use crate::error::AppError;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub data_cadastro: NaiveDate,
}

impl Record for Cliente {
    const DATASET: &'static str = "clientes";
    const LABEL: &'static str = "Cliente";
    const FIELDS: &'static [&'static str] = &["id", "nome", "email", "telefone", "data_cadastro"];

    fn id(&self) -> i64 {
        self.id
    }

    fn validate(&self) -> Result<(), AppError> {
        let re = Regex::new(EMAIL_PATTERN)
            .map_err(|_| AppError::Validation("padrão de email inválido".into()))?;
        if !re.is_match(&self.email) {
            return Err(AppError::Validation(format!(
                "email inválido: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Query parameters for GET /clientes/filtrar. Date bounds are inclusive and
/// compared as ISO-8601 strings.
#[derive(Debug, Deserialize)]
pub struct ClienteFilter {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_cadastro_min: Option<String>,
    pub data_cadastro_max: Option<String>,
}

impl RecordFilter<Cliente> for ClienteFilter {
    fn matches(&self, cliente: &Cliente) -> bool {
        if let Some(nome) = &self.nome {
            if !contains_ci(&cliente.nome, nome) {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if !contains_ci(&cliente.email, email) {
                return false;
            }
        }
        let data_cadastro = cliente.data_cadastro.to_string();
        if let Some(min) = &self.data_cadastro_min {
            if data_cadastro < *min {
                return false;
            }
        }
        if let Some(max) = &self.data_cadastro_max {
            if data_cadastro > *max {
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        format!("nome={:?}, email={:?}", self.nome, self.email)
    }
}
