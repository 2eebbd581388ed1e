//! Locadora API: video-rental REST backend over flat CSV datasets.

pub mod config;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{Aluguel, AluguelFilter, Cliente, ClienteFilter, Filme, FilmeFilter, Record, RecordFilter};
pub use routes::app_router;
pub use state::AppState;
pub use store::CsvStore;
