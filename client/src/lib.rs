pub mod models;
pub mod config;
pub mod state;
pub mod backend_service;
pub mod controller;

pub use models::*;
pub use config::{backend_url, resolve_backend_url, ClientConfig};
pub use state::{render, SelectedFile, UiState};
pub use backend_service::BackendService;
pub use controller::UiController;
