use crate::backend_service::BackendService;
use crate::state::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Owns the session state and runs the upload and query flows against the backend.
///
/// Each flow keeps its own generation counter. A response is applied only if no
/// newer invocation of the same flow started while it was in flight, so an
/// older, slower request can never overwrite a newer result.
pub struct UiController {
    backend: BackendService,
    state: RwLock<UiState>,
    upload_generation: AtomicU64,
    query_generation: AtomicU64,
}

impl UiController {
    pub fn new(backend: BackendService) -> Self {
        Self {
            backend,
            state: RwLock::new(UiState::new()),
            upload_generation: AtomicU64::new(0),
            query_generation: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &BackendService {
        &self.backend
    }

    pub async fn snapshot(&self) -> UiState {
        self.state.read().await.clone()
    }

    pub async fn set_question(&self, question: impl Into<String>) {
        self.state.write().await.question = question.into();
    }

    pub async fn select_file(&self, path: impl Into<PathBuf>) {
        let file = SelectedFile::new(path);
        log::info!("Selected {}", file.path().display());
        self.state.write().await.selected_file = Some(file);
    }

    /// Uploads the selected file and records the outcome in the status message.
    pub async fn upload_document(&self) {
        let generation = self.upload_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let selected = self.state.read().await.selected_file.clone();

        let message = match selected {
            None => SELECT_FILE_PROMPT.to_string(),
            Some(file) => match self.backend.upload_pdf(file.path()).await {
                Ok(response) => response.message,
                Err(e) => {
                    log::warn!("Upload of {} failed: {:#}", file.file_name(), e);
                    UPLOAD_FAILED.to_string()
                }
            },
        };

        if self.upload_generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding stale upload result (generation {})", generation);
            return;
        }
        self.state.write().await.upload_message = message;
    }

    /// Sends the current question and records the answer, or a notice on failure.
    pub async fn ask_question(&self) {
        let generation = self.query_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let question = self.state.read().await.question.clone();

        let answer = if question.trim().is_empty() {
            ENTER_QUESTION_PROMPT.to_string()
        } else {
            match self.backend.query(&question).await {
                Ok(response) => response.answer,
                Err(e) => {
                    log::warn!("Query failed: {:#}", e);
                    QUERY_FAILED.to_string()
                }
            }
        };

        if self.query_generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding stale answer (generation {})", generation);
            return;
        }
        self.state.write().await.answer = answer;
    }
}
