use std::path::{Path, PathBuf};

pub const SELECT_FILE_PROMPT: &str = "Please select a PDF first.";
pub const UPLOAD_FAILED: &str = "Upload failed: Could not reach backend.";
pub const ENTER_QUESTION_PROMPT: &str = "Please enter a question.";
pub const QUERY_FAILED: &str = "Error: Could not fetch answer.";

/// A file picked for upload. Only the path is kept; bytes are read when uploading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub question: String,
    pub answer: String,
    pub selected_file: Option<SelectedFile>,
    pub upload_message: String,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Text view of the state, one section per flow.
pub fn render(state: &UiState) -> String {
    let file = state
        .selected_file
        .as_ref()
        .map(SelectedFile::file_name)
        .unwrap_or_else(|| "(none)".to_string());

    let mut view = String::new();
    view.push_str("📄 RAG PDF Search\n");
    view.push_str("\nUpload PDF\n");
    view.push_str(&format!("  File: {}\n", file));
    if !state.upload_message.is_empty() {
        view.push_str(&format!("  {}\n", state.upload_message));
    }
    view.push_str("\nAsk a Question\n");
    view.push_str(&format!("  Question: {}\n", state.question));
    view.push_str(&format!("  Answer: {}\n", state.answer));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_renders_placeholders() {
        let view = render(&UiState::new());

        assert!(view.contains("File: (none)"));
        assert!(view.contains("Answer: \n"));
    }

    #[test]
    fn render_shows_file_name_status_and_answer() {
        let state = UiState {
            question: "What is the capital of France?".to_string(),
            answer: "Paris".to_string(),
            selected_file: Some(SelectedFile::new("/tmp/docs/atlas.pdf")),
            upload_message: "atlas.pdf uploaded and indexed successfully!".to_string(),
        };
        let view = render(&state);

        assert!(view.contains("File: atlas.pdf"));
        assert!(view.contains("  atlas.pdf uploaded and indexed successfully!\n"));
        assert!(view.contains("Question: What is the capital of France?"));
        assert!(view.contains("Answer: Paris"));
    }

    #[test]
    fn upload_section_precedes_question_section() {
        let view = render(&UiState::new());
        let upload = view.find("Upload PDF").unwrap();
        let ask = view.find("Ask a Question").unwrap();
        assert!(upload < ask);
    }
}
