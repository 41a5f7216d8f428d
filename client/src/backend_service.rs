use crate::models::*;
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use uuid::Uuid;

/// HTTP access to the RAG backend: PDF upload, question answering, health.
pub struct BackendService {
    client: Client,
    base_url: String,
}

impl BackendService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn upload_pdf(&self, path: &Path) -> Result<UploadResponse> {
        let request_id = Uuid::new_v4();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        log::info!(
            "[{}] POST /upload-pdf ({}, {} bytes)",
            request_id,
            file_name,
            bytes.len()
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self.client
            .post(self.endpoint("/upload-pdf"))
            .multipart(form)
            .send()
            .await?;

        let upload: UploadResponse = self.parse_response(request_id, response).await?;
        log::info!("[{}] upload accepted: {}", request_id, upload.message);

        Ok(upload)
    }

    pub async fn query(&self, question: &str) -> Result<QueryResponse> {
        let request_id = Uuid::new_v4();
        log::info!("[{}] POST /query ({} chars)", request_id, question.chars().count());

        let request = QueryRequest {
            question: question.to_string(),
        };

        let response = self.client
            .post(self.endpoint("/query"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let answer: QueryResponse = self.parse_response(request_id, response).await?;
        if let Some(echoed) = &answer.question {
            log::debug!("[{}] backend answered question: {}", request_id, echoed);
        }

        Ok(answer)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let request_id = Uuid::new_v4();
        log::info!("[{}] GET /", request_id);

        let response = self.client
            .get(self.endpoint("/"))
            .send()
            .await?;

        self.parse_response(request_id, response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse_response<T: DeserializeOwned>(&self, request_id: Uuid, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("Backend error ({}): {}", status, body));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("[{}] malformed backend response: {}", request_id, body))
    }
}
