use std::io::{self, Write};

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::null_as_default;

pub const DEFAULT_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Model {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<Model>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ModelListing {
    Models(Vec<Model>),
    /// Any status other than 200; the body is kept verbatim and never parsed.
    Rejected { status: StatusCode, body: String },
}

#[derive(Error, Debug)]
pub enum ModelsError {
    #[error("error fetching models: {0}")]
    Request(#[source] reqwest::Error),

    #[error("error decoding response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Issues a single GET against the models endpoint. No retries.
pub async fn fetch_models(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
) -> Result<ModelListing, ModelsError> {
    let api_key = api_key.filter(|key| !key.is_empty());
    tracing::debug!(url, authenticated = api_key.is_some(), "requesting model listing");

    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await.map_err(ModelsError::Request)?;
    let status = response.status();
    tracing::debug!(%status, "model listing response");

    if status != StatusCode::OK {
        let body = response.text().await.map_err(ModelsError::Request)?;
        return Ok(ModelListing::Rejected { status, body });
    }

    let parsed: ModelsResponse = response.json().await.map_err(ModelsError::Decode)?;
    Ok(ModelListing::Models(parsed.data))
}

pub fn render(listing: &ModelListing, out: &mut impl Write) -> io::Result<()> {
    match listing {
        ModelListing::Rejected { status, body } => {
            writeln!(out, "Error: received status code {}", status.as_u16())?;
            writeln!(out, "{body}")?;
        }
        ModelListing::Models(models) => {
            writeln!(out, "Available OpenRouter Models:")?;
            writeln!(out, "===========================")?;
            for model in models {
                writeln!(out, "ID: {}", model.id)?;
                writeln!(out, "Name: {}", model.name)?;
                writeln!(out, "Description: {}", model.description)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

pub async fn list_models(url: &str, api_key: Option<&str>) -> anyhow::Result<()> {
    let client = Client::new();
    let listing = fetch_models(&client, url, api_key).await?;

    if let ModelListing::Rejected { status, .. } = &listing {
        tracing::warn!(%status, url, "model listing rejected");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&listing, &mut out).context("failed to write model listing")?;
    out.flush().context("failed to write model listing")?;
    Ok(())
}
