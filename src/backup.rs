//! GitHub vault backup via the contents API.
//!
//! The whole vault file is uploaded with `PUT /repos/{repo}/contents/{file}`.
//! A prior GET decides between create and update: when the file already
//! exists its `sha` must ride along as the prior-version token, otherwise
//! the PUT creates it.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::settings::GithubSettings;

pub const GITHUB_API: &str = "https://api.github.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    Created,
    Updated,
}

#[derive(Serialize)]
struct UploadPayload<'a> {
    branch: &'a str,
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

#[derive(Deserialize)]
struct ContentInfo {
    sha: String,
}

pub struct GithubClient {
    base: String,
    token: String,
    repo: String,
    branch: String,
    http: reqwest::blocking::Client,
}

impl GithubClient {
    /// Build a client from the backup settings. Token, repo and branch must
    /// all be present before any network I/O happens.
    pub fn new(cfg: &GithubSettings) -> Result<Self> {
        if cfg.token.is_empty() || cfg.repo.is_empty() || cfg.branch.is_empty() {
            return Err(AppError::Config(
                "GitHub backup needs token, repo and branch".into(),
            ));
        }
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("polypass/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base: GITHUB_API.to_string(),
            token: cfg.token.clone(),
            repo: cfg.repo.clone(),
            branch: cfg.branch.clone(),
            http,
        })
    }

    /// Point the client at a different API base (tests use a mock server).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Upload `file` to the repository under its file name, with
    /// `message` as the commit message.
    pub fn upload(&self, file: &Path, message: &str) -> Result<BackupOutcome> {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::Config("vault path has no file name".into()))?;
        let content = BASE64.encode(std::fs::read(file)?);
        let url = format!("{}/repos/{}/contents/{}", self.base, self.repo, name);

        let sha = self.existing_sha(&url)?;
        let updating = sha.is_some();
        log::debug!(
            "uploading {name} to {}@{} ({})",
            self.repo,
            self.branch,
            if updating { "update" } else { "create" }
        );

        let payload = UploadPayload {
            branch: &self.branch,
            message,
            content,
            sha,
        };
        let resp = self
            .http
            .put(&url)
            .header("Authorization", format!("token {}", self.token))
            .json(&payload)
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::Backup {
                status: resp.status().as_u16(),
            });
        }
        Ok(if updating {
            BackupOutcome::Updated
        } else {
            BackupOutcome::Created
        })
    }

    /// `sha` of the file already on the branch, if any. Any non-200 answer
    /// is treated as "not there yet" and routes the PUT through create.
    fn existing_sha(&self, url: &str) -> Result<Option<String>> {
        let resp = self
            .http
            .get(url)
            .header("Authorization", format!("token {}", self.token))
            .send()?;
        if resp.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }
        let info: ContentInfo = resp.json()?;
        Ok(Some(info.sha))
    }
}
