// src/infrastructure/downloads.rs
//
// Download Workspace
//
// Saves binary payloads (resumes, exports) into one directory.
// Existing files are never overwritten; a numbered name is chosen instead.

use std::path::{Path, PathBuf};

use log::info;

use crate::domain::BinaryPayload;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct DownloadWorkspace {
    root: PathBuf,
}

impl DownloadWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the payload under the workspace and return where it landed.
    pub async fn save(&self, payload: &BinaryPayload) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        let name = sanitize_file_name(&payload.file_name);
        let target = self.free_path(&name).await?;
        tokio::fs::write(&target, &payload.data).await?;

        info!(
            "saved {} ({} bytes) to {}",
            payload.file_name,
            payload.data.len(),
            target.display()
        );
        Ok(target)
    }

    /// `name`, or `stem (n).ext` for the first n that is not taken.
    async fn free_path(&self, name: &str) -> AppResult<PathBuf> {
        let candidate = self.root.join(name);
        if !tokio::fs::try_exists(&candidate).await? {
            return Ok(candidate);
        }

        let (stem, ext) = match name.rfind('.') {
            Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
            _ => (name, ""),
        };

        let mut n = 1;
        loop {
            let candidate = self.root.join(format!("{} ({}){}", stem, n, ext));
            if !tokio::fs::try_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

/// Keep only the final path component and drop characters that are not
/// portable in file names.
fn sanitize_file_name(raw: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = last
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}
