//! Upload storage
//!
//! Stores uploaded files under `<root>/<YYYY>/<MM>/<DD>/` with a random
//! 16-letter name that keeps the original extension. The date is taken in
//! the configured timezone so partitions match the operators' calendar.

use crate::config::HelpersConfig;
use crate::error::Result;
use crate::fs::extension_with_dot;
use crate::random::random_string;
use crate::timeutil::now_in_timezone;
use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Length of the random part of a stored file name.
pub const STORED_NAME_LEN: usize = 16;

/// A file received from a client: the name it was sent with and its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Read a local file as if it had been uploaded under its own name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, content })
    }
}

/// Date-partitioned upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    offset: FixedOffset,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, offset: FixedOffset) -> Self {
        Self {
            root: root.into(),
            offset,
        }
    }

    pub fn from_config(config: &HelpersConfig) -> Result<Self> {
        Ok(Self::new(config.upload_dir.clone(), config.utc_offset()?))
    }

    /// The partition directory for a moment, in this store's timezone.
    pub fn dir_for<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> PathBuf {
        let local = at.with_timezone(&self.offset);
        self.root
            .join(format!("{:04}", local.year()))
            .join(format!("{:02}", local.month()))
            .join(format!("{:02}", local.day()))
    }

    /// Store `file` under today's partition and return the stored path.
    pub async fn save(&self, file: &UploadedFile) -> Result<PathBuf> {
        self.save_at(file, &now_in_timezone(self.offset)).await
    }

    /// Store `file` under the partition for `at`.
    pub async fn save_at<Tz: TimeZone>(
        &self,
        file: &UploadedFile,
        at: &DateTime<Tz>,
    ) -> Result<PathBuf> {
        let dir = self.dir_for(at);
        if !fs::try_exists(&dir).await? {
            debug!("Creating upload directory {}", dir.display());
            fs::create_dir_all(&dir).await?;
        }

        let path = dir.join(stored_name_for(&file.file_name));
        fs::write(&path, &file.content).await?;

        info!(
            "Stored upload {:?} ({} bytes) at {}",
            file.file_name,
            file.content.len(),
            path.display()
        );
        Ok(path)
    }
}

/// A fresh random file name carrying the extension of `original`.
pub fn stored_name_for(original: &str) -> String {
    format!("{}{}", random_string(STORED_NAME_LEN), extension_with_dot(original))
}
