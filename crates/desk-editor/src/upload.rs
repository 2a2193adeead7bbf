//! Batch image upload: files → embedded `data:` URLs.
//!
//! Each accepted file is read by its own task in a `JoinSet`. The batch only
//! resolves once every read finished, in the original file order; the first
//! failure aborts the remaining reads and drops the whole batch.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tokio::task::{JoinHandle, JoinSet};

use desk_core::entities::ArticleImage;

use crate::error::UploadError;

/// MIME type for an image file, by extension. `None` for non-images.
#[must_use]
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// An in-flight upload batch.
///
/// Dropping the handle (the uploader going out of scope) or calling
/// [`ImageUpload::cancel`] aborts every pending read.
#[derive(Debug)]
pub struct ImageUpload {
    handle: JoinHandle<Result<Vec<ArticleImage>, UploadError>>,
    rejected: Vec<PathBuf>,
}

impl ImageUpload {
    /// Start reading `paths`. Non-image files are skipped and reported by
    /// [`ImageUpload::rejected`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for path in paths {
            match image_mime(&path) {
                Some(mime) => accepted.push((path, mime)),
                None => {
                    tracing::warn!(path = %path.display(), "skipping non-image file");
                    rejected.push(path);
                }
            }
        }

        Self {
            handle: tokio::spawn(read_batch(accepted)),
            rejected,
        }
    }

    /// Files that were not accepted as images.
    #[must_use]
    pub fn rejected(&self) -> &[PathBuf] {
        &self.rejected
    }

    /// Abort the batch. A later [`ImageUpload::wait`] yields `UploadError::Cancelled`.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` if any file failed to read or the upload was cancelled.
    pub async fn wait(mut self) -> Result<Vec<ArticleImage>, UploadError> {
        (&mut self.handle).await?
    }
}

impl Drop for ImageUpload {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_batch(
    files: Vec<(PathBuf, &'static str)>,
) -> Result<Vec<ArticleImage>, UploadError> {
    let total = files.len();
    let mut set = JoinSet::new();
    for (idx, (path, mime)) in files.into_iter().enumerate() {
        set.spawn(async move { read_image(path, mime).await.map(|image| (idx, image)) });
    }

    let mut slots: Vec<Option<ArticleImage>> = vec![None; total];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(Ok((idx, image))) => slots[idx] = Some(image),
            Ok(Err(error)) => {
                set.abort_all();
                tracing::warn!(%error, "image batch abandoned");
                return Err(error);
            }
            Err(join_error) => {
                set.abort_all();
                return Err(join_error.into());
            }
        }
    }

    tracing::debug!(count = total, "image batch read");
    Ok(slots.into_iter().flatten().collect())
}

async fn read_image(path: PathBuf, mime: &'static str) -> Result<ArticleImage, UploadError> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(source) => return Err(UploadError::Read { path, source }),
    };
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    Ok(ArticleImage {
        name,
        size_bytes: bytes.len() as u64,
        data_url: format!("data:{mime};base64,{}", STANDARD.encode(&bytes)),
    })
}
