use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;

use crate::error::{Error, Result};

/// Public URL prefix under which stored files are served back.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Cv,
}

impl UploadKind {
    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Avatar => &["jpg", "jpeg", "png", "webp", "gif"],
            UploadKind::Cv => &["pdf", "doc", "docx", "txt", "rtf"],
        }
    }
}

#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writes the file under a generated name and returns its public path.
    pub async fn save(&self, kind: UploadKind, original_name: &str, data: &Bytes) -> Result<String> {
        if data.is_empty() {
            return Err(Error::BadRequest("Uploaded file is empty".into()));
        }
        let ext = extension_of(original_name);
        if !kind.allowed_extensions().contains(&ext.as_str()) {
            return Err(Error::BadRequest(format!("File type .{} is not allowed", ext)));
        }
        check_signature(&ext, data)?;

        fs::create_dir_all(&self.dir).await?;
        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), ext);
        let file_path = self.dir.join(&file_name);
        fs::write(&file_path, data).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", file_path.display(), e);
            Error::Internal(format!("Failed to save file: {}", e))
        })?;

        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

    /// Deletes a file stored by `save` when the request that uploaded it fails.
    pub async fn discard(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .map(|rest| rest.trim_start_matches('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
        else {
            return;
        };
        let file_path = self.dir.join(file_name);
        if let Err(e) = fs::remove_file(&file_path).await {
            tracing::warn!("Failed to remove orphan upload {}: {}", file_path.display(), e);
        }
    }
}

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

fn check_signature(ext: &str, data: &[u8]) -> Result<()> {
    let ok = match ext {
        "pdf" => data.starts_with(b"%PDF"),
        "jpg" | "jpeg" => data.starts_with(&[0xFF, 0xD8]),
        "png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
        "gif" => data.starts_with(b"GIF8"),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(Error::BadRequest(format!("Invalid .{} file content", ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_and_defaulted() {
        assert_eq!(extension_of("Resume.PDF"), "pdf");
        assert_eq!(extension_of("noext"), "bin");
    }

    #[test]
    fn signature_mismatch_is_rejected() {
        assert!(check_signature("pdf", b"%PDF-1.7").is_ok());
        assert!(check_signature("pdf", b"hello").is_err());
        assert!(check_signature("txt", b"anything").is_ok());
    }

    #[tokio::test]
    async fn saved_file_gets_public_path() {
        let dir = std::env::temp_dir().join(format!("crm-upload-test-{}", uuid::Uuid::new_v4()));
        let svc = UploadService::new(dir.clone());
        let path = svc
            .save(UploadKind::Cv, "cv.txt", &Bytes::from_static(b"experience"))
            .await
            .unwrap();
        assert!(path.starts_with("/uploads/"));
        assert!(path.ends_with(".txt"));
        let stored = dir.join(path.trim_start_matches("/uploads/"));
        assert_eq!(tokio::fs::read(stored).await.unwrap(), b"experience");
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn discarded_upload_is_gone() {
        let dir = std::env::temp_dir().join(format!("crm-upload-test-{}", uuid::Uuid::new_v4()));
        let svc = UploadService::new(dir.clone());
        let path = svc
            .save(UploadKind::Cv, "cv.txt", &Bytes::from_static(b"draft"))
            .await
            .unwrap();
        svc.discard(&path).await;
        let stored = dir.join(path.trim_start_matches("/uploads/"));
        assert!(!stored.exists());
        svc.discard("/uploads/../etc").await;
        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn avatar_rejects_documents() {
        let svc = UploadService::new(std::env::temp_dir());
        let err = svc
            .save(UploadKind::Avatar, "cv.pdf", &Bytes::from_static(b"%PDF"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
