use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use async_trait::async_trait;

/// Capability trait for the binary asset layer.
///
/// The repository talks to the store exclusively through this trait so that
/// tests can substitute an in-memory fake for the real directory-backed store.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persists uploaded bytes under a newly generated unique name and returns it.
    ///
    /// The name is derived from the current time, a random suffix, and the original
    /// file's extension, so it never collides with an existing asset. A write failure
    /// must leave no partial file behind.
    async fn stage(&self, bytes: &[u8], original_name: &str) -> io::Result<String>;

    /// Deletes the named asset. A missing file is a no-op, not an error.
    async fn discard(&self, name: &str) -> io::Result<()>;

    /// Existence check. Never fails; any filesystem error reads as absent.
    async fn exists(&self, name: &str) -> bool;

    /// Returns the full contents of the named asset.
    async fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Directory-backed asset store over the configured cache directory.
///
/// Asset names are opaque and stored flat; the mapping from item id to asset
/// name lives only in the repository's memory.
pub struct FileAssetStore {
    dir: PathBuf,
}

impl FileAssetStore {
    /// Resolves the cache directory, creating it if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let dir = path.as_ref().to_path_buf();
        if dir.is_dir() {
            tracing::info!("Using existing cache directory: {}", dir.display());
        } else {
            std::fs::create_dir_all(&dir)?;
            tracing::info!("Created cache directory: {}", dir.display());
        }
        Ok(Self { dir })
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn generate_name(original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        format!("{}-{:08x}{}", now_ms(), rand::random::<u32>(), ext)
    }
}

#[async_trait]
impl AssetStore for FileAssetStore {
    async fn stage(&self, bytes: &[u8], original_name: &str) -> io::Result<String> {
        let name = Self::generate_name(original_name);
        let path = self.asset_path(&name);

        if let Err(err) = tokio::fs::write(&path, bytes).await {
            // A failed write may leave a truncated file; remove it before the
            // error propagates so the directory holds no orphan.
            if let Err(cleanup_err) = tokio::fs::remove_file(&path).await {
                if cleanup_err.kind() != io::ErrorKind::NotFound {
                    tracing::error!(
                        "Failed to clean up partial asset {}: {}",
                        name,
                        cleanup_err
                    );
                }
            }
            return Err(err);
        }

        tracing::debug!("Staged asset {} ({} bytes)", name, bytes.len());
        Ok(name)
    }

    async fn discard(&self, name: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.asset_path(name)).await {
            Ok(()) => {
                tracing::debug!("Discarded asset {}", name);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.asset_path(name))
            .await
            .unwrap_or(false)
    }

    async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.asset_path(name)).await
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
