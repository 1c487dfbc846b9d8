//! Asset Store Tests
//!
//! Validates the on-disk lifecycle of staged uploads against a temporary directory.
//!
//! ## Test Scopes
//! - **Staging**: Generated names are unique, carry the original extension, and the
//!   written file holds the uploaded bytes.
//! - **Discard**: Removal is idempotent; a missing file never surfaces as an error.

#[cfg(test)]
mod tests {
    use crate::assets::store::{AssetStore, FileAssetStore};
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> FileAssetStore {
        FileAssetStore::open(dir.path()).unwrap()
    }

    // ============================================================
    // STAGING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_stage_writes_file_with_contents() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let name = store.stage(b"photo-bytes", "drill.jpg").await.unwrap();

        assert!(store.exists(&name).await);
        let bytes = store.read(&name).await.unwrap();
        assert_eq!(bytes, b"photo-bytes");
    }

    #[tokio::test]
    async fn test_stage_preserves_extension() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let name = store.stage(b"data", "picture.png").await.unwrap();
        assert!(name.ends_with(".png"), "Generated name: {}", name);
    }

    #[tokio::test]
    async fn test_stage_without_extension() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let name = store.stage(b"data", "upload").await.unwrap();
        assert!(!name.contains('.'), "Generated name: {}", name);
        assert!(store.exists(&name).await);
    }

    #[tokio::test]
    async fn test_stage_generates_distinct_names() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let mut names = std::collections::HashSet::new();
        for _ in 0..20 {
            let name = store.stage(b"x", "a.jpg").await.unwrap();
            assert!(names.insert(name), "Staged name collided");
        }
    }

    #[tokio::test]
    async fn test_stage_failure_propagates_and_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache");
        let store = FileAssetStore::open(&cache).unwrap();

        // Pull the directory out from under the store so the write fails.
        std::fs::remove_dir_all(&cache).unwrap();

        let err = store.stage(b"bytes", "a.jpg").await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

        // Recreate the directory; nothing from the failed stage may be in it.
        std::fs::create_dir_all(&cache).unwrap();
        assert_eq!(std::fs::read_dir(&cache).unwrap().count(), 0);
    }

    // ============================================================
    // DISCARD TESTS
    // ============================================================

    #[tokio::test]
    async fn test_discard_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let name = store.stage(b"bytes", "a.jpg").await.unwrap();
        store.discard(&name).await.unwrap();

        assert!(!store.exists(&name).await);
    }

    #[tokio::test]
    async fn test_discard_missing_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        // Never staged, must still succeed.
        store.discard("1700000000-deadbeef.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_exists_is_false_for_unknown_name() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(!store.exists("unknown.jpg").await);
    }

    #[tokio::test]
    async fn test_open_reuses_existing_directory() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let name = store.stage(b"bytes", "a.jpg").await.unwrap();

        // Re-opening over the same path must see the same files.
        let reopened = open_store(&dir);
        assert!(reopened.exists(&name).await);
    }
}
