//! Content-delivery port for media binaries.
//!
//! The backend persists only metadata; the binary itself is handed to an
//! external CDN which stores it and issues an opaque URL. The default
//! adapter keeps blobs in memory under a configured public base; a real
//! deployment would swap in a presigning client behind the same port.
//!
//! The `RwLock::unwrap()` calls follow the same reasoning as [`crate::memory`]:
//! poisoning only occurs after a panic under the lock, an unrecoverable state.

use async_trait::async_trait;
use kiruna_core::error::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Port for external binary storage
#[async_trait]
pub trait ContentDelivery: Send + Sync {
    /// Hand off an upload's bytes and obtain an opaque URL for them.
    /// Called before metadata is persisted so a failed handoff never
    /// leaves a dangling record.
    async fn store(&self, filename: &str, mimetype: &str, content: &[u8]) -> Result<String>;
}

/// CDN adapter serving stored blobs under a fixed public base
#[derive(Debug, Clone)]
pub struct StaticCdn {
    base_url: String,
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl StaticCdn {
    /// Create an adapter for the given base URL (no trailing slash required)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, blobs: Arc::default() }
    }

    /// Retrieve the content stored under a previously issued URL
    pub fn content(&self, url: &str) -> Option<Vec<u8>> {
        self.blobs.read().unwrap().get(url).cloned()
    }
}

#[async_trait]
impl ContentDelivery for StaticCdn {
    async fn store(&self, filename: &str, _mimetype: &str, content: &[u8]) -> Result<String> {
        // One path segment per upload keeps equal filenames from colliding.
        let key = Uuid::new_v4();
        let safe_name: String = filename
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        let url = format!("{}/{}/{}", self.base_url, key, safe_name);
        self.blobs.write().unwrap().insert(url.clone(), content.to_vec());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_urls_are_unique_per_upload() {
        let cdn = StaticCdn::new("https://cdn.kiruna.example/");
        let first = cdn.store("plan.pdf", "application/pdf", b"one").await.unwrap();
        let second = cdn.store("plan.pdf", "application/pdf", b"two").await.unwrap();

        assert!(first.starts_with("https://cdn.kiruna.example/"));
        assert!(first.ends_with("/plan.pdf"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn stored_content_is_retrievable_under_the_issued_url() {
        let cdn = StaticCdn::new("https://cdn.kiruna.example");
        let url = cdn.store("plan.pdf", "application/pdf", b"%PDF-1.7 body").await.unwrap();

        assert_eq!(cdn.content(&url).as_deref(), Some(b"%PDF-1.7 body".as_ref()));
        assert!(cdn.content("https://cdn.kiruna.example/absent/x.pdf").is_none());
    }

    #[tokio::test]
    async fn filenames_are_sanitized() {
        let cdn = StaticCdn::new("https://cdn.kiruna.example");
        let url = cdn.store("new plan/v2.pdf", "application/pdf", b"x").await.unwrap();
        assert!(url.ends_with("/new_plan_v2.pdf"));
    }
}
