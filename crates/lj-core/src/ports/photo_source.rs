use std::path::Path;

use async_trait::async_trait;

use crate::journey::PhotoRef;
use crate::ports::PhotoSourceError;

/// Resolves a user-chosen photo into bytes plus mime type.
#[async_trait]
pub trait PhotoSourcePort: Send + Sync {
    async fn load(&self, path: &Path) -> Result<PhotoRef, PhotoSourceError>;
}
