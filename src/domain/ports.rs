use crate::i18n::Lang;
use crate::utils::error::Result;
use std::time::Duration;

/// Byte-level persistence port. The palette library never touches the
/// filesystem directly; it goes through this so tests can swap the backend.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolved application settings, injected into the client and the library.
pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn library_path(&self) -> &str;
    fn status_timeout(&self) -> Duration;
    fn lookup_timeout(&self) -> Duration;
    fn language(&self) -> Lang;
}
