use crate::utils::error::Result;
use async_trait::async_trait;

/// Provides raw template text keyed by language code.
///
/// Implementations return [`OrderError::TemplateNotFound`] when nothing is
/// registered for the requested language.
///
/// [`OrderError::TemplateNotFound`]: crate::utils::error::OrderError::TemplateNotFound
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn read(&self, language: &str) -> Result<String>;
}

#[async_trait]
impl<T: MessageSource + ?Sized> MessageSource for std::sync::Arc<T> {
    async fn read(&self, language: &str) -> Result<String> {
        (**self).read(language).await
    }
}

#[async_trait]
impl<T: MessageSource + ?Sized> MessageSource for Box<T> {
    async fn read(&self, language: &str) -> Result<String> {
        (**self).read(language).await
    }
}
