use crate::core::MessageSource;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::validate_language_code;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const TEMPLATE_EXTENSION: &str = "txt";

/// Reads `<base_path>/<language>.txt`.
#[derive(Debug, Clone)]
pub struct FileMessageSource {
    base_path: PathBuf,
}

impl FileMessageSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn template_path(&self, language: &str) -> PathBuf {
        self.base_path
            .join(language)
            .with_extension(TEMPLATE_EXTENSION)
    }
}

#[async_trait]
impl MessageSource for FileMessageSource {
    async fn read(&self, language: &str) -> Result<String> {
        // A code that cannot name a file inside the directory has no template.
        if validate_language_code(language).is_err() {
            return Err(OrderError::TemplateNotFound {
                language: language.to_string(),
            });
        }

        let full_path = self.template_path(language);
        tracing::debug!("Loading template from {}", full_path.display());

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OrderError::TemplateNotFound {
                    language: language.to_string(),
                })
            }
            Err(e) => return Err(OrderError::Io(e)),
        };

        Ok(strip_line_ending(content))
    }
}

fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}
