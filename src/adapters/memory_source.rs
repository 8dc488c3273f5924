use crate::core::MessageSource;
use crate::utils::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageSource {
    templates: HashMap<String, String>,
}

impl InMemoryMessageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, language: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(language, template);
        self
    }

    pub fn insert(&mut self, language: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(language.into(), template.into());
    }
}

#[async_trait]
impl MessageSource for InMemoryMessageSource {
    async fn read(&self, language: &str) -> Result<String> {
        self.templates
            .get(language)
            .cloned()
            .ok_or_else(|| OrderError::TemplateNotFound {
                language: language.to_string(),
            })
    }
}
