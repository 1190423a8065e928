//! Inference provider trait and mock implementation.

use async_trait::async_trait;
use common::Setting;

use crate::error::{IntegrationError, Result};

/// Output of a single model invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Identifier of the model that produced the text.
    pub model: String,
    /// Generated text.
    pub text: String,
}

/// A text-generation backend.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// The model this provider invokes.
    fn model(&self) -> &Setting;

    /// Runs `prompt` through the model.
    async fn invoke(&self, prompt: &str) -> Result<Completion>;
}

/// Stand-in provider that renders a fixed template instead of calling a model.
#[derive(Debug, Clone, Default)]
pub struct MockInferenceProvider {
    model: Setting,
}

impl MockInferenceProvider {
    pub fn new(model: Setting) -> Self {
        Self { model }
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    fn model(&self) -> &Setting {
        &self.model
    }

    async fn invoke(&self, prompt: &str) -> Result<Completion> {
        let Setting::Configured(model) = &self.model else {
            return Err(IntegrationError::NotConfigured("Bedrock model"));
        };

        tracing::debug!(%model, prompt_len = prompt.len(), "rendering mock completion");

        Ok(Completion {
            model: model.clone(),
            text: format!("[Mock Response] Bedrock model ({model}) would process: \"{prompt}\""),
        })
    }
}
