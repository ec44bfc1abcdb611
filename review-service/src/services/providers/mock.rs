//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

enum MockBehavior {
    Reply(String),
    EchoPrompt,
    Fail(String),
    Disabled,
}

/// Test double for [`TextProvider`] with scriptable behavior.
pub struct MockTextProvider {
    behavior: MockBehavior,
}

impl MockTextProvider {
    /// Always answer with the given canned text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
        }
    }

    /// Answer with the prompt itself, so tests can observe prompt
    /// construction end to end.
    pub fn echoing() -> Self {
        Self {
            behavior: MockBehavior::EchoPrompt,
        }
    }

    /// Always fail with the given API error message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(message.into()),
        }
    }

    /// Behave like a provider whose credentials were never set.
    pub fn unconfigured() -> Self {
        Self {
            behavior: MockBehavior::Disabled,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let text = match &self.behavior {
            MockBehavior::Reply(text) => text.clone(),
            MockBehavior::EchoPrompt => prompt.to_string(),
            MockBehavior::Fail(message) => {
                return Err(ProviderError::ApiError(message.clone()));
            }
            MockBehavior::Disabled => {
                return Err(ProviderError::NotConfigured(
                    "Mock text provider not enabled".to_string(),
                ));
            }
        };

        Ok(ProviderResponse {
            text: Some(text),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
            MockBehavior::Disabled => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
