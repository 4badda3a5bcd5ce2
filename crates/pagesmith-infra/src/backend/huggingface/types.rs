//! Hugging Face Inference API wire types.

use serde::{Deserialize, Serialize};

/// Body for a text-generation call.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest<'a> {
    pub inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<TextGenerationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<InferenceOptions>,
}

/// Generation parameters understood by text-generation models.
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationParameters {
    pub max_new_tokens: u32,
    /// `false` asks for only the continuation, not the echoed prompt.
    pub return_full_text: bool,
}

/// Request options for the serverless Inference API.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceOptions {
    /// Block until a cold model is loaded instead of failing with 503.
    pub wait_for_model: bool,
}

/// One element of the result list.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// The endpoint answers with a list, but some deployments answer with a
/// single object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    List(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl TextGenerationResponse {
    /// Text of the first result, if any.
    pub fn into_first_text(self) -> Option<String> {
        match self {
            TextGenerationResponse::List(list) => {
                list.into_iter().next().map(|g| g.generated_text)
            }
            TextGenerationResponse::Single(g) => Some(g.generated_text),
        }
    }
}
