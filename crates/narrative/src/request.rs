//! Request payload for the narrative collaborator.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Model the demo asks the local generator to run.
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// The one bounded wait in the system: how long a caller should give the
/// narrative collaborator before falling back to the deterministic summary.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Sampling options sent with every narrative request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for NarrativeOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 300,
        }
    }
}

/// Wire payload for the narrative collaborator's generate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: NarrativeOptions,
}

impl NarrativeRequest {
    pub fn new(data: &Value, context: &str) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: build_prompt(data, context),
            stream: false,
            options: NarrativeOptions::default(),
        }
    }
}

/// Reply shape from the generate endpoint; only `response` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NarrativeResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Build the instruction prompt wrapped around the raw JSON payload.
pub fn build_prompt(data: &Value, context: &str) -> String {
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    format!(
        "You are a helpful assistant that converts technical database results into clear, human-readable summaries.\n\
         \n\
         Context: {context}\n\
         \n\
         Raw Data:\n\
         {pretty}\n\
         \n\
         Instructions:\n\
         1. Create a clear, conversational summary of this data\n\
         2. Focus on the key information that would be useful to a healthcare professional\n\
         3. Use natural language, not technical jargon\n\
         4. If there are multiple records, summarize the key patterns or highlights\n\
         5. If it's authorization data, explain what access was granted or denied and why\n\
         6. Keep it concise but informative\n\
         7. Use bullet points or short paragraphs for readability\n\
         \n\
         Generate a human-readable narrative:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_model_and_options_defaults() {
        let request = NarrativeRequest::new(&json!({"data": []}), "patient data access");
        assert_eq!(request.model, DEFAULT_MODEL);
        assert!(!request.stream);
        assert_eq!(request.options, NarrativeOptions::default());
        assert!(request.prompt.contains("Context: patient data access"));
        assert!(request.prompt.contains("\"data\": []"));
    }

    #[test]
    fn payload_serializes_with_nested_options() {
        let request = NarrativeRequest::new(&json!({}), "database query");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["max_tokens"], 300);
    }

    #[test]
    fn response_tolerates_missing_field() {
        let reply: NarrativeResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.response.is_none());
    }
}
