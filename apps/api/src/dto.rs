//! API request and response payloads.

use serde::{Deserialize, Serialize};
use tahniyat_domain::GreetingOptions;

/// Inbound body of the generate endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateGreetingRequest {
    /// The user prompt. An absent field deserializes to the empty string so
    /// the service's own validation answers with 400.
    #[serde(default)]
    pub prompt: String,
    /// Optional greeting options; defaults apply when absent.
    #[serde(default)]
    pub options: Option<GreetingOptions>,
}

/// Successful greeting response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    /// The generated greeting text.
    pub greeting: String,
    /// Always true; the text is pre-formatted for display.
    pub formatted_greeting: bool,
    /// Present only when the topic lock was triggered post-generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub redis: HealthDependencyStatus,
}

/// One runtime dependency health status.
#[derive(Debug, Serialize)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{GenerateGreetingRequest, GreetingResponse};

    #[test]
    fn request_defaults_options_when_absent() {
        let parsed: Result<GenerateGreetingRequest, _> =
            serde_json::from_str(r#"{"prompt":"Generate an Eid greeting"}"#);
        let Ok(request) = parsed else {
            panic!("expected valid request");
        };
        assert!(request.options.is_none());
    }

    #[test]
    fn request_without_prompt_deserializes_to_empty_string() {
        let parsed: Result<GenerateGreetingRequest, _> = serde_json::from_str("{}");
        let Ok(request) = parsed else {
            panic!("expected a body without prompt to deserialize");
        };
        assert_eq!(request.prompt, "");
    }

    #[test]
    fn request_accepts_null_options() {
        let parsed: Result<GenerateGreetingRequest, _> =
            serde_json::from_str(r#"{"prompt":"Generate an Eid greeting","options":null}"#);
        let Ok(request) = parsed else {
            panic!("expected valid request");
        };
        assert!(request.options.is_none());
    }

    #[test]
    fn warning_is_omitted_from_the_wire_when_absent() {
        let response = GreetingResponse {
            greeting: "Eid Mubarak!".to_owned(),
            formatted_greeting: true,
            warning: None,
        };
        let Ok(json) = serde_json::to_value(&response) else {
            panic!("serialization failed");
        };
        assert_eq!(json["greeting"], "Eid Mubarak!");
        assert_eq!(json["formattedGreeting"], true);
        assert!(json.get("warning").is_none());
    }

    #[test]
    fn warning_is_present_on_the_topic_lock_path() {
        let response = GreetingResponse {
            greeting: "refusal text".to_owned(),
            formatted_greeting: true,
            warning: Some("temporarily blocked".to_owned()),
        };
        let Ok(json) = serde_json::to_value(&response) else {
            panic!("serialization failed");
        };
        assert_eq!(json["warning"], "temporarily blocked");
    }
}
