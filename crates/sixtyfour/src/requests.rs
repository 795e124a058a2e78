//! Request payloads accepted from clients and forwarded upstream.
//!
//! Required fields are modelled as `Option` so the HTTP layer can reject a
//! missing field with a structured validation error instead of a bare
//! deserialization failure. Optional fields are omitted from the forwarded
//! body when absent, matching what a browser form would send.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `/enrich-company` and `/enrich-company-async`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichCompanyRequest {
    /// Company to enrich; the only required field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_company: Option<String>,
    /// Desired output structure. `struct` upstream, which is a Rust keyword.
    #[serde(rename = "struct", skip_serializing_if = "Option::is_none")]
    pub structure: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_people: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_focus_prompt: Option<String>,
}

/// Body for `/enrich-lead`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichLeadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_info: Option<Value>,
    #[serde(rename = "struct", skip_serializing_if = "Option::is_none")]
    pub structure: Option<Value>,
}

/// Body for `/find-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindEmailRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bruteforce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_company_emails: Option<bool>,
}

/// Body for `/find-phone`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindPhoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<Value>,
}

/// Body for `/qa-agent`.
///
/// The upstream contract for the optional context is provisional, so any
/// extra fields a client sends are forwarded untouched instead of dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAgentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_field_round_trips_under_its_wire_name() {
        let body: EnrichCompanyRequest = serde_json::from_value(serde_json::json!({
            "target_company": "Acme",
            "struct": {"industry": "string"},
        }))
        .unwrap();
        assert!(body.structure.is_some());

        let wire = serde_json::to_value(&body).unwrap();
        assert!(wire.get("struct").is_some());
        assert!(wire.get("structure").is_none());
    }

    #[test]
    fn absent_optional_fields_are_omitted_from_the_forwarded_body() {
        let body = FindEmailRequest {
            lead: Some(serde_json::json!({"name": "Jo"})),
            bruteforce: None,
            only_company_emails: None,
        };

        let wire = serde_json::to_value(&body).unwrap();
        assert_eq!(wire.as_object().unwrap().len(), 1);
    }

    #[test]
    fn qa_request_preserves_unknown_fields() {
        let body: QaAgentRequest = serde_json::from_value(serde_json::json!({
            "question": "What is X?",
            "session_id": "s-1",
        }))
        .unwrap();

        let wire = serde_json::to_value(&body).unwrap();
        assert_eq!(wire["session_id"], "s-1");
    }
}
