//! Field Parser: turns resume text into `ParsedFields`.
//!
//! The LLM sits behind the `FieldExtractor` trait. `FieldParser::parse` never fails:
//! any extractor error falls back to the heuristic, and a heuristic that finds nothing
//! falls back to empty fields.

pub mod handlers;
pub mod heuristic;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ParsedFields;
use crate::parsing::heuristic::heuristic_fields;
use crate::parsing::prompts::{resume_parse_prompt, resume_parse_system};

/// Source of structured resume fields. Implement this to swap the upstream service.
///
/// Carried in `AppState` (through `FieldParser`) as `Arc<dyn FieldExtractor>`.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    async fn extract_fields(
        &self,
        text: &str,
        correlation_id: &str,
    ) -> Result<ParsedFields, LlmError>;
}

/// Claude-backed extractor.
pub struct LlmFieldExtractor(pub LlmClient);

#[async_trait]
impl FieldExtractor for LlmFieldExtractor {
    async fn extract_fields(
        &self,
        text: &str,
        correlation_id: &str,
    ) -> Result<ParsedFields, LlmError> {
        self.0
            .call_json(
                &resume_parse_prompt(text),
                &resume_parse_system(),
                correlation_id,
            )
            .await
    }
}

/// Which tier produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSource {
    Llm,
    Heuristic,
    Empty,
}

#[derive(Clone)]
pub struct FieldParser {
    extractor: Arc<dyn FieldExtractor>,
    fallback_skills: Arc<[String]>,
}

impl FieldParser {
    pub fn new(extractor: Arc<dyn FieldExtractor>, fallback_skills: Vec<String>) -> Self {
        Self {
            extractor,
            fallback_skills: fallback_skills.into(),
        }
    }

    /// Parses resume text into fields. Always returns a well-formed result.
    pub async fn parse(&self, text: &str) -> ParsedFields {
        self.parse_with_source(text).await.0
    }

    pub async fn parse_with_source(&self, text: &str) -> (ParsedFields, ParseSource) {
        let correlation_id = format!("resume_parse_{}", Uuid::new_v4());
        let span = info_span!("resume_parse", correlation_id = %correlation_id);

        async {
            match self.extractor.extract_fields(text, &correlation_id).await {
                Ok(fields) => {
                    info!("Resume parsed by LLM");
                    return (fields, ParseSource::Llm);
                }
                Err(e) => warn!("LLM resume parsing failed, using heuristic fallback: {e}"),
            }

            match heuristic_fields(text, &self.fallback_skills) {
                Some(fields) => {
                    if !self.fallback_skills.is_empty() {
                        warn!(
                            "Heuristic fallback inserted placeholder skills: {:?}",
                            self.fallback_skills
                        );
                    }
                    (fields, ParseSource::Heuristic)
                }
                None => {
                    warn!("Heuristic fallback found no content, returning empty fields");
                    (ParsedFields::default(), ParseSource::Empty)
                }
            }
        }
        .instrument(span)
        .await
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::{RawReplyExtractor, ScriptedExtractor};
    use super::*;

    const RESUME: &str = "John Doe\njohn@x.com\n+1 (555) 123-4567\nRust, Go";

    fn skills() -> Vec<String> {
        vec!["JavaScript".into(), "Python".into(), "React".into()]
    }

    #[tokio::test]
    async fn test_llm_result_is_returned_as_is() {
        let fields = ParsedFields {
            name: "John Doe".into(),
            skills: vec!["Rust".into()],
            ..ParsedFields::default()
        };
        let extractor = Arc::new(ScriptedExtractor::ok(fields.clone()));
        let parser = FieldParser::new(extractor.clone(), skills());

        let (parsed, source) = parser.parse_with_source(RESUME).await;
        assert_eq!(parsed, fields);
        assert_eq!(source, ParseSource::Llm);
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_heuristic() {
        let extractor = Arc::new(ScriptedExtractor::failing("overloaded"));
        let parser = FieldParser::new(extractor.clone(), skills());

        let (parsed, source) = parser.parse_with_source(RESUME).await;
        assert_eq!(source, ParseSource::Heuristic);
        assert_eq!(parsed.name, "John Doe");
        assert_eq!(parsed.email, "john@x.com");
        assert_eq!(parsed.phone, "+1 (555) 123-4567");
        assert_eq!(parsed.skills, skills());
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_text_with_failing_upstream_is_empty() {
        let parser = FieldParser::new(Arc::new(ScriptedExtractor::failing("down")), skills());

        let (parsed, source) = parser.parse_with_source("   \n  ").await;
        assert_eq!(source, ParseSource::Empty);
        assert_eq!(parsed, ParsedFields::default());
    }

    #[tokio::test]
    async fn test_fenced_reply_with_unknown_keys_is_accepted() {
        let reply = "```json\n{\"name\": \"John Doe\", \"email\": \"john@x.com\", \"hobbies\": [\"chess\"]}\n```";
        let parser = FieldParser::new(Arc::new(RawReplyExtractor(reply)), skills());

        let (parsed, source) = parser.parse_with_source(RESUME).await;
        assert_eq!(source, ParseSource::Llm);
        assert_eq!(parsed.name, "John Doe");
        assert!(parsed.skills.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_reply_falls_back() {
        let parser = FieldParser::new(
            Arc::new(RawReplyExtractor("I could not read that resume.")),
            skills(),
        );

        let (parsed, source) = parser.parse_with_source(RESUME).await;
        assert_eq!(source, ParseSource::Heuristic);
        assert_eq!(parsed.name, "John Doe");
    }

    #[tokio::test]
    async fn test_schema_mismatch_falls_back() {
        let parser = FieldParser::new(
            Arc::new(RawReplyExtractor(r#"{"name": "John", "skills": "Rust"}"#)),
            Vec::new(),
        );

        let (parsed, source) = parser.parse_with_source(RESUME).await;
        assert_eq!(source, ParseSource::Heuristic);
        assert!(parsed.skills.is_empty());
    }
}
