//! Amazon Transcribe result documents.
//!
//! A finished transcription job produces a JSON document like:
//!
//! ```text
//! {
//!   "jobName": "...", "accountId": "...", "status": "COMPLETED",
//!   "results": {
//!     "transcripts": [{ "transcript": "Adicionar duas dúzias de ovos." }],
//!     "items": [{ "type": "pronunciation", "start_time": "0.0", "end_time": "0.6",
//!                 "alternatives": [{ "confidence": "0.99", "content": "Adicionar" }] }, ...]
//!   }
//! }
//! ```
//!
//! Only `results.transcripts` feeds the parser; item confidences are exposed
//! for callers that want to flag low-quality audio.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const STATUS_COMPLETED: &str = "COMPLETED";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeDocument {
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    /// Job status; absent in documents written straight from the results.
    #[serde(default)]
    pub status: Option<String>,
    pub results: Results,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub transcripts: Vec<Transcript>,
    #[serde(default)]
    pub items: Vec<TranscribeItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    pub transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeItem {
    /// `pronunciation` or `punctuation`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    /// Transcribe reports confidences as decimal strings.
    pub confidence: String,
    pub content: String,
}

impl TranscribeDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading transcribe document");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The transcript text, all segments joined with a single space.
    pub fn transcript(&self) -> Result<String> {
        if let Some(status) = &self.status {
            if status != STATUS_COMPLETED {
                return Err(Error::JobNotCompleted(status.clone()));
            }
        }

        let text = self
            .results
            .transcripts
            .iter()
            .map(|t| t.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            return Err(Error::EmptyTranscript);
        }
        Ok(text)
    }

    /// Mean confidence of the best alternative of each pronounced word.
    pub fn average_confidence(&self) -> Option<f64> {
        let confidences: Vec<f64> = self
            .results
            .items
            .iter()
            .filter(|item| item.kind == "pronunciation")
            .filter_map(|item| item.alternatives.first())
            .filter_map(|alt| alt.confidence.parse::<f64>().ok())
            .collect();

        if confidences.is_empty() {
            return None;
        }
        Some(confidences.iter().sum::<f64>() / confidences.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "jobName": "f3b1c2d4",
        "accountId": "123456789012",
        "status": "COMPLETED",
        "results": {
            "transcripts": [{"transcript": "Adicionar duas dúzias de ovos."}],
            "items": [
                {"type": "pronunciation", "start_time": "0.0", "end_time": "0.6",
                 "alternatives": [{"confidence": "0.9", "content": "Adicionar"}]},
                {"type": "pronunciation", "start_time": "0.6", "end_time": "0.9",
                 "alternatives": [{"confidence": "0.7", "content": "duas"}]},
                {"type": "punctuation",
                 "alternatives": [{"confidence": "0.0", "content": "."}]}
            ]
        }
    }"#;

    #[test]
    fn reads_completed_document() {
        let doc = TranscribeDocument::from_json(DOCUMENT).unwrap();
        assert_eq!(doc.job_name.as_deref(), Some("f3b1c2d4"));
        assert_eq!(doc.transcript().unwrap(), "Adicionar duas dúzias de ovos.");
        assert_eq!(doc.results.items[0].start_time.as_deref(), Some("0.0"));
    }

    #[test]
    fn average_confidence_skips_punctuation() {
        let doc = TranscribeDocument::from_json(DOCUMENT).unwrap();
        let avg = doc.average_confidence().unwrap();
        assert!((avg - 0.8).abs() < 1e-9, "got {avg}");
    }

    #[test]
    fn joins_segments() {
        let json = r#"{"results": {"transcripts": [{"transcript": " adicionar "}, {"transcript": ""}, {"transcript": "três maçãs"}]}}"#;
        let doc = TranscribeDocument::from_json(json).unwrap();
        assert_eq!(doc.transcript().unwrap(), "adicionar três maçãs");
        assert_eq!(doc.average_confidence(), None);
    }

    #[test]
    fn rejects_unfinished_jobs() {
        let json = r#"{"status": "IN_PROGRESS", "results": {"transcripts": []}}"#;
        let doc = TranscribeDocument::from_json(json).unwrap();
        assert!(matches!(doc.transcript(), Err(Error::JobNotCompleted(s)) if s == "IN_PROGRESS"));
    }

    #[test]
    fn rejects_empty_transcripts() {
        let json = r#"{"status": "COMPLETED", "results": {"transcripts": [{"transcript": "   "}]}}"#;
        let doc = TranscribeDocument::from_json(json).unwrap();
        assert!(matches!(doc.transcript(), Err(Error::EmptyTranscript)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(TranscribeDocument::from_json("{\"results\": 3}"), Err(Error::Json(_))));
    }
}
