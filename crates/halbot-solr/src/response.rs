use serde::Deserialize;

use halbot_core::error::{Error, Result};
use halbot_core::types::{Document, SearchResult};

/// `{ "response": { "numFound": 3, "docs": [ { "title": .., "source_id": .. } ] } }`
#[derive(Debug, Deserialize)]
struct SelectEnvelope {
    response: SelectResponse,
}

#[derive(Debug, Deserialize)]
struct SelectResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    docs: Vec<SelectDoc>,
}

#[derive(Debug, Deserialize)]
struct SelectDoc {
    title: String,
    source_id: String,
}

pub fn decode(body: &str) -> Result<SearchResult> {
    let envelope: SelectEnvelope = serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))?;
    let documents = envelope
        .response
        .docs
        .into_iter()
        .map(|d| Document { title: d.title, source_id: d.source_id })
        .collect();
    Ok(SearchResult { total_found: envelope.response.num_found, documents })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_docs_in_order() {
        let body = r#"{"responseHeader":{"status":0},"response":{"numFound":5,"start":0,"docs":[
            {"title":"A","source_id":"1","score":1.2},
            {"title":"B","source_id":"2"}]}}"#;
        let result = decode(body).expect("decode");
        assert_eq!(result.total_found, 5);
        assert_eq!(result.documents, vec![Document::new("A", "1"), Document::new("B", "2")]);
    }

    #[test]
    fn missing_docs_means_empty_page() {
        let result = decode(r#"{"response":{"numFound":3}}"#).expect("decode");
        assert_eq!(result.total_found, 3);
        assert!(result.documents.is_empty());
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        for body in [
            "not json",
            r#"{"error":{"msg":"undefined field"}}"#,
            r#"{"response":{"numFound":"many"}}"#,
            r#"{"response":{"numFound":1,"docs":[{"title":"A"}]}}"#,
        ] {
            assert!(matches!(decode(body), Err(Error::Decode(_))), "{body}");
        }
    }
}
