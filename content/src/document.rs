//! cms document envelope
//!
//! the cms answers searches with `{"results": [{"type": "...", "data": {...}}]}`.
//! records are kept as raw json until a caller asks for a typed one.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// custom type of the header singleton
pub const HEADER_TYPE: &str = "header";
/// custom type of the download singleton
pub const DOWNLOAD_TYPE: &str = "download";

/// typed cms document, only the `data` payload is of interest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    doc_type: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// response body of a cms search query
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Vec<RawDocument>,
}

impl SearchResponse {
    pub fn from_json(body: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(body)?)
    }

    /// first document of the given custom type, decoded as `T`
    pub fn single<T: DeserializeOwned>(&self, doc_type: &str) -> Result<Document<T>, ContentError> {
        let raw = self
            .results
            .iter()
            .find(|doc| doc.doc_type == doc_type)
            .ok_or_else(|| ContentError::MissingDocument(doc_type.to_string()))?;

        // a singleton saved with no fields comes back as `null`
        let data = if raw.data.is_null() {
            serde_json::Value::Object(Default::default())
        } else {
            raw.data.clone()
        };

        Ok(Document {
            data: serde_json::from_value(data)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DownloadContent, HeaderContent};

    const BODY: &str = r#"{
        "results": [
            {"type": "download", "data": {"button_url": {"url": "https://get.station.app"}}},
            {"type": "header", "data": {"logo_alt_text": "Station", "links": []}}
        ]
    }"#;

    #[test]
    fn test_single_picks_document_by_type() {
        let response = SearchResponse::from_json(BODY).unwrap();

        let header: Document<HeaderContent> = response.single(HEADER_TYPE).unwrap();
        assert_eq!(header.data.logo_alt_text.as_deref(), Some("Station"));

        let download: Document<DownloadContent> = response.single(DOWNLOAD_TYPE).unwrap();
        assert_eq!(
            download.data.button_url.and_then(|u| u.url).as_deref(),
            Some("https://get.station.app")
        );
    }

    #[test]
    fn test_missing_document_is_reported() {
        let response = SearchResponse::from_json(r#"{"results": []}"#).unwrap();
        let err = response.single::<HeaderContent>(HEADER_TYPE).unwrap_err();
        assert!(matches!(err, ContentError::MissingDocument(ref t) if t == "header"));
        assert_eq!(err.to_string(), "no `header` document in cms response");
    }

    #[test]
    fn test_null_data_decodes_as_empty_record() {
        let response =
            SearchResponse::from_json(r#"{"results": [{"type": "header", "data": null}]}"#).unwrap();
        let header: Document<HeaderContent> = response.single(HEADER_TYPE).unwrap();
        assert_eq!(header.data, HeaderContent::default());
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = SearchResponse::from_json("{not json").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
