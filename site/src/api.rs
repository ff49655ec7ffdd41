//! ==============================================================================
//! api.rs - cms client for the header content
//! ==============================================================================

use gloo_net::http::Request;
use station_content::{
    ContentError, Document, DownloadContent, HeaderContent, SearchResponse, DOWNLOAD_TYPE,
    HEADER_TYPE,
};

/// the two singletons the header renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub header: Document<HeaderContent>,
    pub download: Document<DownloadContent>,
}

impl SiteContent {
    /// the header document is required, a missing download document just
    /// means no download button
    pub fn from_search(response: &SearchResponse) -> Result<Self, ContentError> {
        let header = response.single(HEADER_TYPE)?;
        let download = match response.single(DOWNLOAD_TYPE) {
            Ok(download) => download,
            Err(ContentError::MissingDocument(_)) => Document::default(),
            Err(e) => return Err(e),
        };

        Ok(Self { header, download })
    }
}

/// Fetch the header and download documents
pub async fn fetch_site_content(url: &str) -> Result<SiteContent, ContentError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ContentError::Http(e.to_string()))?;

    if !response.ok() {
        return Err(ContentError::Http(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ContentError::Http(e.to_string()))?;

    SiteContent::from_search(&SearchResponse::from_json(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use station_content::{DeviceClass, LogoView, FALLBACK_LOGO_TEXT};

    #[test]
    fn test_header_only_response_keeps_links() {
        let only_header = SearchResponse::from_json(
            r#"{"results": [{"type": "header", "data": {
                "links": [{"text": "Blog", "url": "/b"}],
                "download_text": "Download"
            }}]}"#,
        )
        .unwrap();
        let site = SiteContent::from_search(&only_header).unwrap();

        let items = site.header.data.nav_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Blog");
        assert_eq!(site.download.data, DownloadContent::default());
        assert_eq!(
            site.download.data.link_for(&site.header.data, DeviceClass::Desktop),
            None
        );
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let only_download = SearchResponse::from_json(
            r#"{"results": [{"type": "download", "data": {}}]}"#,
        )
        .unwrap();
        let err = SiteContent::from_search(&only_download).unwrap_err();
        assert!(matches!(err, ContentError::MissingDocument(ref t) if t == "header"));
    }

    #[test]
    fn test_malformed_download_is_still_an_error() {
        let response = SearchResponse::from_json(
            r#"{"results": [
                {"type": "header", "data": {}},
                {"type": "download", "data": {"button_url": "not-a-link"}}
            ]}"#,
        )
        .unwrap();
        let err = SiteContent::from_search(&response).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn test_default_content_is_bare_header() {
        let site = SiteContent::default();
        let header = &site.header.data;

        assert_eq!(header.logo_view(), LogoView::Fallback(FALLBACK_LOGO_TEXT));
        assert!(header.nav_items().is_empty());
        assert_eq!(site.download.data.link_for(header, DeviceClass::Mobile), None);
    }

    #[test]
    fn test_bundled_content_parses() {
        let body = include_str!("../public/content/site.json");
        let site = SiteContent::from_search(&SearchResponse::from_json(body).unwrap()).unwrap();
        assert!(!site.header.data.nav_items().is_empty());
        assert!(site.download.data.desktop_url().is_some());
    }
}
