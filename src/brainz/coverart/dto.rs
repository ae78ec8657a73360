//! Cover Art Archive Data Transfer Objects
//!
//! These types match EXACTLY what the Cover Art Archive API returns.
//! API Reference: https://musicbrainz.org/doc/Cover_Art_Archive/API

use serde::{Deserialize, Serialize};

/// Response of GET /release/{mbid}
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverArtResponse {
    #[serde(default)]
    pub images: Vec<CoverImage>,
}

/// One piece of artwork for a release
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverImage {
    /// Whether this image is the front cover
    #[serde(default)]
    pub front: bool,
    /// Full-size image URL
    pub image: String,
    pub thumbnails: Option<Thumbnails>,
}

/// Pre-scaled thumbnail URLs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Thumbnails {
    #[serde(rename = "250")]
    pub small: Option<String>,
    #[serde(rename = "500")]
    pub medium: Option<String>,
    #[serde(rename = "1200")]
    pub large: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a release art listing
    #[test]
    fn test_parse_cover_art_response() {
        let json = r#"{
            "images": [{
                "front": true,
                "back": false,
                "image": "http://coverartarchive.org/release/rel-1/1234.jpg",
                "thumbnails": {
                    "250": "http://coverartarchive.org/release/rel-1/1234-250.jpg",
                    "500": "http://coverartarchive.org/release/rel-1/1234-500.jpg"
                }
            }],
            "release": "https://musicbrainz.org/release/rel-1"
        }"#;

        let response: CoverArtResponse =
            serde_json::from_str(json).expect("Should parse cover art response");

        let image = &response.images[0];
        assert!(image.front);
        assert!(image.image.ends_with("1234.jpg"));
        let thumbs = image.thumbnails.as_ref().unwrap();
        assert!(thumbs.small.as_deref().unwrap().ends_with("-250.jpg"));
        assert!(thumbs.large.is_none());
    }

    /// Test parsing a listing with no images
    #[test]
    fn test_parse_empty_listing() {
        let json = r#"{"images": []}"#;
        let response: CoverArtResponse = serde_json::from_str(json).expect("Should parse");
        assert!(response.images.is_empty());
    }
}
