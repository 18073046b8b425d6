// Spotify upstream types.
// Only the fields the UI consumes are modeled; everything else from the
// upstream payload is dropped at deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyFollowers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<SpotifyFollowers>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub external_urls: HashMap<String, String>,
}

/// One page of the upstream top-artists listing.
#[derive(Debug, Deserialize)]
pub struct TopArtistsPage {
    pub items: Vec<SpotifyArtist>,
}

/// Top artists across the three listening windows.
#[derive(Debug, Serialize)]
pub struct TopArtistsResponse {
    pub weekly: Vec<SpotifyArtist>,
    pub monthly: Vec<SpotifyArtist>,
    pub yearly: Vec<SpotifyArtist>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_deserializes_with_missing_optionals() {
        let artist: SpotifyArtist =
            serde_json::from_str(r#"{"id":"a1","name":"Clairo"}"#).unwrap();
        assert_eq!(artist.name, "Clairo");
        assert!(artist.genres.is_empty());
        assert!(artist.followers.is_none());
    }
}
