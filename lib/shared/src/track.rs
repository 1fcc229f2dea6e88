use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the proxy. Only ever used as a display key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Number(n) => write!(f, "{n}"),
            TrackId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TrackId {
    fn from(value: u64) -> Self {
        TrackId::Number(value)
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        TrackId::Text(value.to_string())
    }
}

/// A playable song entry as returned by the music proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist_name: String,
    /// Cover art URL
    #[serde(default)]
    pub album_image: Option<String>,
    /// MP3 stream URL
    #[serde(default)]
    pub audio: Option<String>,
}

impl Track {
    pub fn new(id: u64, name: &str, artist_name: &str) -> Self {
        Self {
            id: TrackId::Number(id),
            name: name.to_string(),
            artist_name: artist_name.to_string(),
            album_image: None,
            audio: None,
        }
    }

    pub fn with_album_image(mut self, url: &str) -> Self {
        self.album_image = Some(url.to_string());
        self
    }

    pub fn with_audio(mut self, url: &str) -> Self {
        self.audio = Some(url.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_proxy_payload() {
        let body = r#"[
            {"id": 1, "name": "One More Time", "artist_name": "Daft Punk",
             "album_image": "u1", "audio": "a1", "duration": 320},
            {"id": "1532771", "name": "Nightcall", "artist_name": "Kavinsky",
             "album_image": "u2", "audio": "a2"}
        ]"#;
        let tracks: Vec<Track> = serde_json::from_str(body).unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, TrackId::Number(1));
        assert_eq!(tracks[0].name, "One More Time");
        assert_eq!(tracks[0].audio.as_deref(), Some("a1"));
        assert_eq!(tracks[1].id, TrackId::Text("1532771".to_string()));
        assert_eq!(tracks[1].artist_name, "Kavinsky");
    }

    #[test]
    fn test_missing_media_fields_are_tolerated() {
        let track: Track = serde_json::from_str(r#"{"id": 7, "name": "Untitled"}"#).unwrap();
        assert_eq!(track.artist_name, "");
        assert!(track.album_image.is_none());
        assert!(track.audio.is_none());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<Track>(r#"{"name": "No key"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TrackId::from(42u64).to_string(), "42");
        assert_eq!(TrackId::from("abc").to_string(), "abc");
    }
}
