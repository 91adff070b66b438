use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type of the progressive MP4 renditions.
pub const MP4_CONTENT_TYPE: &str = "video/mp4";

/// A post as returned by the v1.1 REST API. Only the fields this crate reads
/// are modelled; everything else in the document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub id_str: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub extended_entities: Option<ExtendedEntities>,
}

impl Tweet {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Prefers `full_text` (extended mode) over the truncated `text`.
    pub fn body(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }

    pub fn media(&self) -> &[MediaEntity] {
        self.extended_entities
            .as_ref()
            .map(|entities| entities.media.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtendedEntities {
    #[serde(default)]
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaEntity {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub id_str: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub media_url_https: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub video_info: VideoInfo,
}

/// Which shape an attachment's playable URL comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource<'a> {
    /// No variants: the direct `media_url_https` is the media itself.
    Direct(&'a str),
    /// One or more encoded renditions to pick from.
    Variants(&'a [VideoVariant]),
}

impl MediaEntity {
    pub fn source(&self) -> MediaSource<'_> {
        if self.video_info.variants.is_empty() {
            MediaSource::Direct(&self.media_url_https)
        } else {
            MediaSource::Variants(&self.video_info.variants)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub variants: Vec<VideoVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoVariant {
    #[serde(default)]
    pub content_type: String,
    /// Absent for streaming manifests.
    #[serde(default)]
    pub bitrate: u64,
    pub url: String,
}

impl VideoVariant {
    pub fn is_mp4(&self) -> bool {
        self.content_type == MP4_CONTENT_TYPE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    AnimatedGif,
    Video,
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::AnimatedGif => "animated_gif",
            MediaKind::Video => "video",
            MediaKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The URL chosen to represent one attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia {
    pub url: String,
    pub kind: MediaKind,
}
