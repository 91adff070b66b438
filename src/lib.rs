//! Post-reference and media extraction for Twitter posts.
//!
//! [`reference`] finds status URLs in free text and decodes their ids.
//! [`media`] picks one URL per attachment of an already-decoded [`Tweet`].

pub mod cli;
pub mod config;
pub mod media;
pub mod reference;

pub use media::{
    has_media, media_kinds, media_urls, resolve_all_media, resolve_video_url, MediaKind,
    ResolveError, ResolvedMedia, Tweet,
};
pub use reference::{find_all_ids, find_all_urls, find_first_id};
