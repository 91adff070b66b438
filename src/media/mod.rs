mod error;
mod types;

pub use error::ResolveError;
pub use types::{
    ExtendedEntities, MediaEntity, MediaKind, MediaSource, ResolvedMedia, Tweet, VideoInfo,
    VideoVariant, MP4_CONTENT_TYPE,
};

use std::cmp::Reverse;
use tracing::{debug, warn};

/// Picks the highest-bitrate progressive MP4 rendition of a video or
/// animated GIF. Streaming manifests are never chosen.
pub fn resolve_video_url(media: &MediaEntity) -> Result<&str, ResolveError> {
    let mut candidates: Vec<&VideoVariant> = media
        .video_info
        .variants
        .iter()
        .filter(|variant| variant.is_mp4())
        .collect();

    // Stable, so equal bitrates keep their input order.
    candidates.sort_by_key(|variant| Reverse(variant.bitrate));

    match candidates.first().copied() {
        Some(best) => {
            debug!(
                "Selected {} bps variant out of {} for media {}",
                best.bitrate,
                media.video_info.variants.len(),
                media.id_str
            );
            Ok(best.url.as_str())
        }
        None => {
            warn!(
                "Media {} has {} variants but no {} rendition",
                media.id_str,
                media.video_info.variants.len(),
                MP4_CONTENT_TYPE
            );
            Err(ResolveError::NoEligibleVariant {
                media_id: media.id_str.clone(),
                kind: media.kind,
            })
        }
    }
}

/// Resolves every attachment of `tweet` to one URL, in attachment order.
///
/// Fails on the first attachment that has variants but no MP4 among them.
pub fn resolve_all_media(tweet: &Tweet) -> Result<Vec<ResolvedMedia>, ResolveError> {
    let medias = tweet.media();
    let mut resolved = Vec::with_capacity(medias.len());

    for media in medias {
        let url = match media.source() {
            MediaSource::Direct(url) => url,
            MediaSource::Variants(_) => resolve_video_url(media)?,
        };

        resolved.push(ResolvedMedia {
            url: url.to_string(),
            kind: media.kind,
        });
    }

    debug!(
        "Resolved {} media for tweet {}",
        resolved.len(),
        tweet.id_str
    );
    Ok(resolved)
}

pub fn media_urls(tweet: &Tweet) -> Result<Vec<String>, ResolveError> {
    Ok(resolve_all_media(tweet)?
        .into_iter()
        .map(|media| media.url)
        .collect())
}

pub fn media_kinds(tweet: &Tweet) -> Vec<MediaKind> {
    tweet.media().iter().map(|media| media.kind).collect()
}

pub fn has_media(tweet: &Tweet) -> bool {
    !tweet.media().is_empty()
}
