use super::types::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The attachment has variants, but none of them is a progressive MP4.
    #[error("no MP4 variant for {kind} media {media_id}")]
    NoEligibleVariant { media_id: String, kind: MediaKind },
}
