use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

// ASCII classes only; `\w` and `\d` would otherwise accept any Unicode word/digit.
static STATUS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://twitter\.com(/[0-9A-Za-z_]+)?/status(es)?/[0-9]+")
        .expect("status URL pattern is valid")
});

/// Returns every status URL in `text`, left to right, without overlaps.
pub fn find_all_urls(text: &str) -> Vec<&str> {
    let urls: Vec<&str> = STATUS_URL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();

    debug!("Found {} status URLs", urls.len());
    urls
}

/// Decodes the numeric id at the end of a status URL's path.
pub fn status_id(status_url: &str) -> Option<u64> {
    let parsed = match Url::parse(status_url) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Skipping unparsable status URL {}: {}", status_url, e);
            return None;
        }
    };

    let path = parsed.path();
    let segment = path.rsplit('/').next().unwrap_or(path);

    match segment.parse::<u64>() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Skipping status id segment {:?}: {}", segment, e);
            None
        }
    }
}

/// Decodes the ids of every status URL in `text`.
///
/// Segments that do not fit in a `u64` are dropped silently, so the result
/// may be shorter than [`find_all_urls`] for pathological input.
pub fn find_all_ids(text: &str) -> Vec<u64> {
    find_all_urls(text)
        .into_iter()
        .filter_map(status_id)
        .collect()
}

/// Id of the first status URL in `text`, or `None` when there is none.
pub fn find_first_id(text: &str) -> Option<u64> {
    STATUS_URL_RE
        .find(text)
        .and_then(|m| status_id(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_urls() {
        let cases = [
            (
                "asdfhttps://twitter.com/FloodSocial/status/861627479294746624giuewr",
                vec!["https://twitter.com/FloodSocial/status/861627479294746624"],
            ),
            (
                "asdfghhttps://twitter.com/i/statuses/861627479294746624?s=20",
                vec!["https://twitter.com/i/statuses/861627479294746624"],
            ),
            (
                "asdfhhttp://twitter.com/status/861627479294746624?s=afw",
                vec!["http://twitter.com/status/861627479294746624"],
            ),
            (
                "https://twitter.com/FloodSocial/status/1440105622737854464?s=20asdfhhttp://twitter.com/status/861627479294746624?s=afw",
                vec![
                    "https://twitter.com/FloodSocial/status/1440105622737854464",
                    "http://twitter.com/status/861627479294746624",
                ],
            ),
        ];

        for (text, want) in cases {
            assert_eq!(find_all_urls(text), want, "input: {text}");
        }
    }

    #[test]
    fn test_find_all_ids() {
        let cases: [(&str, Vec<u64>); 4] = [
            (
                "asdfhttps://twitter.com/FloodSocial/status/861627479294746624giuewr",
                vec![861627479294746624],
            ),
            (
                "asdfghhttps://twitter.com/i/statuses/861627479294746624?s=20",
                vec![861627479294746624],
            ),
            (
                "http://twitter.com/status/861627479294746624",
                vec![861627479294746624],
            ),
            (
                "https://twitter.com/FloodSocial/status/1440105622737854464?s=20\nasdfhhttp://twitter.com/status/861627479294746624?s=afw",
                vec![1440105622737854464, 861627479294746624],
            ),
        ];

        for (text, want) in cases {
            assert_eq!(find_all_ids(text), want, "input: {text}");
        }
    }

    #[test]
    fn test_find_first_id() {
        assert_eq!(
            find_first_id("asdfhttps://twitter.com/FloodSocial/status/861627479294746624giuewr"),
            Some(861627479294746624)
        );
        assert_eq!(
            find_first_id("asdfghhttps://twitter.com/i/statuses/861627479294746624?s=20"),
            Some(861627479294746624)
        );
        assert_eq!(
            find_first_id("https://twitter.com/a/status/1440105622737854464 https://twitter.com/b/status/2"),
            Some(1440105622737854464)
        );
    }

    #[test]
    fn test_no_reference() {
        for text in ["", "just some words", "https://example.com/status/123", "https://twitter.com/FloodSocial"] {
            assert!(find_all_urls(text).is_empty());
            assert!(find_all_ids(text).is_empty());
            assert_eq!(find_first_id(text), None);
        }
    }

    #[test]
    fn test_case_sensitive_scheme_and_host() {
        assert!(find_all_urls("HTTPS://twitter.com/a/status/1").is_empty());
        assert!(find_all_urls("https://Twitter.com/a/status/1").is_empty());
        assert!(find_all_urls("https://twitter.com/a/Status/1").is_empty());
    }

    #[test]
    fn test_ascii_only_handle_and_digits() {
        assert!(find_all_urls("https://twitter.com/a/status/١٢٣").is_empty());
        assert_eq!(
            find_all_urls("https://twitter.com/ünicode/status/5"),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn test_round_trip() {
        for id in [0u64, 1, 20, 861627479294746624, u64::MAX] {
            let text = format!("see https://twitter.com/someone/status/{id}!");
            assert_eq!(find_all_ids(&text), vec![id]);
            assert_eq!(find_first_id(&text), Some(id));
        }
    }

    #[test]
    fn test_ids_follow_urls() {
        let text = "a https://twitter.com/x/status/1 b http://twitter.com/statuses/22 c https://twitter.com/status/333";
        let urls = find_all_urls(text);
        let ids = find_all_ids(text);
        assert_eq!(urls.len(), ids.len());
        assert_eq!(ids, vec![1, 22, 333]);
    }

    #[test]
    fn test_overflowing_id_is_dropped() {
        let text = "https://twitter.com/a/status/99999999999999999999999 https://twitter.com/b/status/7";
        assert_eq!(find_all_urls(text).len(), 2);
        assert_eq!(find_all_ids(text), vec![7]);
        assert_eq!(find_first_id(text), None);
    }

    #[test]
    fn test_status_id() {
        assert_eq!(status_id("https://twitter.com/a/status/42"), Some(42));
        assert_eq!(status_id("https://twitter.com/a/status/"), None);
        assert_eq!(status_id("not a url"), None);
    }
}
