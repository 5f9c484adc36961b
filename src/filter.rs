use url::Url;

/// Reserved list token for Watch Later
pub const WATCH_LATER_LIST_ID: &str = "WL";

/// Page users are pointed at when extraction is refused
pub const WATCH_LATER_URL: &str = "https://www.youtube.com/playlist?list=WL";

/// Path segment of the playlist view
const PLAYLIST_PATH_SEGMENT: &str = "/playlist";

/// Returns the first value of a query parameter
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Check whether the page is the Watch Later list view.
///
/// The platform renders every playlist behind the same view, so the `list`
/// parameter decides: either exactly `WL`, or a `WL`-prefixed token on a
/// playlist path.
pub fn is_watch_later_page(url: &Url) -> bool {
    let list = query_param(url, "list");
    match list.as_deref() {
        Some(WATCH_LATER_LIST_ID) => true,
        Some(token) => {
            url.path().contains(PLAYLIST_PATH_SEGMENT) && token.starts_with(WATCH_LATER_LIST_ID)
        }
        None => false,
    }
}

/// Same as [`is_watch_later_page`] for an unparsed address; unparsable input is never eligible
pub fn is_watch_later_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => is_watch_later_page(&parsed),
        Err(e) => {
            ::log::debug!("Cannot parse page URL {}: {}", url, e);
            false
        }
    }
}

/// Strip tracking and positional parameters by keeping everything before the first `&`
pub fn canonical_link(resolved: &str) -> String {
    resolved
        .split('&')
        .next()
        .unwrap_or(resolved)
        .to_string()
}

/// Resolve a link against the page and canonicalize it
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(resolved) => Some(canonical_link(resolved.as_str())),
        Err(e) => {
            ::log::debug!("Cannot resolve link {} against {}: {}", href, base, e);
            None
        }
    }
}

/// Read the video id (`v` parameter) from a canonical watch link
pub fn video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    query_param(&parsed, "v").filter(|id| !id.is_empty())
}
