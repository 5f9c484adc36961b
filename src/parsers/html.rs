use crate::filter;
use crate::parsers::SelectorSet;
use crate::results::ExtractedRecord;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Item containers rendered by the playlist view
pub const CONTAINER_SELECTOR: &str =
    "ytd-playlist-video-renderer, ytd-playlist-video-list-renderer #content";

static CONTAINERS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CONTAINER_SELECTOR).expect("static selector"));

static TITLE: LazyLock<SelectorSet> =
    LazyLock::new(|| SelectorSet::new(&["#video-title", "a#video-title"]).expect("static selector"));

static LINK: LazyLock<SelectorSet> =
    LazyLock::new(|| SelectorSet::new(&[r#"a[href*="/watch"]"#]).expect("static selector"));

static THUMBNAIL: LazyLock<SelectorSet> =
    LazyLock::new(|| SelectorSet::new(&["img"]).expect("static selector"));

static CHANNEL: LazyLock<SelectorSet> = LazyLock::new(|| {
    SelectorSet::new(&["#channel-name a", "#text-container a"]).expect("static selector")
});

/// Split a page snapshot into the outer HTML of each item container, in document order
pub fn candidate_fragments(document_html: &str) -> Vec<String> {
    let doc = Html::parse_document(document_html);
    let fragments = doc
        .select(&CONTAINERS)
        .map(|e| e.html())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} item containers", fragments.len());
    fragments
}

/// Parse a single container snapshot and extract its record
pub fn extract_from_fragment(fragment_html: &str, base: &Url) -> Option<ExtractedRecord> {
    let fragment = Html::parse_fragment(fragment_html);
    extract_record(fragment.root_element(), base)
}

/// Extract one record from an item container.
///
/// Returns `None` for anything that is not a complete video row, such as
/// loading placeholders or rows whose link carries no video id.
pub fn extract_record(container: ElementRef<'_>, base: &Url) -> Option<ExtractedRecord> {
    let Some(title_el) = TITLE.first_match(container) else {
        ::log::debug!("Skipping container without a title element");
        return None;
    };
    let Some(link_el) = LINK.first_match(container) else {
        ::log::debug!("Skipping container without a watch link");
        return None;
    };

    let title = title_el.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        ::log::debug!("Skipping container with an empty title");
        return None;
    }

    let href = link_el.value().attr("href")?;
    let url = filter::resolve_link(base, href)?;
    let Some(id) = filter::video_id(&url) else {
        ::log::debug!("Skipping link without a video id: {}", url);
        return None;
    };

    let thumbnail_url = THUMBNAIL
        .first_match(container)
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(|src| match base.join(src) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => src.to_string(),
        })
        .unwrap_or_default();

    let author_name = CHANNEL
        .first_match(container)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    Some(
        ExtractedRecord::new(id, title, url)
            .with_thumbnail(thumbnail_url)
            .with_author(author_name),
    )
}
