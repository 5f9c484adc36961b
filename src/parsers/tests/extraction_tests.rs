use super::fixtures::{loading_placeholder, playlist_page, video_row};
use crate::parsers::html;
use url::Url;

fn base() -> Url {
    Url::parse("https://www.youtube.com/playlist?list=WL").unwrap()
}

#[test]
fn test_extract_complete_row() {
    let record = html::extract_from_fragment(&video_row("abc123", "First video", "Some Channel"), &base())
        .expect("row should be extractable");

    assert_eq!(record.id, "abc123");
    assert_eq!(record.title, "First video");
    assert_eq!(record.url, "https://www.youtube.com/watch?v=abc123");
    assert_eq!(
        record.thumbnail_url,
        "https://i.ytimg.com/vi/abc123/hqdefault.jpg"
    );
    assert_eq!(record.author_name, "Some Channel");
    assert_eq!(record.added_at, "");
}

#[test]
fn test_link_is_truncated_at_first_ampersand() {
    let row = r#"<div>
        <span id="video-title">Tracked</span>
        <a href="https://x/watch?v=abc123&amp;index=5&amp;list=WL">link</a>
    </div>"#;
    let record = html::extract_from_fragment(row, &base()).unwrap();

    assert_eq!(record.url, "https://x/watch?v=abc123");
    assert_eq!(record.id, "abc123");
}

#[test]
fn test_placeholder_is_not_extractable() {
    assert!(html::extract_from_fragment(&loading_placeholder(), &base()).is_none());
}

#[test]
fn test_missing_title_or_link_is_not_extractable() {
    let no_title = r#"<div><a href="/watch?v=abc">x</a></div>"#;
    let no_link = r#"<div><span id="video-title">Title</span><a href="/@channel">c</a></div>"#;
    let blank_title = r#"<div><span id="video-title">   </span><a href="/watch?v=abc">x</a></div>"#;

    assert!(html::extract_from_fragment(no_title, &base()).is_none());
    assert!(html::extract_from_fragment(no_link, &base()).is_none());
    assert!(html::extract_from_fragment(blank_title, &base()).is_none());
}

#[test]
fn test_link_without_video_id_is_not_extractable() {
    let row = r#"<div><span id="video-title">Title</span><a href="/watch?feature=share">x</a></div>"#;
    assert!(html::extract_from_fragment(row, &base()).is_none());
}

#[test]
fn test_optional_fields_default_to_empty() {
    let row = r#"<div><span id="video-title">Bare</span><a href="/watch?v=bare1">x</a></div>"#;
    let record = html::extract_from_fragment(row, &base()).unwrap();

    assert_eq!(record.thumbnail_url, "");
    assert_eq!(record.author_name, "");
}

#[test]
fn test_channel_falls_back_to_text_container() {
    let row = r#"<div>
        <span id="video-title">Title</span>
        <a href="/watch?v=fb1">x</a>
        <div id="text-container"><a href="/@other">  Other Channel </a></div>
    </div>"#;
    let record = html::extract_from_fragment(row, &base()).unwrap();

    assert_eq!(record.author_name, "Other Channel");
}

#[test]
fn test_candidate_fragments_in_document_order() {
    let page = playlist_page(&[
        video_row("a1", "One", "C"),
        loading_placeholder(),
        video_row("b2", "Two", "C"),
    ]);
    let fragments = html::candidate_fragments(&page);
    assert_eq!(fragments.len(), 3);

    let ids: Vec<String> = fragments
        .iter()
        .filter_map(|f| html::extract_from_fragment(f, &base()))
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["a1", "b2"]);
}

#[test]
fn test_candidate_fragments_empty_page() {
    assert!(html::candidate_fragments("<html><body></body></html>").is_empty());
}
