/// A playlist row as rendered by the current layout
pub fn video_row(id: &str, title: &str, channel: &str) -> String {
    format!(
        r#"<ytd-playlist-video-renderer>
  <div id="content">
    <a id="thumbnail" href="/watch?v={id}&amp;list=WL&amp;index=1">
      <img src="https://i.ytimg.com/vi/{id}/hqdefault.jpg">
    </a>
    <div id="meta">
      <h3><a id="video-title" href="/watch?v={id}&amp;list=WL&amp;index=1">
        {title}
      </a></h3>
      <div id="channel-name"><a href="/@channel">{channel}</a></div>
    </div>
  </div>
</ytd-playlist-video-renderer>"#
    )
}

/// A placeholder row shown while the next batch is loading
pub fn loading_placeholder() -> String {
    r#"<ytd-playlist-video-renderer><div id="content"><div class="skeleton"></div></div></ytd-playlist-video-renderer>"#
        .to_string()
}

/// Wrap rows in a minimal playlist page
pub fn playlist_page(rows: &[String]) -> String {
    format!(
        "<html><body><ytd-app><div id=\"contents\">{}</div></ytd-app></body></html>",
        rows.join("\n")
    )
}
