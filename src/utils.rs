use regex::Regex;
use std::sync::LazyLock;

/// Characters that cannot appear in file names on common filesystems
static INVALID_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("static pattern"));

const MAX_FILENAME_CHARS: usize = 200;

/// Convert a list title to a sanitized file or directory name
pub fn sanitize_filename(title: &str) -> String {
    let name = INVALID_FILENAME_CHARS.replace_all(title, "_");

    // Limit length by characters so multibyte titles are never split mid-codepoint
    let truncated: String = name.chars().take(MAX_FILENAME_CHARS).collect();
    truncated.trim().to_string()
}
