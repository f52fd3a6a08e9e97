//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Markup for a post's tag list
///
/// # Examples
/// ```ignore
/// tag_list(&["rust".into()]) // -> <span>Tags:</span> <a href="/tag/rust" class="post-tag">#rust</a>
/// ```
pub fn tag_list(tags: &[String]) -> String {
    let links: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"<a href="/tag/{}" class="post-tag">#{}</a>"#, tag, tag))
        .collect();
    format!("<span>Tags:</span> {}", links.join(" "))
}

/// Markup shown in place of a post that could not be rendered
pub fn error_message(message: &str, back_link: &str) -> String {
    format!(
        r#"<div class="error-message"><h2>Oops!</h2><p>{}</p><p><a href="{}">← Back to all posts</a></p></div>"#,
        message, back_link
    )
}
