//! Shared layout markup: active navigation and the footer year
//!
//! Header and footer templates are plain HTML fragments, so these helpers
//! work on markup directly. Only double-quoted attributes are recognized.

use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};

lazy_static! {
    static ref OPEN_TAG_RE: Regex =
        Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)(\s[^>]*)?>").expect("valid tag regex");
    static ref ANCHOR_RE: Regex = Regex::new(r"<a(\s[^>]*)?>").expect("valid anchor regex");
    static ref CLASS_RE: Regex =
        Regex::new(r#"(\s)class\s*=\s*"([^"]*)""#).expect("valid class regex");
    static ref HREF_RE: Regex = Regex::new(r#"\shref\s*=\s*"([^"]*)""#).expect("valid href regex");
}

const NAV_CLASS: &str = "main-nav";
const YEAR_CLASS: &str = "current-year";
const ACTIVE_CLASS: &str = "active";

/// Whether a nav link to `link_path` is active on `current_path`
///
/// Everything under the posts section keeps the posts link active.
pub fn is_active_nav(link_path: &str, current_path: &str, posts_dir: &str) -> bool {
    current_path == link_path || (link_path == posts_dir && current_path.contains(posts_dir))
}

/// Recompute the `active` class on every link inside `.main-nav`
pub fn mark_active_nav(markup: &str, current_path: &str, posts_dir: &str) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut cursor = 0;

    for (start, end) in class_blocks(markup, NAV_CLASS) {
        output.push_str(&markup[cursor..start]);
        let block = &markup[start..end];
        let rewritten = ANCHOR_RE.replace_all(block, |caps: &Captures| {
            let anchor = &caps[0];
            let active = HREF_RE
                .captures(anchor)
                .map(|href| is_active_nav(&href[1], current_path, posts_dir))
                .unwrap_or(false);
            toggle_class(anchor, ACTIVE_CLASS, active)
        });
        output.push_str(&rewritten);
        cursor = end;
    }

    output.push_str(&markup[cursor..]);
    output
}

/// Set the text of every `.current-year` element to `year`
///
/// Children of the element are replaced along with its text.
pub fn set_current_year(markup: &str, year: i32) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut cursor = 0;

    for caps in OPEN_TAG_RE.captures_iter(markup) {
        let Some(tag) = caps.get(0) else { continue };
        if tag.start() < cursor || !has_class(tag.as_str(), YEAR_CLASS) {
            continue;
        }
        let (content_end, element_end) = closing_tag(markup, &caps[1], tag.end())
            .unwrap_or((markup.len(), markup.len()));
        output.push_str(&markup[cursor..tag.end()]);
        output.push_str(&year.to_string());
        output.push_str(&markup[content_end..element_end]);
        cursor = element_end;
    }

    output.push_str(&markup[cursor..]);
    output
}

/// Byte ranges of elements carrying `class`, from open tag to closing tag
fn class_blocks(markup: &str, class: &str) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut search_from = 0;

    for caps in OPEN_TAG_RE.captures_iter(markup) {
        let Some(tag) = caps.get(0) else { continue };
        if tag.start() < search_from || !has_class(tag.as_str(), class) {
            continue;
        }
        let end = closing_tag(markup, &caps[1], tag.end())
            .map(|(_, end)| end)
            .unwrap_or(markup.len());
        blocks.push((tag.start(), end));
        search_from = end;
    }

    blocks
}

/// Start and end of the closing tag matching an element opened before `from`
///
/// Nested elements with the same tag name are skipped.
fn closing_tag(markup: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let same_tag = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(name))).ok()?;
    let mut depth = 1usize;

    for caps in same_tag.captures_iter(&markup[from..]) {
        let tag = caps.get(0)?;
        if !caps[1].is_empty() {
            depth -= 1;
            if depth == 0 {
                return Some((from + tag.start(), from + tag.end()));
            }
        } else if !tag.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}

fn has_class(tag: &str, class: &str) -> bool {
    CLASS_RE
        .captures(tag)
        .map(|caps| caps[2].split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Add or remove `class` on an opening tag
fn toggle_class(tag: &str, class: &str, on: bool) -> String {
    if let Some(caps) = CLASS_RE.captures(tag) {
        let mut classes: Vec<&str> = caps[2].split_whitespace().filter(|c| *c != class).collect();
        if on {
            classes.push(class);
        }
        let replacement = format!(r#"{}class="{}""#, &caps[1], classes.join(" "));
        return CLASS_RE.replace(tag, NoExpand(&replacement)).into_owned();
    }

    if on {
        let insert_at = tag.len() - 1;
        format!(r#"{} class="{}">"#, &tag[..insert_at], class)
    } else {
        tag.to_string()
    }
}
