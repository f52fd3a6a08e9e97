//! Text measurement helpers

/// Count whitespace-delimited words
///
/// Blank text still counts as one word, so every post reads in at least a
/// minute.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

/// Estimated reading time, e.g. `"3 min read"`
pub fn reading_time(text: &str, words_per_minute: usize) -> String {
    let words_per_minute = words_per_minute.max(1);
    let minutes = word_count(text).div_ceil(words_per_minute);
    format!("{} min read", minutes)
}
