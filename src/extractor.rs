use crate::model::Entry;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// | <n> | [[Loon] <name>](<url>)
static LOON_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*\d+\s*\|\s*\[\[Loon\]\s*([^\]]+)\]\(([^)]+)\)").unwrap()
});

/// Scan the README for numbered `[Loon]` table rows.
///
/// Names and URLs are trimmed. Rows repeating an earlier (name, url) pair
/// are dropped, so the result keeps first-occurrence order.
pub fn extract_entries(markdown: &str) -> Vec<Entry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for caps in LOON_ROW_RE.captures_iter(markdown) {
        let entry = Entry::new(caps[1].trim(), caps[2].trim());
        if !seen.insert(entry.key()) {
            debug!("Skipping duplicate row for {}", entry.name);
            continue;
        }
        entries.push(entry);
    }

    entries
}
