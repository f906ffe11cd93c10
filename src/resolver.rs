//! Link resolver: match hrefs against pattern rules and render output URLs.

use crate::models::{PatternRule, ResolvedLink};

/// Characters that end an embedded resource identifier.
const TERMINATORS: [char; 3] = ['/', '?', '#'];

/// Find where the identifier starting at `id_start` ends.
///
/// Returns the earliest terminator at or after `id_start`. Without one the
/// stop falls on the href's last character, which is therefore never part
/// of the identifier.
pub fn find_id_stop(href: &str, id_start: usize) -> usize {
    href.get(id_start..)
        .and_then(|rest| rest.find(TERMINATORS))
        .map(|pos| id_start + pos)
        .unwrap_or_else(|| last_char_start(href))
}

fn last_char_start(href: &str) -> usize {
    href.char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Extract the identifier that follows the first occurrence of `marker`.
///
/// Returns `None` when `marker` does not occur in `href`. An identifier whose
/// stop lies before its start is empty.
///
/// # Examples
///
/// ```
/// use goo_getf::resolver::extract_id;
///
/// let href = "https://drive.google.com/file/d/1abc123/view";
/// assert_eq!(extract_id(href, "drive.google.com/file/d/"), Some("1abc123"));
///
/// // no terminator: the last character is dropped
/// let href = "https://drive.google.com/file/d/1abc123";
/// assert_eq!(extract_id(href, "drive.google.com/file/d/"), Some("1abc12"));
/// ```
pub fn extract_id<'a>(href: &'a str, marker: &str) -> Option<&'a str> {
    let id_start = href.find(marker)? + marker.len();
    let id_stop = find_id_stop(href, id_start);
    Some(href.get(id_start..id_stop).unwrap_or(""))
}

/// Apply a single rule to `href`.
pub fn resolve_rule(href: &str, rule: &PatternRule) -> Option<ResolvedLink> {
    let id = extract_id(href, rule.marker)?;
    Some(ResolvedLink {
        href: href.to_string(),
        url: rule.template.render(href, id),
        category: rule.category,
        marker: rule.marker,
        id: id.to_string(),
    })
}

/// Resolve one href against every rule, yielding one link per matching rule.
///
/// Rules are evaluated independently and in order; an absent or empty href
/// yields nothing.
pub fn resolve_links<'a>(
    href: Option<&'a str>,
    rules: &'a [PatternRule],
) -> impl Iterator<Item = ResolvedLink> + 'a {
    let href = href.filter(|h| !h.is_empty());
    rules
        .iter()
        .filter_map(move |rule| href.and_then(|h| resolve_rule(h, rule)))
}

/// Like [`resolve_links`], yielding only the output URLs.
pub fn resolve<'a>(
    href: Option<&'a str>,
    rules: &'a [PatternRule],
) -> impl Iterator<Item = String> + 'a {
    resolve_links(href, rules).map(|link| link.url)
}
