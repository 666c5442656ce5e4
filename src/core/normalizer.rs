//! Title normalizer.
//!
//! Turns a raw filename stem into a comparable title by stripping the noise
//! download services add to names:
//! - bracketed ID tags such as `[ABC123]`
//! - fixed platform suffixes such as `-_YouTube-zh-CN-dual-double`
//! - underscores, repeated whitespace and letter case

use regex::Regex;
use std::sync::OnceLock;

/// Platform suffixes removed verbatim (exact substring match, not patterns).
///
/// The dual-subtitle marker must come before the bare platform marker.
const PLATFORM_SUFFIXES: &[&str] = &["-_YouTube-zh-CN-dual-double", "_-_YouTube"];

/// Character substitutions applied after suffix removal.
const CHAR_SUBSTITUTIONS: &[(char, char)] = &[('？', '?')];

fn bracket_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[A-Za-z0-9_-]+\]").expect("valid bracket tag regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Remove every bracketed ID tag.
///
/// Repeats until nothing matches so nested tags like `[a[b]]` do not leave a
/// new tag behind.
fn strip_bracket_tags(title: &str) -> String {
    let re = bracket_tag_regex();
    let mut current = title.to_string();
    while re.is_match(&current) {
        current = re.replace_all(&current, "").into_owned();
    }
    current
}

/// Collapse whitespace runs to one space and trim the ends.
fn collapse_whitespace(title: &str) -> String {
    whitespace_regex().replace_all(title.trim(), " ").into_owned()
}

/// Normalize a filename stem into a comparable title.
///
/// Pure, deterministic and idempotent. Empty input yields empty output.
pub fn normalize_title(stem: &str) -> String {
    let mut title = strip_bracket_tags(stem);

    for suffix in PLATFORM_SUFFIXES {
        title = title.replace(suffix, "");
    }

    let title: String = title
        .chars()
        .map(|c| {
            if c == '_' {
                return ' ';
            }
            CHAR_SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect();

    let lowered = collapse_whitespace(&title).to_lowercase();

    // Lowercasing can turn a non-ASCII letter (e.g. the Kelvin sign) into an
    // ASCII one and complete a bracket tag. Suffixes cannot reappear since
    // every `_` is already gone.
    collapse_whitespace(&strip_bracket_tags(&lowered))
}
