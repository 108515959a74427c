use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// @module: Output cleanup, whitespace normalization and path relocation

/// Paired scratch delimiters local models are known to leak. Each pair is
/// removed together with its contents.
const SCRATCH_MARKER_PAIRS: &[(&str, &str)] = &[
    ("<think>", "</think>"),
    ("<thinking>", "</thinking>"),
    ("<reasoning>", "</reasoning>"),
    ("<scratchpad>", "</scratchpad>"),
];

static SCRATCH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SCRATCH_MARKER_PAIRS
        .iter()
        .map(|(open, close)| {
            Regex::new(&format!(
                r"(?si){}.*?{}",
                regex::escape(open),
                regex::escape(close)
            ))
            .expect("invalid scratch marker pattern")
        })
        .collect()
});

static EXCESS_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("invalid blank line pattern"));

// @const: Markdown link, target captured separately so the rewrite can
// inspect it (the regex crate has no lookahead)
static MD_LINK_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?\[[^\]]*\]\()([^)]+)(\))").expect("invalid link pattern"));

static ATTR_TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"((?:src|href)=["'])([^"']*)(["'])"#).expect("invalid attribute pattern")
});

// @const: RFC 3986 scheme prefix (http:, https:, mailto:, ...)
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("invalid scheme pattern"));

/// Strip a wrapping code fence the oracle sometimes puts around its whole
/// reply. Fences inside the reply are left alone.
pub fn strip_response_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    if lines.first().is_some_and(|line| line.starts_with("```")) {
        lines.remove(0);
    }
    if lines
        .last()
        .is_some_and(|line| line.trim_start().starts_with("```"))
    {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

/// Remove leaked internal scratch markup, paired delimiters together with
/// their contents.
pub fn strip_scratch_markup(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in SCRATCH_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Collapse 3+ consecutive newlines to exactly 2.
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

fn needs_parent_prefix(target: &str) -> bool {
    let target = target.trim_start();
    if target.is_empty() {
        return false;
    }
    !(target.starts_with('/')
        || target.starts_with('#')
        || target.starts_with("../")
        || SCHEME_PREFIX.is_match(target))
}

/// Prefix relative link and `src`/`href` targets with `../`.
///
/// Translated documents live one directory level below the source document,
/// so every target that is not a scheme URL, absolute path, anchor, or
/// already parent-relative must be relocated.
pub fn rewrite_relative_paths(text: &str) -> String {
    let links_rewritten = MD_LINK_TARGET.replace_all(text, |caps: &Captures| {
        if needs_parent_prefix(&caps[2]) {
            format!("{}../{}{}", &caps[1], &caps[2], &caps[3])
        } else {
            caps[0].to_string()
        }
    });

    ATTR_TARGET
        .replace_all(&links_rewritten, |caps: &Captures| {
            if needs_parent_prefix(&caps[2]) {
                format!("{}../{}{}", &caps[1], &caps[2], &caps[3])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
