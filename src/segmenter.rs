use once_cell::sync::Lazy;
use regex::Regex;

// @module: Document segmentation into structural and prose chunks

/// Classification of a document chunk.
///
/// `Struct` chunks are copied verbatim into the output and never sent to the
/// oracle. `Prose` chunks are translation candidates. `Hybrid` chunks are
/// produced by the merger when a prose chunk absorbs a structural successor;
/// they still travel to the oracle but are checked for structural loss
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Struct,
    Prose,
    Hybrid,
}

/// A maximal contiguous span of the document with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub text: String,
}

impl Chunk {
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Self {
        Chunk {
            kind,
            text: text.into(),
        }
    }
}

// @const: Master span pattern, priority order: fences, block HTML containers,
// badge-only line groups, ATX headers, horizontal rules. Headers are split
// into their own spans here but classify as prose below: they are translated
// with the header role and drive the merger's header-absorption rule.
static STRUCT_SPAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mi)(?:```[\s\S]*?```|<div\b[^>]*>[\s\S]*?</div>|<details\b[^>]*>[\s\S]*?</details>|<section\b[^>]*>[\s\S]*?</section>|<table\b[^>]*>[\s\S]*?</table>|<p\b[^>]*>[\s\S]*?</p>|^\s*(?:[!\[].*?\]\(.*?\)\s*)+$|^\#{1,6}[ \t].*|^(?:-{3,}|\*{3,}|_{3,})[ \t]*$)",
    )
    .expect("invalid struct span pattern")
});

// @const: Quoted line detector for the decomposition post-pass
static QUOTED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*>").expect("invalid quoted line pattern"));

/// Admonition keywords preserved untranslated, English plus the localized
/// variants the oracle is known to emit.
const ADMONITION_KEYWORDS: &[&str] = &[
    "NOTE",
    "TIP",
    "IMPORTANT",
    "WARNING",
    "CAUTION",
    "HINWEIS",
    "WICHTIG",
    "WARNUNG",
    "ACHTUNG",
    "ATTENTION",
    "AVERTISSEMENT",
    "NOTA",
    "AVISO",
    "注意",
    "警告",
    "重要",
];

static ADMONITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let keywords = ADMONITION_KEYWORDS.join("|");
    Regex::new(&format!(r"^(?:>\s*)?\[!(?:{})\]", keywords)).expect("invalid admonition pattern")
});

/// One row of the ordered classification table. Rules are evaluated
/// top-to-bottom; the first match wins and the span gets that kind.
struct ClassifyRule {
    label: &'static str,
    pattern: Regex,
    kind: ChunkKind,
}

static CLASSIFY_RULES: Lazy<Vec<ClassifyRule>> = Lazy::new(|| {
    let rule = |label: &'static str, pattern: &str, kind: ChunkKind| ClassifyRule {
        label,
        pattern: Regex::new(pattern).expect("invalid classification pattern"),
        kind,
    };
    let admonition_keywords = ADMONITION_KEYWORDS.join("|");
    vec![
        // Admonition call-outs stay untranslated even though they are quoted
        rule(
            "admonition-quote",
            &format!(r"^(?:>\s*)?\[!(?:{})\]", admonition_keywords),
            ChunkKind::Struct,
        ),
        // Blockquotes are human commentary, translate them no matter what
        // pattern produced the span
        rule("blockquote", r"^>", ChunkKind::Prose),
        rule("code-fence", r"^```", ChunkKind::Struct),
        rule(
            "html-container",
            r"(?i)^<(?:div|details|section|table|p)\b",
            ChunkKind::Struct,
        ),
        rule("html-comment-open", r"^<!--", ChunkKind::Struct),
        rule("html-comment-close", r"-->\s*$", ChunkKind::Struct),
        rule(
            "horizontal-rule",
            r"^(?:-{3,}|\*{3,}|_{3,})[ \t]*$",
            ChunkKind::Struct,
        ),
        rule(
            "badge-lines",
            r"(?s)^(?:\s*[!\[].*?\]\(.*?\))+\s*$",
            ChunkKind::Struct,
        ),
    ]
});

/// Classify a trimmed span through the rule table. Falls through to `Prose`.
pub fn classify(text: &str) -> ChunkKind {
    let trimmed = text.trim();
    CLASSIFY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(trimmed))
        .map(|rule| rule.kind)
        .unwrap_or(ChunkKind::Prose)
}

/// Name of the classification rule that matched, for trace logging.
pub fn classify_rule_label(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    CLASSIFY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(trimmed))
        .map(|rule| rule.label)
}

/// Whether a quoted block carries an admonition token and must be preserved.
pub fn is_admonition_quote(text: &str) -> bool {
    ADMONITION_PATTERN.is_match(text.trim())
}

/// Split a document into an ordered chunk sequence.
///
/// Structural spans are located with the master pattern; the gaps between
/// them are classified through the same rule table so a blockquote stays
/// prose regardless of what triggered segmentation. Whitespace-only spans
/// are dropped, every kept span is trimmed, and order is preserved.
pub fn segment(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut cursor = 0;

    for found in STRUCT_SPAN_PATTERN.find_iter(text) {
        push_span(&mut chunks, &text[cursor..found.start()]);
        push_span(&mut chunks, found.as_str());
        cursor = found.end();
    }
    push_span(&mut chunks, &text[cursor..]);

    decompose_blockquotes(chunks)
}

fn push_span(chunks: &mut Vec<Chunk>, span: &str) {
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return;
    }
    chunks.push(Chunk::new(classify(trimmed), trimmed));
}

/// Decompose any `Struct` chunk containing quoted lines into up to three
/// parts: the text before the quote, the contiguous quoted block, and the
/// tail. A single blank line inside the quote is absorbed only when another
/// quoted line follows it, so blank-separated quote groups stay one block.
/// The quoted block is kept structural only when it opens with an admonition
/// token; the remainders are re-classified through the rule table.
pub fn decompose_blockquotes(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if chunk.kind != ChunkKind::Struct || !QUOTED_LINE.is_match(&chunk.text) {
            out.push(chunk);
            continue;
        }

        let lines: Vec<&str> = chunk.text.split_inclusive('\n').collect();
        let Some(start) = lines
            .iter()
            .position(|line| line.trim_start().starts_with('>'))
        else {
            out.push(chunk);
            continue;
        };

        let mut end = start;
        while end + 1 < lines.len() {
            let next = lines[end + 1];
            if next.trim_start().starts_with('>') {
                end += 1;
                continue;
            }
            if next.trim().is_empty()
                && end + 2 < lines.len()
                && lines[end + 2].trim_start().starts_with('>')
            {
                end += 1;
                continue;
            }
            break;
        }

        let before = lines[..start].concat();
        let block = lines[start..=end].concat();
        let after = lines[end + 1..].concat();

        push_span(&mut out, &before);

        let block = block.trim();
        if !block.is_empty() {
            let kind = if is_admonition_quote(block) {
                ChunkKind::Struct
            } else {
                ChunkKind::Prose
            };
            out.push(Chunk::new(kind, block));
        }

        push_span(&mut out, &after);
    }

    out
}
