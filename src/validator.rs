use log::warn;

use crate::language_registry::{ResolvedLanguage, UNIVERSAL_FORBIDDEN};

// @module: Validation of untrusted oracle output, revert-or-accept

/// Closing tags for the block containers the segmenter recognizes. A
/// translation that loses one of these has dropped wrapping markup.
const CLOSING_CONTAINER_TAGS: &[&str] =
    &["</div>", "</details>", "</section>", "</table>", "</p>"];

/// Why a translated chunk was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Output exceeded the per-language expansion multiplier
    LengthRatio { ratio: f64, limit: f64 },
    /// Output contains a phrase associated with explanation, not translation
    ForbiddenPhrase { phrase: &'static str },
    /// Output dropped a closing container tag present in the source
    StructuralLoss { tag: &'static str },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::LengthRatio { ratio, limit } => {
                write!(f, "length ratio {:.2} exceeds limit {:.2}", ratio, limit)
            }
            RejectionReason::ForbiddenPhrase { phrase } => {
                write!(f, "contains forbidden phrase {:?}", phrase)
            }
            RejectionReason::StructuralLoss { tag } => {
                write!(f, "lost closing tag {}", tag)
            }
        }
    }
}

/// Run the checks in order; the first failing check wins.
///
/// 1. Length ratio against the language's expansion multiplier, the
///    primary defense against runaway hallucination.
/// 2. Forbidden phrases, universal English list plus the target language's
///    curated list.
/// 3. Structural preservation of closing container tags.
pub fn check(
    original: &str,
    translated: &str,
    language: &ResolvedLanguage,
) -> Result<(), RejectionReason> {
    let original_chars = original.chars().count();
    let translated_chars = translated.chars().count();

    if original_chars > 0 {
        let ratio = translated_chars as f64 / original_chars as f64;
        if ratio > language.expansion_ratio {
            return Err(RejectionReason::LengthRatio {
                ratio,
                limit: language.expansion_ratio,
            });
        }
    }

    for phrase in UNIVERSAL_FORBIDDEN.iter().chain(language.forbidden).copied() {
        if translated.contains(phrase) {
            return Err(RejectionReason::ForbiddenPhrase { phrase });
        }
    }

    let original_lower = original.to_lowercase();
    let translated_lower = translated.to_lowercase();
    for tag in CLOSING_CONTAINER_TAGS {
        if original_lower.contains(tag) && !translated_lower.contains(tag) {
            return Err(RejectionReason::StructuralLoss { tag });
        }
    }

    Ok(())
}

/// Resolve untrusted oracle output to the text that goes into the document:
/// the translation when it passes every check, otherwise the original chunk
/// verbatim. Rejection is a logged degradation, never an abort.
pub fn resolve(original: &str, translated: &str, language: &ResolvedLanguage) -> String {
    match check(original, translated, language) {
        Ok(()) => translated.to_string(),
        Err(reason) => {
            warn!(
                "validation rejected translated chunk for '{}' ({}), keeping original text",
                language.code, reason
            );
            original.to_string()
        }
    }
}
