/*!
 * System prompts for the translation oracle.
 *
 * The header role translates a lone section header 1:1; the prose role
 * translates general Markdown prose while leaving all markup untouched.
 * Guidance, when present, is appended to the prose instructions only.
 */

use crate::oracle::ChunkRole;

const HEADER_TEMPLATE: &str = "You are a technical translation filter for {language}.\n\
STRICT RULES:\n\
- The input is a single section header. Translate it 1:1.\n\
- DO NOT generate any content, lists, or descriptions under the header.\n\
- Preserve the '#' symbols exactly.\n\
- Output ONLY the translated header.\n\
- Preserve original formatting, punctuation, whitespace, and markdown/code symbols exactly; do NOT normalize, reflow, or 'fix' the input.";

const PROSE_TEMPLATE: &str = "You are a professional technical translation engine. Your task: Translate the input into {language}.\n\
STRICT RULES:\n\
- Output ONLY the final translated text. No intros.\n\
- NEVER modify HTML tags, attributes (href, src), or CSS styles.\n\
- Keep technical terms in English.\n\
- Preserve all Markdown symbols (#, **, `, -, link) exactly.\n\
- Do NOT translate GitHub Flavored Markdown alerts (e.g., '> [!NOTE]', '> [!IMPORTANT]').\n\
- Do NOT translate badge/shield alt text or URLs.\n\
- Do NOT modify formatting, whitespace, punctuation, code fences, list markers, or emphasis markers; translate only the human-visible text.\n\
- Markdown Admonitions: NEVER translate the keyword inside > [!KEYWORD]. Valid keywords are: NOTE, TIP, IMPORTANT, WARNING, CAUTION.\n\
- Static Badges: Do not translate text inside image URLs (e.g., img.shields.io) unless it is the alt text.\n\
- Emoji Integrity: Ensure emojis remain attached to their correct logical counterparts.";

/// Build the system prompt for a role and target language. Guidance is an
/// opaque string appended to the prose instructions; the header role
/// ignores it.
pub fn system_prompt(role: ChunkRole, language_name: &str, guidance: Option<&str>) -> String {
    match role {
        ChunkRole::Header => HEADER_TEMPLATE.replace("{language}", language_name),
        ChunkRole::Prose => {
            let base = PROSE_TEMPLATE.replace("{language}", language_name);
            match guidance {
                Some(guidance) if !guidance.trim().is_empty() => {
                    format!("{}\n\nADDITIONAL GUIDANCE:\n{}", base, guidance.trim())
                }
                _ => base,
            }
        }
    }
}
