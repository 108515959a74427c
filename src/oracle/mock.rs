/*!
 * Mock oracle implementations for testing.
 *
 * Each behavior simulates one oracle failure mode the pipeline must
 * survive:
 * - `MockOracle::echo()` - returns a tagged copy of the input
 * - `MockOracle::verbose(n)` - hallucinated runaway output, n× the input
 * - `MockOracle::explaining()` - explains instead of translating
 * - `MockOracle::tag_dropping()` - silently drops closing container tags
 * - `MockOracle::fenced()` - wraps its whole reply in a code fence
 * - `MockOracle::scratch_leaking()` - leaks paired scratch markup
 * - `MockOracle::empty()` / `MockOracle::failing()` - degenerate cases
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::OracleError;
use crate::oracle::{OracleRequest, TranslationOracle};

/// Behavior mode for the mock oracle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the input tagged with the target language name
    Echo,
    /// Like `Echo`, but also appends any guidance it received, making
    /// guidance threading observable from the outside
    GuidanceEcho,
    /// Returns the input repeated `factor` times
    Verbose { factor: usize },
    /// Prepends an explanation phrase the validator must catch
    Explaining,
    /// Removes closing container tags from the input
    TagDropping,
    /// Wraps the tagged input in a Markdown code fence
    Fenced,
    /// Embeds scratch reasoning markup around the tagged input
    ScratchLeaking,
    /// Returns an empty-response error
    Empty,
    /// Always fails with a request error
    Failing,
}

/// Mock oracle with scripted behavior and a request counter
#[derive(Debug)]
pub struct MockOracle {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockOracle {
    pub fn new(behavior: MockBehavior) -> Self {
        MockOracle {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn guidance_echo() -> Self {
        Self::new(MockBehavior::GuidanceEcho)
    }

    pub fn verbose(factor: usize) -> Self {
        Self::new(MockBehavior::Verbose { factor })
    }

    pub fn explaining() -> Self {
        Self::new(MockBehavior::Explaining)
    }

    pub fn tag_dropping() -> Self {
        Self::new(MockBehavior::TagDropping)
    }

    pub fn fenced() -> Self {
        Self::new(MockBehavior::Fenced)
    }

    pub fn scratch_leaking() -> Self {
        Self::new(MockBehavior::ScratchLeaking)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of translate calls made against this oracle
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn tagged(request: &OracleRequest) -> String {
        format!("[{}] {}", request.language_name, request.text)
    }
}

#[async_trait]
impl TranslationOracle for MockOracle {
    async fn translate(&self, request: &OracleRequest) -> Result<String, OracleError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Echo => Ok(Self::tagged(request)),
            MockBehavior::GuidanceEcho => match &request.guidance {
                Some(guidance) => Ok(format!("{} ({})", Self::tagged(request), guidance)),
                None => Ok(Self::tagged(request)),
            },
            MockBehavior::Verbose { factor } => Ok(request.text.repeat(factor.max(1))),
            MockBehavior::Explaining => Ok(format!(
                "In this section, the text means: {}",
                request.text
            )),
            MockBehavior::TagDropping => {
                let mut stripped = request.text.clone();
                for tag in ["</div>", "</details>", "</section>", "</table>", "</p>"] {
                    stripped = stripped.replace(tag, "");
                }
                Ok(stripped)
            }
            MockBehavior::Fenced => Ok(format!("```markdown\n{}\n```", Self::tagged(request))),
            MockBehavior::ScratchLeaking => Ok(format!(
                "<think>\nhow should I translate this?\n</think>\n{}",
                Self::tagged(request)
            )),
            MockBehavior::Empty => Err(OracleError::EmptyResponse),
            MockBehavior::Failing => Err(OracleError::RequestFailed(
                "mock oracle configured to fail".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), OracleError> {
        match self.behavior {
            MockBehavior::Failing => Err(OracleError::ConnectionError(
                "mock oracle configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
