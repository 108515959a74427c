/*!
 * Oracle boundary for the translation pipeline.
 *
 * The oracle is an external language model treated as an untrusted
 * function: its output may be truncated, hallucinated, or carry leaked
 * scratch markup, and every call is bounded by an output cap derived from
 * the input length so a looping model cannot stall the pipeline.
 *
 * - `ollama`: HTTP adapter for an Ollama-compatible endpoint
 * - `prompts`: role-tagged system prompts and guidance handling
 * - `mock`: scripted-behavior oracle for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OracleError;

pub mod mock;
pub mod ollama;
pub mod prompts;

/// Floor for the derived response token cap.
pub const MIN_RESPONSE_TOKENS: u64 = 256;

/// Ceiling for the derived response token cap.
pub const MAX_RESPONSE_TOKENS: u64 = 4096;

/// Translation role for a chunk. Headers get a dedicated 1:1 prompt so the
/// model does not invent content underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkRole {
    Header,
    Prose,
}

/// One translation request: the chunk text, its role, the target language
/// display name, and optional free-text guidance threaded through from the
/// caller (never ambient state).
#[derive(Debug, Clone)]
pub struct OracleRequest {
    pub text: String,
    pub role: ChunkRole,
    pub language_name: String,
    pub guidance: Option<String>,
}

impl OracleRequest {
    pub fn new(text: impl Into<String>, role: ChunkRole, language_name: impl Into<String>) -> Self {
        OracleRequest {
            text: text.into(),
            role,
            language_name: language_name.into(),
            guidance: None,
        }
    }

    /// Attach guidance text; only the prose role consumes it.
    pub fn with_guidance(mut self, guidance: Option<String>) -> Self {
        self.guidance = guidance;
        self
    }
}

/// Derive the maximum response size from the input length: roughly three
/// tokens per input character plus headroom, clamped to a fixed range so a
/// malformed or looping oracle cannot run away on any input.
pub fn response_token_limit(input_chars: usize) -> u64 {
    let estimated = (input_chars as u64).saturating_mul(3).saturating_add(200);
    estimated.clamp(MIN_RESPONSE_TOKENS, MAX_RESPONSE_TOKENS)
}

/// Common trait for translation oracles.
///
/// Implementations return raw, untrusted text; cleanup and validation are
/// the caller's responsibility.
#[async_trait]
pub trait TranslationOracle: Send + Sync + Debug {
    /// Translate one chunk. Failure is non-fatal to the run: the caller
    /// degrades the chunk to its source text.
    async fn translate(&self, request: &OracleRequest) -> Result<String, OracleError>;

    /// Verify the oracle resource is reachable before processing chunks.
    async fn test_connection(&self) -> Result<(), OracleError>;
}
