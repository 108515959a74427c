/*!
 * # YARTwAI - Yet Another README Translator with AI
 *
 * A Rust library for translating Markdown README files into per-language
 * locale copies using a local AI oracle.
 *
 * ## Features
 *
 * - Segment a README into inviolable structure and translatable prose
 * - Merge undersized chunks to reduce oracle round-trips
 * - Translate prose through an untrusted oracle with strict validation
 * - Revert to source text on hallucinated, explained, or broken output
 * - Rewrite relative paths for relocated locale files
 * - Keep a navigation block synchronized across all locales
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `segmenter`: Document segmentation into typed chunks
 * - `merger`: Coalescing of undersized or header-only chunks
 * - `oracle`: Translation oracle boundary:
 *   - `oracle::ollama`: Ollama-compatible HTTP adapter
 *   - `oracle::prompts`: Role-tagged system prompts
 *   - `oracle::mock`: Scripted oracle behaviors for tests
 * - `validator`: Length, phrase and structural checks on oracle output
 * - `postprocess`: Output cleanup and relative path rewriting
 * - `navbar`: Cross-locale navigation block synchronization
 * - `language_registry`: Per-language display data and heuristics
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_registry;
pub mod merger;
pub mod navbar;
pub mod oracle;
pub mod postprocess;
pub mod segmenter;
pub mod validator;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, OracleError};
pub use merger::merge_small_chunks;
pub use oracle::{ChunkRole, OracleRequest, TranslationOracle};
pub use segmenter::{segment, Chunk, ChunkKind};
