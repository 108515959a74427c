use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_registry::{self, ResolvedLanguage};
use crate::merger;
use crate::navbar;
use crate::oracle::ollama::OllamaOracle;
use crate::oracle::{ChunkRole, OracleRequest, TranslationOracle};
use crate::postprocess;
use crate::segmenter::{self, Chunk, ChunkKind};
use crate::validator;

// @module: Application controller for the translation pipeline

/// Main application controller for README translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation oracle resource
    oracle: Box<dyn TranslationOracle>,
}

impl Controller {
    // @method: Create a controller with the configured HTTP oracle
    pub fn with_config(config: Config) -> Result<Self> {
        let oracle = OllamaOracle::new(
            config.oracle.endpoint.clone(),
            config.oracle.model.clone(),
            config.oracle.timeout_secs,
        )
        .context("Failed to construct the translation oracle")?;

        Ok(Self {
            config,
            oracle: Box::new(oracle),
        })
    }

    /// Create a controller with an injected oracle, used by tests
    pub fn with_oracle(config: Config, oracle: Box<dyn TranslationOracle>) -> Self {
        Self { config, oracle }
    }

    /// Translate the root document into one locale and synchronize navbars.
    ///
    /// Fatal errors (unreadable document, unreachable oracle) abort before
    /// anything is written. Per-chunk oracle failures and validation
    /// rejections degrade that chunk to its source text and the run
    /// continues.
    pub async fn run_translation(&self, lang: &str) -> Result<PathBuf> {
        let language = language_registry::resolve(lang);
        let readme_path = Path::new(&self.config.readme_path);
        let output_dir = Path::new(&self.config.output_dir);

        let content = FileManager::read_to_string(readme_path)
            .with_context(|| format!("Failed to read source document {:?}", readme_path))?;

        let guidance = self.load_guidance(lang);

        self.oracle
            .test_connection()
            .await
            .context("Translation oracle is not reachable")?;

        let chunks =
            merger::merge_small_chunks(segmenter::segment(&content), self.config.min_chunk_chars);
        info!(
            "Processing {} chunks for language '{}' ({})",
            chunks.len(),
            lang,
            language.name
        );

        let progress = ProgressBar::new(chunks.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut assembled = String::new();
        let total = chunks.len();
        for (index, chunk) in chunks.iter().enumerate() {
            let text = match chunk.kind {
                ChunkKind::Struct => chunk.text.clone(),
                ChunkKind::Prose | ChunkKind::Hybrid => {
                    self.translate_chunk(chunk, &language, guidance.as_deref(), index, total)
                        .await
                }
            };
            assembled.push_str(text.trim_end());
            assembled.push_str("\n\n");
            progress.inc(1);
        }
        progress.finish_and_clear();

        let final_text =
            postprocess::rewrite_relative_paths(&postprocess::collapse_blank_lines(&assembled));

        FileManager::ensure_dir(output_dir)?;
        let output_path = output_dir.join(format!("README.{}.md", lang));
        FileManager::write_to_file(&output_path, &final_text)?;

        navbar::sync_all(readme_path, output_dir, Some(lang))?;

        info!(
            "Wrote translated locale to {:?} and synchronized navbars",
            output_path
        );
        Ok(output_path)
    }

    /// Regenerate navbar blocks for the root document and all locale files.
    pub fn run_navbar_sync(&self) -> Result<usize> {
        navbar::sync_all(
            Path::new(&self.config.readme_path),
            Path::new(&self.config.output_dir),
            None,
        )
    }

    // @translates: One prose or hybrid chunk, degrading to source text on
    // oracle failure or validation rejection
    async fn translate_chunk(
        &self,
        chunk: &Chunk,
        language: &ResolvedLanguage,
        guidance: Option<&str>,
        index: usize,
        total: usize,
    ) -> String {
        let role = if is_lone_header(&chunk.text) {
            ChunkRole::Header
        } else {
            ChunkRole::Prose
        };

        debug!(
            "Translating chunk {}/{} ({} chars, {:?})",
            index + 1,
            total,
            chunk.text.chars().count(),
            role
        );

        let request = OracleRequest::new(chunk.text.clone(), role, language.name.clone())
            .with_guidance(guidance.map(|g| g.to_string()));

        match self.oracle.translate(&request).await {
            Ok(raw) => {
                let cleaned =
                    postprocess::strip_scratch_markup(&postprocess::strip_response_fences(&raw));
                validator::resolve(&chunk.text, &cleaned, language)
            }
            Err(error) => {
                warn!(
                    "Oracle call failed for chunk {}/{} ({}), keeping original text",
                    index + 1,
                    total,
                    error
                );
                chunk.text.clone()
            }
        }
    }

    // @loads: Optional per-language guidance file, by filename convention
    fn load_guidance(&self, lang: &str) -> Option<String> {
        let path = Path::new(&self.config.guidance_dir).join(format!("{}.txt", lang));
        if !FileManager::file_exists(&path) {
            info!(
                "No guidance file for '{}', using global defaults",
                lang
            );
            return None;
        }

        match FileManager::read_to_string(&path) {
            Ok(text) => {
                let trimmed = text.trim().to_string();
                if trimmed.is_empty() {
                    None
                } else {
                    info!("Loaded language guidance from {:?}", path);
                    Some(trimmed)
                }
            }
            Err(error) => {
                warn!("Failed to read guidance file {:?}: {}", path, error);
                None
            }
        }
    }
}

// @checks: Lone section header, single line starting with '#'
fn is_lone_header(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('#') && !trimmed.contains('\n')
}
