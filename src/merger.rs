use log::debug;

use crate::segmenter::{Chunk, ChunkKind};

// @module: Chunk coalescing to reduce oracle round-trips

/// Default minimum prose length before a chunk is considered undersized.
pub const DEFAULT_MIN_CHUNK_CHARS: usize = 50;

/// Merge undersized or header-only prose chunks with their successor.
///
/// Iterates left to right: a `Prose` chunk that starts with a header marker
/// or is shorter than `min_chars` absorbs exactly the next chunk, joined by
/// one blank line. The merged chunk becomes `Hybrid` when the absorbed chunk
/// was `Struct`, otherwise stays `Prose`. The cursor advances past both, so
/// a freshly merged chunk is never re-examined within the same pass.
///
/// Headers rarely translate well as standalone spans, and very short
/// fragments waste oracle calls and invite low-quality output.
pub fn merge_small_chunks(chunks: Vec<Chunk>, min_chars: usize) -> Vec<Chunk> {
    let mut merged = Vec::with_capacity(chunks.len());
    let mut index = 0;

    while index < chunks.len() {
        let chunk = &chunks[index];
        let is_small = chunk.text.chars().count() < min_chars;
        let is_header = chunk.text.starts_with('#');

        if chunk.kind == ChunkKind::Prose
            && (is_header || is_small)
            && index + 1 < chunks.len()
        {
            let next = &chunks[index + 1];
            let combined = format!("{}\n\n{}", chunk.text, next.text);
            let kind = if next.kind == ChunkKind::Struct {
                ChunkKind::Hybrid
            } else {
                ChunkKind::Prose
            };
            debug!(
                "merged chunk {} ({} chars) into successor, kind {:?}",
                index,
                chunk.text.chars().count(),
                kind
            );
            merged.push(Chunk::new(kind, combined));
            index += 2;
        } else {
            merged.push(chunk.clone());
            index += 1;
        }
    }

    merged
}
