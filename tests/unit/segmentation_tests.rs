/*!
 * Segmentation and merging tests over a realistic document
 */

use yartwai::merger::merge_small_chunks;
use yartwai::segmenter::{segment, ChunkKind};

use crate::common::SAMPLE_README;

/// Test that the sample README segments without losing visible content
#[test]
fn test_segment_withSampleReadme_shouldPreserveVisibleContent() {
    let chunks = segment(SAMPLE_README);

    let reconstructed: String = chunks
        .iter()
        .map(|c| c.text.split_whitespace().collect::<String>())
        .collect();
    let original: String = SAMPLE_README.split_whitespace().collect();

    assert_eq!(reconstructed, original);
}

/// Test that the code fence survives segmentation as one verbatim chunk
#[test]
fn test_segment_withSampleReadme_shouldKeepFenceWhole() {
    let chunks = segment(SAMPLE_README);

    let fence = chunks
        .iter()
        .find(|c| c.text.starts_with("```sh"))
        .expect("fence chunk missing");

    assert_eq!(fence.kind, ChunkKind::Struct);
    assert!(fence.text.contains("# comments inside fences stay untouched"));
    assert!(fence.text.ends_with("```"));
}

/// Test that the admonition block stays structural
#[test]
fn test_segment_withSampleReadme_shouldKeepAdmonitionStruct() {
    let chunks = segment(SAMPLE_README);

    let admonition = chunks
        .iter()
        .find(|c| c.text.contains("[!WARNING]"))
        .expect("admonition chunk missing");

    assert_eq!(admonition.kind, ChunkKind::Struct);
}

/// Test that the logo container and badge line are structural
#[test]
fn test_segment_withSampleReadme_shouldKeepHtmlAndBadgesStruct() {
    let chunks = segment(SAMPLE_README);

    assert_eq!(chunks[0].kind, ChunkKind::Struct);
    assert!(chunks[0].text.starts_with("<div"));

    let badge = chunks
        .iter()
        .find(|c| c.text.contains("img.shields.io"))
        .expect("badge chunk missing");
    assert_eq!(badge.kind, ChunkKind::Struct);
}

/// Test that merging attaches every header to its following content
#[test]
fn test_merge_withSampleReadme_shouldAbsorbHeaders() {
    let merged = merge_small_chunks(segment(SAMPLE_README), 50);

    for chunk in &merged {
        if chunk.kind == ChunkKind::Prose || chunk.kind == ChunkKind::Hybrid {
            // No merged prose chunk is a bare header line
            let lone_header =
                chunk.text.starts_with('#') && !chunk.text.contains('\n');
            assert!(!lone_header, "bare header survived merging: {}", chunk.text);
        }
    }
}

/// Test that merging never reorders content
#[test]
fn test_merge_withSampleReadme_shouldPreserveOrder() {
    let merged = merge_small_chunks(segment(SAMPLE_README), 50);

    let reconstructed: String = merged
        .iter()
        .map(|c| c.text.split_whitespace().collect::<String>())
        .collect();
    let original: String = SAMPLE_README.split_whitespace().collect();

    assert_eq!(reconstructed, original);
}
