use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::file_utils::FileManager;
use crate::language_registry;

// @module: Cross-locale navigation block synchronization

/// Fixed literal delimiters bounding the navigation block. Everything
/// between them is owned and regenerated by the synchronizer.
pub const NAVBAR_START: &str = "<!--START_SECTION:navbar-->";
pub const NAVBAR_END: &str = "<!--END_SECTION:navbar-->";

/// Locale code of the source-language document, pinned first in the block.
pub const HOME_CODE: &str = "en";

static NAVBAR_BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?s){}.*?{}\s*",
        regex::escape(NAVBAR_START),
        regex::escape(NAVBAR_END)
    ))
    .expect("invalid navbar block pattern")
});

static LOCALE_FILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^README\.([A-Za-z]{2,}(?:-[A-Za-z]{2,})?)\.md$")
        .expect("invalid locale file pattern")
});

/// Render the full delimited navbar block for the given locale set.
///
/// The home entry comes first, then locales in sorted-code order. Hrefs are
/// root-relative when `at_root`, locale-relative otherwise. Rendering is
/// deterministic so repeated synchronization is byte-stable.
pub fn render_block(locales: &[String], at_root: bool, locales_dir_name: &str) -> String {
    let mut links = Vec::with_capacity(locales.len() + 1);

    let home = language_registry::resolve(HOME_CODE);
    let home_href = if at_root { "README.md" } else { "../README.md" };
    links.push(format!(
        r#"<a href="{}">{} {}</a>"#,
        home_href, home.flag, home.native_name
    ));

    let mut sorted: Vec<&String> = locales.iter().collect();
    sorted.sort();
    sorted.dedup();

    for code in sorted {
        if code == HOME_CODE {
            continue;
        }
        let language = language_registry::resolve(code);
        let href = if at_root {
            format!("{}/README.{}.md", locales_dir_name, code)
        } else {
            format!("README.{}.md", code)
        };
        links.push(format!(
            r#"<a href="{}">{} {}</a>"#,
            href, language.flag, language.native_name
        ));
    }

    format!(
        "{}\n<div align=\"center\">\n  {}\n</div>\n{}\n\n",
        NAVBAR_START,
        links.join(" | "),
        NAVBAR_END
    )
}

/// Replace the existing navbar block, or prepend one when the document has
/// none. Replacing the whole delimited region makes the operation
/// idempotent.
pub fn inject_block(document: &str, block: &str) -> String {
    if NAVBAR_BLOCK_PATTERN.is_match(document) {
        NAVBAR_BLOCK_PATTERN
            .replace(document, regex::NoExpand(block))
            .into_owned()
    } else {
        format!("{}{}", block, document)
    }
}

/// Scan the locale output directory for `README.<code>.md` files and return
/// the embedded codes, sorted and deduplicated.
pub fn discover_locales(locales_dir: &Path) -> Vec<String> {
    let mut codes = Vec::new();

    if !FileManager::dir_exists(locales_dir) {
        return codes;
    }

    for entry in WalkDir::new(locales_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if let Some(caps) = LOCALE_FILE_PATTERN.captures(&file_name) {
            codes.push(caps[1].to_string());
        }
    }

    codes.sort();
    codes.dedup();
    codes
}

/// Synchronize the navbar block across the root document and every existing
/// locale document.
///
/// The current run's target locale, when given, is part of the set even
/// before its file exists. Returns the number of documents updated.
pub fn sync_all(
    readme_path: &Path,
    locales_dir: &Path,
    ensure_locale: Option<&str>,
) -> Result<usize> {
    let mut locales = discover_locales(locales_dir);

    if let Some(code) = ensure_locale {
        if !locales.iter().any(|existing| existing == code) {
            locales.push(code.to_string());
            locales.sort();
        }
    } else if locales.is_empty() {
        info!(
            "no locale files found in {:?}, skipping navbar synchronization",
            locales_dir
        );
        return Ok(0);
    }

    let dir_name = locales_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "locales".to_string());

    let root_block = render_block(&locales, true, &dir_name);
    let root_document = FileManager::read_to_string(readme_path)
        .with_context(|| format!("failed to read root document {:?}", readme_path))?;
    FileManager::write_to_file(readme_path, &inject_block(&root_document, &root_block))?;
    let mut updated = 1;

    let locale_block = render_block(&locales, false, &dir_name);
    for code in &locales {
        let locale_path = locales_dir.join(format!("README.{}.md", code));
        if !FileManager::file_exists(&locale_path) {
            debug!("locale file {:?} not written yet, skipping", locale_path);
            continue;
        }
        let document = FileManager::read_to_string(&locale_path)?;
        FileManager::write_to_file(&locale_path, &inject_block(&document, &locale_block))?;
        updated += 1;
    }

    info!(
        "synchronized navbar across root and {} locale file(s)",
        updated - 1
    );
    Ok(updated)
}
