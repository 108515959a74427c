/*!
 * Common test utilities for the yartwai test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use yartwai::app_config::Config;

/// A small but realistic README exercising every chunk category: badges,
/// HTML containers, headers, prose, fenced code, admonitions, blockquotes
/// and relative links.
pub const SAMPLE_README: &str = r#"<div align="center">
  <img src="assets/logo.png" alt="logo">
</div>

[![CI](https://img.shields.io/badge/ci-pass-green)](https://ci.example.com)

# Demo Project

A compact tool for renaming batches of files from the command line.

> A one-line tagline authored by a human.

## Install

Download the binary and place it on your PATH, as described in the
[installation guide](docs/install.md).

```sh
cargo install demo-project
# comments inside fences stay untouched
```

> [!WARNING]
> Never run the demo against a production directory.

## License

Released under the MIT license, see the [license file](LICENSE.md).
"#;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample README in the given directory
pub fn create_sample_readme(dir: &PathBuf) -> Result<PathBuf> {
    create_test_file(dir, "README.md", SAMPLE_README)
}

/// Builds a config whose paths all live inside the given directory
pub fn config_for_dir(dir: &PathBuf) -> Config {
    let mut config = Config::default();
    config.readme_path = dir.join("README.md").to_string_lossy().into_owned();
    config.output_dir = dir.join("locales").to_string_lossy().into_owned();
    config.guidance_dir = dir.join("guidance").to_string_lossy().into_owned();
    config
}
