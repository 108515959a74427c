/*!
 * On-disk navbar synchronization tests
 */

use anyhow::Result;
use yartwai::app_controller::Controller;
use yartwai::file_utils::FileManager;
use yartwai::navbar::{self, NAVBAR_START};
use yartwai::oracle::mock::MockOracle;

use crate::common;

/// Test that synchronizing twice produces byte-identical documents
#[test]
fn test_syncAll_appliedTwice_shouldBeByteIdentical() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let readme = common::create_sample_readme(&dir)?;
    let locales = dir.join("locales");
    FileManager::ensure_dir(&locales)?;
    common::create_test_file(&locales, "README.de.md", "# Inhalt\n")?;
    common::create_test_file(&locales, "README.fr.md", "# Contenu\n")?;

    navbar::sync_all(&readme, &locales, None)?;
    let root_first = FileManager::read_to_string(&readme)?;
    let de_first = FileManager::read_to_string(locales.join("README.de.md"))?;

    navbar::sync_all(&readme, &locales, None)?;
    let root_second = FileManager::read_to_string(&readme)?;
    let de_second = FileManager::read_to_string(locales.join("README.de.md"))?;

    assert_eq!(root_first, root_second);
    assert_eq!(de_first, de_second);

    Ok(())
}

/// Test that the target locale is listed before its file exists
#[test]
fn test_syncAll_withEnsureLocale_shouldListMissingLocale() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let readme = common::create_sample_readme(&dir)?;
    let locales = dir.join("locales");
    FileManager::ensure_dir(&locales)?;
    common::create_test_file(&locales, "README.de.md", "# Inhalt\n")?;

    let updated = navbar::sync_all(&readme, &locales, Some("ja"))?;

    // Root plus the one existing locale file
    assert_eq!(updated, 2);
    let root = FileManager::read_to_string(&readme)?;
    assert!(root.contains("locales/README.ja.md"));
    assert!(root.contains("locales/README.de.md"));

    Ok(())
}

/// Test that synchronization is skipped when nothing is translated yet
#[test]
fn test_syncAll_withNoLocalesAndNoEnsure_shouldSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let readme = common::create_sample_readme(&dir)?;

    let updated = navbar::sync_all(&readme, &dir.join("locales"), None)?;

    assert_eq!(updated, 0);
    let root = FileManager::read_to_string(&readme)?;
    assert!(!root.contains(NAVBAR_START));

    Ok(())
}

/// Test locale discovery against a mixed directory
#[test]
fn test_discoverLocales_shouldExtractSortedCodes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let locales = temp_dir.path().join("locales");
    FileManager::ensure_dir(&locales)?;
    common::create_test_file(&locales, "README.zh-tw.md", "x")?;
    common::create_test_file(&locales, "README.de.md", "x")?;
    common::create_test_file(&locales, "notes.txt", "x")?;
    common::create_test_file(&locales, "README.md", "x")?;

    let codes = navbar::discover_locales(&locales);

    assert_eq!(codes, vec!["de".to_string(), "zh-tw".to_string()]);

    Ok(())
}

/// Test the navbar-only mode through the controller
#[test]
fn test_runNavbarSync_withExistingLocales_shouldUpdateRootAndLocales() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_sample_readme(&dir)?;
    let locales = dir.join("locales");
    FileManager::ensure_dir(&locales)?;
    common::create_test_file(&locales, "README.de.md", "# Inhalt\n")?;
    common::create_test_file(&locales, "README.fr.md", "# Contenu\n")?;
    let config = common::config_for_dir(&dir);

    let controller = Controller::with_oracle(config, Box::new(MockOracle::echo()));
    let updated = controller.run_navbar_sync()?;

    assert_eq!(updated, 3);
    let de = FileManager::read_to_string(locales.join("README.de.md"))?;
    assert!(de.starts_with(NAVBAR_START));
    assert!(de.contains(r#"<a href="../README.md">"#));
    assert!(de.contains(r#"<a href="README.fr.md">"#));

    Ok(())
}
