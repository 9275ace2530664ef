//! ferretin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Example contact data is included in the crate distribution for reference files.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (contacts, _temp) = TestFile::contacts_pf00014_json().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// PF00014 (Kunitz/BPTI) contacts as JSON.
    /// 60 other contacts, 24 true positives, 10 false positives.
    pub fn contacts_pf00014_json() -> Self {
        Self {
            filebinary: include_bytes!("../data/contacts/pf00014.json"),
            suffix: "json",
        }
    }
    /// The same contacts as `contacts_pf00014_json`, as an `i j category` table.
    pub fn contacts_pf00014_table() -> Self {
        Self {
            filebinary: include_bytes!("../data/contacts/pf00014.tsv"),
            suffix: "tsv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
