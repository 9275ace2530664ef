//! Contact input.
//!
//! Two formats are accepted:
//!
//! * JSON, matching [`ContactSet`]:
//!   `{"other_contacts": [[0, 1]], "true_positives": [], "false_positives": [[2, 3]]}`
//! * A whitespace separated table with one contact per line: `i j category`, where category is
//!   `other`, `true-positive` or `false-positive`. `#` starts a comment.
//!
//! Site indices are zero-based in both.
use crate::contacts::{ContactCategory, ContactPair, ContactSet};
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// A contact table reader.
pub struct Reader<R> {
    inner: R,
    line_number: usize,
    buf: String,
}

impl<R> Reader<R> {
    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }
    /// Unwraps and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a contact table reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
            buf: String::new(),
        }
    }

    /// Reads the next contact, skipping blank and comment lines. Returns `None` at end of input.
    pub fn read_record(&mut self) -> Result<Option<(ContactCategory, ContactPair)>> {
        loop {
            self.buf.clear();
            let n = self
                .inner
                .read_line(&mut self.buf)
                .with_context(|| format!("Failed to read line {}", self.line_number + 1))?;
            if n == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = match self.buf.split_once('#') {
                Some((data, _comment)) => data,
                None => self.buf.as_str(),
            };
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_record(line)
                .with_context(|| format!("Invalid contact on line {}", self.line_number))?;
            return Ok(Some(record));
        }
    }

    /// Reads all remaining contacts into a [`ContactSet`], keeping file order within categories.
    pub fn read_contact_set(&mut self) -> Result<ContactSet> {
        let mut contacts = ContactSet::default();
        while let Some((category, pair)) = self.read_record()? {
            contacts.push(category, pair);
        }
        Ok(contacts)
    }
}

fn parse_record(line: &str) -> Result<(ContactCategory, ContactPair)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [i, j, category] = fields[..] else {
        bail!("expected `i j category`, found {} fields", fields.len());
    };
    let i = parse_site(i)?;
    let j = parse_site(j)?;
    let category = ContactCategory::from_str(category)
        .map_err(|_| anyhow!("unknown contact category {category:?}"))?;
    Ok((category, ContactPair(i, j)))
}

fn parse_site(field: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .with_context(|| format!("site index {field:?} is not an integer in 0..={}", u32::MAX))
}

/// Read a JSON contact set.
pub fn read_contact_set<P: AsRef<Path>>(path: P) -> Result<ContactSet> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open contact file {}", path.display()))?;
    let contacts: ContactSet = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse contact file {}", path.display()))?;
    Ok(contacts)
}

/// Read a whitespace separated contact table.
pub fn read_contact_table<P: AsRef<Path>>(path: P) -> Result<ContactSet> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open contact table {}", path.display()))?;
    Reader::new(BufReader::new(file))
        .read_contact_set()
        .with_context(|| format!("Failed to parse contact table {}", path.display()))
}

/// Read contacts, choosing the format from the extension: `.json` is JSON, anything else a table.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<ContactSet> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let contacts = if is_json {
        read_contact_set(path)?
    } else {
        read_contact_table(path)?
    };
    debug!(
        "Loaded {} contacts from {} ({} other, {} true positive, {} false positive)",
        contacts.len(),
        path.display(),
        contacts.other_contacts.len(),
        contacts.true_positives.len(),
        contacts.false_positives.len()
    );
    Ok(contacts)
}
