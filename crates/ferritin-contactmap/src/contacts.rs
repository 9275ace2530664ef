//! Contacts
//!
//! Residue pairs grouped by how a contact prediction scored against the reference.
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A contact between two zero-based alignment sites.
///
/// No ordering or bounds are enforced: `(j, i)`, duplicates and self-pairs are all kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactPair(pub u32, pub u32);

impl ContactPair {
    /// The two 1-based display points of this contact: `(i+1, j+1)` and `(j+1, i+1)`.
    ///
    /// Indices are widened before the shift, so `u32::MAX` still maps to a distinct point.
    pub fn mirrored(&self) -> [(u64, u64); 2] {
        let (i, j) = (u64::from(self.0) + 1, u64::from(self.1) + 1);
        [(i, j), (j, i)]
    }
}

impl From<(u32, u32)> for ContactPair {
    fn from((i, j): (u32, u32)) -> Self {
        ContactPair(i, j)
    }
}

/// Contact categories, declared in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ContactCategory {
    Other,
    TruePositive,
    FalsePositive,
}

impl ContactCategory {
    /// Legend text.
    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::Other => "Other contacts",
            ContactCategory::TruePositive => "True positives",
            ContactCategory::FalsePositive => "False positives",
        }
    }
}

/// Mirror pairs into 1-based display coordinates.
///
/// All forward points `(i+1, j+1)` come first, followed by all mirrored points `(j+1, i+1)`,
/// so the output always holds `2 * pairs.len()` points.
pub fn mirror_pairs(pairs: &[ContactPair]) -> (Vec<u64>, Vec<u64>) {
    let forward = pairs.iter().map(|p| p.mirrored()[0]);
    let backward = pairs.iter().map(|p| p.mirrored()[1]);
    forward.chain(backward).unzip()
}

/// The three contact collections that make up one contact map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSet {
    #[serde(default)]
    pub other_contacts: Vec<ContactPair>,
    #[serde(default)]
    pub true_positives: Vec<ContactPair>,
    #[serde(default)]
    pub false_positives: Vec<ContactPair>,
}

impl ContactSet {
    pub fn new(
        other_contacts: impl IntoIterator<Item = impl Into<ContactPair>>,
        true_positives: impl IntoIterator<Item = impl Into<ContactPair>>,
        false_positives: impl IntoIterator<Item = impl Into<ContactPair>>,
    ) -> Self {
        Self {
            other_contacts: other_contacts.into_iter().map_into().collect(),
            true_positives: true_positives.into_iter().map_into().collect(),
            false_positives: false_positives.into_iter().map_into().collect(),
        }
    }

    pub fn pairs(&self, category: ContactCategory) -> &[ContactPair] {
        match category {
            ContactCategory::Other => &self.other_contacts,
            ContactCategory::TruePositive => &self.true_positives,
            ContactCategory::FalsePositive => &self.false_positives,
        }
    }

    pub fn push(&mut self, category: ContactCategory, pair: ContactPair) {
        match category {
            ContactCategory::Other => self.other_contacts.push(pair),
            ContactCategory::TruePositive => self.true_positives.push(pair),
            ContactCategory::FalsePositive => self.false_positives.push(pair),
        }
    }

    /// Categories and their pairs, in draw order.
    pub fn iter_categories(&self) -> impl Iterator<Item = (ContactCategory, &[ContactPair])> {
        ContactCategory::iter().map(move |category| (category, self.pairs(category)))
    }

    /// Total number of pairs over all categories.
    pub fn len(&self) -> usize {
        self.other_contacts.len() + self.true_positives.len() + self.false_positives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mirrored_pair() {
        assert_eq!(ContactPair(0, 1).mirrored(), [(1, 2), (2, 1)]);
        assert_eq!(ContactPair(7, 7).mirrored(), [(8, 8), (8, 8)]);
    }

    #[test]
    fn test_mirror_pairs_doubles_points() {
        let pairs = vec![ContactPair(0, 1), ContactPair(4, 10), ContactPair(4, 10)];
        let (xs, ys) = mirror_pairs(&pairs);
        assert_eq!(xs.len(), 6);
        assert_eq!(ys.len(), 6);
        assert_eq!(xs, vec![1, 5, 5, 2, 11, 11]);
        assert_eq!(ys, vec![2, 11, 11, 1, 5, 5]);
    }

    #[test]
    fn test_mirror_pairs_contains_both_orientations() {
        let pairs = vec![ContactPair(3, 20), ContactPair(41, 2)];
        let (xs, ys) = mirror_pairs(&pairs);
        let points: Vec<(u64, u64)> = xs.into_iter().zip(ys).collect();
        for pair in &pairs {
            let [forward, backward] = pair.mirrored();
            assert!(points.contains(&forward));
            assert!(points.contains(&backward));
        }
    }

    #[test]
    fn test_mirror_pairs_self_pair() {
        let (xs, ys) = mirror_pairs(&[ContactPair(5, 5)]);
        assert_eq!(xs, vec![6, 6]);
        assert_eq!(ys, vec![6, 6]);
    }

    #[test]
    fn test_mirrored_pair_at_index_limit() {
        let pair = ContactPair(u32::MAX, 0);
        let top = u64::from(u32::MAX) + 1;
        assert_eq!(pair.mirrored(), [(top, 1), (1, top)]);
    }

    #[test]
    fn test_mirror_pairs_empty() {
        let (xs, ys) = mirror_pairs(&[]);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }

    #[test]
    fn test_category_order_and_names() {
        let order: Vec<ContactCategory> = ContactCategory::iter().collect();
        assert_eq!(
            order,
            vec![
                ContactCategory::Other,
                ContactCategory::TruePositive,
                ContactCategory::FalsePositive
            ]
        );
        assert_eq!(ContactCategory::TruePositive.to_string(), "true-positive");
        assert_eq!(
            ContactCategory::from_str("false-positive").unwrap(),
            ContactCategory::FalsePositive
        );
        assert!(ContactCategory::from_str("maybe").is_err());
    }

    #[test]
    fn test_contact_set() {
        let mut set = ContactSet::new(
            [(0u32, 1u32)],
            Vec::<(u32, u32)>::new(),
            [(2u32, 3u32)],
        );
        assert_eq!(set.len(), 2);
        assert!(set.pairs(ContactCategory::TruePositive).is_empty());

        set.push(ContactCategory::TruePositive, ContactPair(9, 30));
        assert_eq!(
            set.pairs(ContactCategory::TruePositive),
            &[ContactPair(9, 30)]
        );

        let categories: Vec<ContactCategory> = set.iter_categories().map(|(c, _)| c).collect();
        assert_eq!(categories.len(), 3);
        assert!(ContactSet::default().is_empty());
    }

    #[test]
    fn test_contact_set_json() {
        let set: ContactSet =
            serde_json::from_str(r#"{"other_contacts": [[0, 1]], "false_positives": [[2, 3]]}"#)
                .unwrap();
        assert_eq!(set.other_contacts, vec![ContactPair(0, 1)]);
        assert!(set.true_positives.is_empty());
        assert_eq!(set.false_positives, vec![ContactPair(2, 3)]);

        let bad = serde_json::from_str::<ContactSet>(r#"{"other_contacts": [[0]]}"#);
        assert!(bad.is_err());

        let too_large =
            serde_json::from_str::<ContactSet>(r#"{"other_contacts": [[18446744073709551615, 1]]}"#);
        assert!(too_large.is_err());
    }
}
