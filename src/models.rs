//! Records produced by the crawl and the collections that feed it.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{CHARACTERISTICS_DELIMITER, NOT_AVAILABLE};

/// One exported property listing.
///
/// Every attribute except `source_url` independently falls back to
/// [`NOT_AVAILABLE`]. Records are built once per detail URL and never mutated
/// after the scheduler hands them back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub name: String,
    pub description: String,
    pub address: String,
    pub price: String,
    pub property_type: String,
    pub area: String,
    pub energy_rating: String,
    pub transaction_type: String,
    pub latitude: String,
    pub longitude: String,
    pub characteristics: Characteristics,
    pub source_url: String,
}

impl PropertyRecord {
    /// A record whose every field is the sentinel, tagged with its URL.
    pub fn unavailable(source_url: impl Into<String>) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            name: na(),
            description: na(),
            address: na(),
            price: na(),
            property_type: na(),
            area: na(),
            energy_rating: na(),
            transaction_type: na(),
            latitude: na(),
            longitude: na(),
            characteristics: Characteristics::default(),
            source_url: source_url.into(),
        }
    }

    /// True when nothing beyond the source URL was resolved.
    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable(self.source_url.clone())
    }
}

/// Ordered, first-occurrence-wins key/value pairs from a facts table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Characteristics(Vec<(String, String)>);

impl Characteristics {
    /// Builds the list from raw `key: value` rows.
    ///
    /// Each row is split on its first colon. Rows without a colon or with an
    /// empty key are skipped; rows whose key was already seen are discarded.
    /// Returns the list and the number of duplicate rows discarded.
    pub fn from_rows<I, S>(rows: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        let mut duplicates = 0;

        for row in rows {
            let Some((key, value)) = row.as_ref().split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            if seen.insert(key.to_string()) {
                pairs.push((key.to_string(), value.trim().to_string()));
            } else {
                duplicates += 1;
            }
        }

        (Self(pairs), duplicates)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The area measurement: the first key containing `unit`, or failing that
    /// the first value containing it.
    pub fn area(&self, unit: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| key.contains(unit))
            .map(|(key, _)| key.clone())
            .or_else(|| {
                self.0
                    .iter()
                    .find(|(_, value)| value.contains(unit))
                    .map(|(_, value)| value.clone())
            })
    }

    /// Single-cell form used by the exporters.
    pub fn to_delimited(&self) -> String {
        if self.0.is_empty() {
            return NOT_AVAILABLE.to_string();
        }
        self.0
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(CHARACTERISTICS_DELIMITER)
    }
}

/// Insertion-ordered set of detail-page URLs.
///
/// Equality is exact string equality. Iteration yields URLs in the order they
/// were first inserted, which is the order records are produced in.
#[derive(Debug, Clone, Default)]
pub struct UrlSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `url`; returns false if it was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.ordered.push(url);
        true
    }

    /// Unions `other` into `self`; returns how many URLs were already present.
    pub fn union(&mut self, other: UrlSet) -> usize {
        let mut duplicates = 0;
        for url in other.ordered {
            if !self.insert(url) {
                duplicates += 1;
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

impl<S: Into<String>> FromIterator<S> for UrlSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = UrlSet::new();
        for url in iter {
            set.insert(url);
        }
        set
    }
}

impl IntoIterator for UrlSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characteristics_first_occurrence_wins() {
        let (characteristics, duplicates) =
            Characteristics::from_rows(["Area: 120 m²", "Area: 120 m²", "Rooms: 4"]);
        assert_eq!(
            characteristics.pairs(),
            &[
                ("Area".to_string(), "120 m²".to_string()),
                ("Rooms".to_string(), "4".to_string()),
            ]
        );
        assert_eq!(duplicates, 1);
        assert_eq!(characteristics.area("m²"), Some("120 m²".to_string()));
    }

    #[test]
    fn test_characteristics_duplicate_key_with_different_value() {
        let (characteristics, duplicates) =
            Characteristics::from_rows(["Rooms: 4", "Rooms: 5", "Floor: 2"]);
        assert_eq!(characteristics.len(), 2);
        assert_eq!(characteristics.pairs()[0].1, "4");
        assert_eq!(duplicates, 1);
    }

    #[test]
    fn test_characteristics_split_on_first_colon_only() {
        let (characteristics, _) = Characteristics::from_rows(["Open house: 12:00 - 13:00"]);
        assert_eq!(
            characteristics.pairs(),
            &[("Open house".to_string(), "12:00 - 13:00".to_string())]
        );
    }

    #[test]
    fn test_characteristics_skip_rows_without_key() {
        let (characteristics, duplicates) =
            Characteristics::from_rows(["no separator here", ": orphan value", "Rooms: 3"]);
        assert_eq!(characteristics.len(), 1);
        assert_eq!(duplicates, 0);
    }

    #[test]
    fn test_area_prefers_key_match() {
        let (characteristics, _) =
            Characteristics::from_rows(["Grund: 800 m²", "120 m² bolig: Boligareal"]);
        assert_eq!(characteristics.area("m²"), Some("120 m² bolig".to_string()));
    }

    #[test]
    fn test_area_missing() {
        let (characteristics, _) = Characteristics::from_rows(["Rooms: 4"]);
        assert_eq!(characteristics.area("m²"), None);
    }

    #[test]
    fn test_characteristics_delimited() {
        let (characteristics, _) = Characteristics::from_rows(["Area: 120 m²", "Rooms: 4"]);
        assert_eq!(characteristics.to_delimited(), "Area: 120 m²; Rooms: 4");
        assert_eq!(Characteristics::default().to_delimited(), NOT_AVAILABLE);
    }

    #[test]
    fn test_url_set_union_across_pages() {
        let mut accumulated: UrlSet = ["u1", "u2"].into_iter().collect();
        let page_b: UrlSet = ["u2", "u3"].into_iter().collect();

        let suppressed = accumulated.union(page_b);

        assert_eq!(suppressed, 1);
        assert_eq!(accumulated.as_slice(), &["u1", "u2", "u3"]);
    }

    #[test]
    fn test_url_set_rejects_duplicates() {
        let mut set = UrlSet::new();
        assert!(set.insert("https://example.com/a"));
        assert!(!set.insert("https://example.com/a"));
        assert!(set.insert("https://example.com/a/"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unavailable_record() {
        let record = PropertyRecord::unavailable("https://example.com/listing/1");
        assert!(record.is_unavailable());
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.source_url, "https://example.com/listing/1");
    }
}
