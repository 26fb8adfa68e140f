//! Section keys and the ordered section map produced by the parser.

use serde::{Deserialize, Serialize};

/// The one section whose items become shop cards instead of recommendation
/// blocks.
pub const SHOPPING_ITEMS: &str = "SHOPPING_ITEMS";

/// Normalized identifier for an advice section, derived from a header line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    /// Wrap an already-normalized key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive a key from a trimmed header line.
    ///
    /// Strips the trailing colon, replaces the first whitespace run with a
    /// single underscore, and uppercases. Only the first run is replaced:
    /// `"Shopping Items:"` becomes `SHOPPING_ITEMS`, but `"Best Color Picks:"`
    /// becomes `BEST_COLOR PICKS`. Downstream consumers key on these exact
    /// strings, so the lopsided transform must not change.
    pub fn from_header(line: &str) -> Self {
        let name = line.strip_suffix(':').unwrap_or(line);
        Self(underscore_first_gap(name).to_uppercase())
    }

    /// Human-readable label: only the first underscore turns back into a
    /// space, mirroring `from_header`.
    pub fn label(&self) -> String {
        self.0.replacen('_', " ", 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace the first whitespace run in `name` with a single underscore.
fn underscore_first_gap(name: &str) -> String {
    let Some(start) = name.find(char::is_whitespace) else {
        return name.to_string();
    };
    let tail = &name[start..];
    let end = start + tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
    format!("{}_{}", &name[..start], &name[end..])
}

/// Ordered mapping of section key to the items collected under it.
///
/// Insertion order is preserved. Re-registering a key keeps its original
/// position but clears its items, so the last header with a given key wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedSections {
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct SectionEntry {
    key: SectionKey,
    items: Vec<String>,
}

impl ParsedSections {
    /// Register `key`, clearing any items previously collected under it.
    pub fn start_section(&mut self, key: SectionKey) {
        match self.sections.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.items.clear(),
            None => self.sections.push(SectionEntry {
                key,
                items: Vec::new(),
            }),
        }
    }

    /// Append an item to the section registered under `key`.
    ///
    /// A key that was never registered is ignored; the parser only pushes
    /// items while a section is open.
    pub fn push_item(&mut self, key: &SectionKey, item: impl Into<String>) {
        if let Some(entry) = self.sections.iter_mut().find(|entry| entry.key == *key) {
            entry.items.push(item.into());
        }
    }

    /// Items for `key`, if that section was seen.
    pub fn get(&self, key: &SectionKey) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.items.as_slice())
    }

    /// Iterate sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &[String])> {
        self.sections
            .iter()
            .map(|entry| (&entry.key, entry.items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_single_word_header() {
        assert_eq!(SectionKey::from_header("Tone:").as_str(), "TONE");
    }

    #[test]
    fn normalizes_two_word_header() {
        assert_eq!(
            SectionKey::from_header("Shopping Items:").as_str(),
            "SHOPPING_ITEMS"
        );
    }

    #[test]
    fn only_first_gap_becomes_underscore() {
        assert_eq!(
            SectionKey::from_header("Best Color Picks:").as_str(),
            "BEST_COLOR PICKS"
        );
    }

    #[test]
    fn whitespace_run_collapses_to_one_underscore() {
        assert_eq!(
            SectionKey::from_header("Dress \t Code:").as_str(),
            "DRESS_CODE"
        );
    }

    #[test]
    fn colon_only_header_yields_empty_key() {
        assert_eq!(SectionKey::from_header(":").as_str(), "");
    }

    #[test]
    fn label_restores_only_first_space() {
        assert_eq!(SectionKey::new("SHOPPING_ITEMS").label(), "SHOPPING ITEMS");
        assert_eq!(SectionKey::new("BEST_COLOR PICKS").label(), "BEST COLOR PICKS");
        assert_eq!(SectionKey::new("A_B_C").label(), "A B_C");
    }

    #[test]
    fn restart_clears_items_but_keeps_position() {
        let mut sections = ParsedSections::default();
        let a = SectionKey::new("A");
        let b = SectionKey::new("B");
        sections.start_section(a.clone());
        sections.push_item(&a, "x");
        sections.start_section(b.clone());
        sections.push_item(&b, "y");
        sections.start_section(a.clone());
        sections.push_item(&a, "z");

        let keys: Vec<&str> = sections.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(sections.get(&a), Some(&["z".to_string()][..]));
        assert_eq!(sections.get(&b), Some(&["y".to_string()][..]));
    }

    #[test]
    fn push_to_unknown_key_is_ignored() {
        let mut sections = ParsedSections::default();
        sections.push_item(&SectionKey::new("GHOST"), "item");
        assert!(sections.is_empty());
    }
}
