//! Line-oriented parser for sectioned stylist advice.
//!
//! Single pass over the lines with a two-state machine: a trimmed line ending
//! in `:` always starts a new section, and any other non-empty line while a
//! section is open becomes one item in it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sections::{ParsedSections, SectionKey};

/// Optional leading bullet marker on an item line.
static BULLET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•]\s*").unwrap());

enum ParserState {
    AwaitingHeader,
    InSection(SectionKey),
}

/// Parse sectioned advice text into an ordered section map.
///
/// Total over any input: there is no malformed text, only lines that are
/// dropped. Empty lines and lines before the first header are discarded.
/// Header detection takes priority, so a line ending in `:` starts a new
/// section even when it could read as an item.
pub fn parse(text: &str) -> ParsedSections {
    let mut sections = ParsedSections::default();
    let mut state = ParserState::AwaitingHeader;

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.ends_with(':') {
            let key = SectionKey::from_header(line);
            sections.start_section(key.clone());
            state = ParserState::InSection(key);
        } else if let ParserState::InSection(key) = &state {
            if !line.is_empty() {
                let item = BULLET_PATTERN.replace(line, "");
                sections.push_item(key, item.into_owned());
            }
        }
    }

    sections
}
