//! Content enrichment: resolved verse and greeting text per matched record.
//!
//! Records that carry their own text keep it (greetings after placeholder
//! substitution); the rest receive defaults selected by batch position,
//! `index mod defaults-length`. The cycle depends only on batch order, so
//! the same input produces the same output on every run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EnrichedRecord, MatchedRecord};

/// Default verses, used in rotation when a record has none of its own
pub const DEFAULT_BIBLE_VERSES: [&str; 5] = [
    "Denn ich weiß wohl, was ich für Gedanken über euch habe, spricht der HERR: Gedanken des Friedens und nicht des Leides, dass ich euch gebe Zukunft und Hoffnung. (Jeremia 29,11)",
    "Der HERR ist meine Stärke und mein Schild; auf ihn hofft mein Herz, und mir ist geholfen. (Psalm 28,7)",
    "Der HERR segne dich und behüte dich; der HERR lasse sein Angesicht leuchten über dir und sei dir gnädig. (4. Mose 6,24-25)",
    "Gott ist unsere Zuflucht und Stärke, eine Hilfe in Nöten, wohl bewährt. (Psalm 46,2)",
    "Denn du bist meine Zuversicht, HERR; du bist meine Hoffnung von Jugend auf. (Psalm 71,5)",
];

/// A default text entry: either a fixed string or a template over the record
#[derive(Clone, Copy)]
pub enum DefaultText {
    /// Fixed text, used as-is
    Static(&'static str),
    /// Text computed from the record
    Template(fn(&MatchedRecord) -> String),
}

impl DefaultText {
    /// Resolve the entry against a record
    #[must_use]
    pub fn resolve(&self, record: &MatchedRecord) -> String {
        match self {
            Self::Static(text) => (*text).to_string(),
            Self::Template(template) => template(record),
        }
    }
}

/// Default greetings, used in rotation when a record has none of its own
pub const DEFAULT_GREETINGS: [DefaultText; 5] = [
    DefaultText::Template(greeting_strength),
    DefaultText::Template(greeting_nearness),
    DefaultText::Template(greeting_wisdom),
    DefaultText::Template(greeting_abundance),
    DefaultText::Template(greeting_protection),
];

/// First name when present, full name otherwise
fn salutation(record: &MatchedRecord) -> &str {
    if record.person.first_name.is_empty() {
        &record.person.name
    } else {
        &record.person.first_name
    }
}

fn greeting_strength(record: &MatchedRecord) -> String {
    format!(
        "Liebe(r) {}, möge Gottes Güte dich an deinem Geburtstag ganz besonders umgeben und dir neue Kraft schenken.",
        salutation(record)
    )
}

fn greeting_nearness(record: &MatchedRecord) -> String {
    format!(
        "Herzlichen Glückwunsch, {}! Wir freuen uns mit dir und beten, dass du in diesem neuen Lebensjahr Gottes Nähe ganz intensiv erlebst.",
        salutation(record)
    )
}

fn greeting_wisdom(record: &MatchedRecord) -> String {
    format!(
        "{}, von Herzen alles Gute! Möge der Herr dir Weisheit, Freude und Mut für jeden Tag schenken.",
        salutation(record)
    )
}

fn greeting_abundance(record: &MatchedRecord) -> String {
    format!(
        "Zum Geburtstag wünschen wir dir, {}, dass du überreich beschenkt wirst mit Segen, Frieden und liebevollen Momenten.",
        salutation(record)
    )
}

fn greeting_protection(record: &MatchedRecord) -> String {
    format!(
        "Gesegneten Geburtstag, {}! Gott halte seine schützende Hand über dir und erfülle dein Herz mit Hoffnung.",
        salutation(record)
    )
}

static NAME_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*name\s*\}\}").unwrap());
static FIRST_NAME_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*(?:firstname|vorname)\s*\}\}").unwrap());

/// Substitute `{{name}}` and `{{firstname}}`/`{{vorname}}` placeholders,
/// case-insensitively; the first-name placeholder falls back to the full
/// name when the record has no first name.
#[must_use]
pub fn substitute_placeholders(text: &str, record: &MatchedRecord) -> String {
    let with_name =
        NAME_PLACEHOLDER.replace_all(text, regex::NoExpand(record.person.name.as_str()));
    FIRST_NAME_PLACEHOLDER
        .replace_all(&with_name, regex::NoExpand(salutation(record)))
        .into_owned()
}

/// Resolve verse and greeting text for every matched record
#[must_use]
pub fn enrich_records(matches: Vec<MatchedRecord>) -> Vec<EnrichedRecord> {
    matches
        .into_iter()
        .enumerate()
        .map(|(index, matched)| {
            let own_verse = matched.person.bible_verse.trim();
            let bible_verse = if own_verse.is_empty() {
                DEFAULT_BIBLE_VERSES[index % DEFAULT_BIBLE_VERSES.len()].to_string()
            } else {
                own_verse.to_string()
            };

            let own_greeting = matched.person.greeting.trim();
            let greeting = if own_greeting.is_empty() {
                DEFAULT_GREETINGS[index % DEFAULT_GREETINGS.len()].resolve(&matched)
            } else {
                substitute_placeholders(own_greeting, &matched)
            };

            EnrichedRecord {
                matched,
                bible_verse,
                greeting,
            }
        })
        .collect()
}
