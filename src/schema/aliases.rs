//! Semantic fields, their header aliases and text normalization.
//!
//! Field recognition is data, not branching logic: each field carries a
//! list of accepted spellings, pre-normalized through the same fold that
//! is applied to incoming header cells, and membership is a set lookup.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The closed set of semantic fields a column can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Full name
    Name,
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Recurring birthday
    Birthday,
    /// Free-form address line(s); the only multi-column field
    Address,
    /// Street line
    Street,
    /// Postal code
    PostalCode,
    /// City
    City,
    /// Country
    Country,
    /// Quote/verse text
    BibleVerse,
    /// Greeting text
    Greeting,
}

impl Field {
    /// Accepted header spellings (German and English), raw form.
    /// Normalized through [`simplify`] before lookup, so diacritic
    /// variants of these spellings match as well.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name", "fullname", "vollername"],
            Self::FirstName => &["firstname", "vorname"],
            Self::LastName => &["lastname", "nachname"],
            Self::Birthday => &["birthday", "geburtstag", "dob", "geburtsdatum"],
            Self::Address => &[
                "address",
                "adresse",
                "adresszeile1",
                "adresszeile2",
                "adresszeile3",
                "addressline1",
                "addressline2",
                "addressline3",
                "adresse1",
                "adresse2",
                "anschrift",
            ],
            Self::Street => &["street", "strasse", "straße", "str"],
            Self::PostalCode => &["postalcode", "plz", "postleitzahl", "zip", "zipcode"],
            Self::City => &["city", "stadt", "ort", "ortschaft", "gemeinde"],
            Self::Country => &["country", "land"],
            Self::BibleVerse => &["bibleverse", "bibelvers", "vers", "bibelstelle", "losung"],
            Self::Greeting => &[
                "greeting",
                "gruss",
                "gruß",
                "grusswort",
                "grußwort",
                "gratulation",
                "nachricht",
                "segenswunsch",
            ],
        }
    }

    /// All fields, in alias-lookup precedence order
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::FirstName,
        Self::LastName,
        Self::Birthday,
        Self::Address,
        Self::Street,
        Self::PostalCode,
        Self::City,
        Self::Country,
        Self::BibleVerse,
        Self::Greeting,
    ];
}

/// Normalized alias -> field lookup table
pub(crate) static ALIAS_LOOKUP: Lazy<FxHashMap<String, Field>> = Lazy::new(|| {
    let mut lookup = FxHashMap::default();
    for field in Field::ALL {
        for alias in field.aliases() {
            lookup.entry(simplify(alias)).or_insert(field);
        }
    }
    lookup
});

/// Normalize text for matching: trim, lowercase, fold diacritics to their
/// base letter and drop everything outside `[a-z0-9]`.
#[must_use]
pub fn simplify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        for lower in c.to_lowercase() {
            fold_into(lower, &mut out);
        }
    }
    out
}

fn fold_into(c: char, out: &mut String) {
    match c {
        'a'..='z' | '0'..='9' => out.push(c),
        'à'..='å' | 'ā' | 'ă' | 'ą' => out.push('a'),
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => out.push('e'),
        'ì'..='ï' | 'ī' | 'į' => out.push('i'),
        'ò'..='ö' | 'ō' | 'ő' => out.push('o'),
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => out.push('u'),
        'ç' | 'ć' | 'č' => out.push('c'),
        'ñ' | 'ń' => out.push('n'),
        'ý' | 'ÿ' => out.push('y'),
        'š' | 'ś' => out.push('s'),
        'ž' | 'ź' | 'ż' => out.push('z'),
        'ß' => out.push_str("ss"),
        _ => {}
    }
}
