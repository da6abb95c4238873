//! Data model and read-only accessors for the bundled dataset.
//!
//! Every record is `'static`, immutable, and published before any reader
//! can observe it, so all lookups are safe from any thread. A missing
//! record is an ordinary `None`, never a failure.

pub mod data;

/// One character of an alphabet with its relative frequency in [0, 1].
/// Frequencies are not required to sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct CharFrequency {
    pub ch: &'static str,
    pub freq: f64,
}

/// Alphabet of one language in one script. Letters may be multigraphs
/// (e.g. "lj"), which is why they are strings rather than chars.
#[derive(Debug, Clone, Copy)]
pub struct Alphabet {
    pub language: &'static str,
    pub script: &'static str,
    pub uppercase: &'static [&'static str],
    pub lowercase: &'static [&'static str],
    pub frequency: &'static [CharFrequency],
    pub digits: &'static [&'static str],
}

impl Alphabet {
    /// Relative frequency of `cp`, or 0.0 when the table has no entry.
    pub fn frequency_of(&self, cp: u32) -> f64 {
        let Some(ch) = char::from_u32(cp) else {
            return 0.0;
        };
        let mut buf = [0u8; 4];
        let encoded: &str = ch.encode_utf8(&mut buf);
        self.frequency
            .iter()
            .find(|entry| entry.ch == encoded)
            .map_or(0.0, |entry| entry.freq)
    }

    /// Whether `cp` starts any lowercase letter of this alphabet.
    pub fn contains_letter(&self, cp: u32) -> bool {
        self.lowercase
            .iter()
            .any(|letter| letter.chars().next().map(|c| c as u32) == Some(cp))
    }
}

/// Token kind of a [`FrequencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    Word,
    Bigram,
}

/// Rank-ordered token list for one language; rank 0 is most frequent and
/// tokens are unique. At most one list exists per language.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyList {
    pub language: &'static str,
    pub mode: TokenMode,
    pub tokens: &'static [&'static str],
}

/// One key-code → produced-value entry of a layer. Key-codes are HID
/// usages; the same code may appear more than once in a layer when a
/// layout models dead keys or alternate sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub keycode: u16,
    pub value: &'static str,
}

/// One shift state of a layout, e.g. "base" or "shift".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayer {
    pub name: &'static str,
    pub mappings: &'static [KeyMapping],
}

/// A physical keyboard layout with its ordered layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    pub id: &'static str,
    pub name: &'static str,
    pub layers: &'static [KeyboardLayer],
}

impl KeyboardLayout {
    /// First layer with the given name, if any.
    pub fn layer(&self, name: &str) -> Option<&'static KeyboardLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}

/// Language codes with bundled records, sorted.
#[inline]
pub fn available_codes() -> &'static [&'static str] {
    data::LANGUAGE_CODES
}

/// Script codes for a language, default first. Empty when unknown.
#[inline]
pub fn scripts_for(code: &str) -> &'static [&'static str] {
    data::SCRIPT_TABLE.get(code).copied().unwrap_or(&[])
}

/// Alphabet of `code` in `script`, defaulting to the language's first
/// listed script. A language without a script entry falls back to its
/// first bundled alphabet.
pub fn load_alphabet(code: &str, script: Option<&str>) -> Option<&'static Alphabet> {
    let selected = script.or_else(|| scripts_for(code).first().copied());
    data::ALPHABETS
        .iter()
        .find(|alphabet| {
            alphabet.language == code && selected.is_none_or(|s| alphabet.script == s)
        })
}

/// Frequency list of `code`, if one is bundled.
pub fn load_frequency_list(code: &str) -> Option<&'static FrequencyList> {
    data::FREQUENCY_LISTS.iter().find(|list| list.language == code)
}

/// All bundled frequency lists in dataset order.
#[inline]
pub fn frequency_lists() -> &'static [FrequencyList] {
    data::FREQUENCY_LISTS
}

/// Layout ids with bundled records, sorted.
#[inline]
pub fn available_layouts() -> &'static [&'static str] {
    data::LAYOUT_IDS
}

/// All bundled layouts in dataset order.
#[inline]
pub fn keyboard_layouts() -> &'static [KeyboardLayout] {
    data::KEYBOARD_LAYOUTS
}

/// Layout record by id.
pub fn load_keyboard(id: &str) -> Option<&'static KeyboardLayout> {
    data::KEYBOARD_LAYOUTS.iter().find(|layout| layout.id == id)
}
