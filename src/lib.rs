pub mod codec;
pub mod dataset;
pub mod detect;
pub mod keyboard;
pub mod score;
pub mod tokenize;

pub use dataset::{
    Alphabet, CharFrequency, FrequencyList, KeyMapping, KeyboardLayer, KeyboardLayout, TokenMode,
    available_codes, available_layouts, load_alphabet, load_frequency_list, load_keyboard,
    scripts_for,
};
pub use detect::{DetectOptions, DetectResult, Prior, detect, detect_with};
pub use keyboard::{LayoutMatch, MatchError, find_by_keycode, find_by_keycode_into};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
