use crate::dataset::{Alphabet, FrequencyList, KeyboardLayout, TokenMode};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macros – generate the per-language static modules and the tables
/// ---------------------------------------------------------------------------
macro_rules! define_alphabets {
    ($(
        $code:ident / $script:ident : $lang:literal, $script_code:literal,
        upper: [ $($u:literal),* $(,)? ],
        lower: [ $($l:literal),* $(,)? ],
        freq: [ $( $fc:literal => $fv:literal ),* $(,)? ],
        digits: [ $($d:literal),* $(,)? ]
    ),* $(,)?) => {
        // Per-alphabet static data modules
        $(
            paste! {
                mod [<$code:lower _ $script:lower _alphabet>] {
                    use crate::dataset::CharFrequency;

                    pub static UPPER: &[&str] = &[$($u),*];
                    pub static LOWER: &[&str] = &[$($l),*];
                    pub static FREQ: &[CharFrequency] = &[
                        $(CharFrequency { ch: $fc, freq: $fv }),*
                    ];
                    pub static DIGITS: &[&str] = &[$($d),*];
                }
            }
        )*

        // Dataset-ordered table (public)
        paste! {
            pub static ALPHABETS: &[Alphabet] = &[
                $(
                    Alphabet {
                        language: $lang,
                        script: $script_code,
                        uppercase: [<$code:lower _ $script:lower _alphabet>]::UPPER,
                        lowercase: [<$code:lower _ $script:lower _alphabet>]::LOWER,
                        frequency: [<$code:lower _ $script:lower _alphabet>]::FREQ,
                        digits: [<$code:lower _ $script:lower _alphabet>]::DIGITS,
                    }
                ),*
            ];
        }
    };
}

macro_rules! define_frequency_lists {
    ($(
        $code:ident : $lang:literal, $mode:expr,
        tokens: [ $($t:literal),* $(,)? ]
    ),* $(,)?) => {
        $(
            paste! {
                mod [<$code:lower _tokens>] {
                    pub static TOKENS: &[&str] = &[$($t),*];
                }
            }
        )*

        paste! {
            pub static FREQUENCY_LISTS: &[FrequencyList] = &[
                $(
                    FrequencyList {
                        language: $lang,
                        mode: $mode,
                        tokens: [<$code:lower _tokens>]::TOKENS,
                    }
                ),*
            ];
        }
    };
}

macro_rules! mappings {
    ($($key:literal => $value:literal),* $(,)?) => {
        &[$(KeyMapping { keycode: $key, value: $value }),*]
    };
}

// ---------------------------------------------------------------------------
//    Languages and scripts
// ---------------------------------------------------------------------------

pub static LANGUAGE_CODES: &[&str] = &[
    "de", "en", "es", "fr", "it", "ja", "nl", "pt", "ru", "sr", "zh",
];

// First script is the default for the language.
pub static SCRIPT_TABLE: Map<&'static str, &'static [&'static str]> = phf_map! {
    "de" => &["Latn"],
    "en" => &["Latn"],
    "es" => &["Latn"],
    "fr" => &["Latn"],
    "it" => &["Latn"],
    "ja" => &["Jpan"],
    "nl" => &["Latn"],
    "pt" => &["Latn"],
    "ru" => &["Cyrl"],
    "sr" => &["Cyrl", "Latn"],
    "zh" => &["Hani"],
};

// ---------------------------------------------------------------------------
//    Alphabets (letter frequencies are relative, they need not sum to 1)
// ---------------------------------------------------------------------------

define_alphabets! {
    de / Latn: "de", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
            "Ä", "Ö", "Ü",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
            "ä", "ö", "ü", "ß",
        ],
        freq: [
            "e" => 0.1740, "n" => 0.0978, "i" => 0.0755, "s" => 0.0727,
            "r" => 0.0700, "a" => 0.0651, "t" => 0.0615, "d" => 0.0508,
            "h" => 0.0476, "u" => 0.0435, "l" => 0.0344, "c" => 0.0306,
            "g" => 0.0301, "m" => 0.0253, "o" => 0.0251, "b" => 0.0189,
            "w" => 0.0189, "f" => 0.0166, "k" => 0.0121, "z" => 0.0113,
            "p" => 0.0079, "v" => 0.0067, "ü" => 0.0065, "ä" => 0.0054,
            "ß" => 0.0031, "ö" => 0.0030, "j" => 0.0027,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    en / Latn: "en", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ],
        freq: [
            "e" => 0.1270, "t" => 0.0906, "a" => 0.0817, "o" => 0.0751,
            "i" => 0.0697, "n" => 0.0675, "s" => 0.0633, "h" => 0.0609,
            "r" => 0.0599, "d" => 0.0425, "l" => 0.0403, "c" => 0.0278,
            "u" => 0.0276, "m" => 0.0241, "w" => 0.0236, "f" => 0.0223,
            "g" => 0.0202, "y" => 0.0197, "p" => 0.0193, "b" => 0.0149,
            "v" => 0.0098, "k" => 0.0077, "j" => 0.0015, "x" => 0.0015,
            "q" => 0.0010, "z" => 0.0007,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    es / Latn: "es", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "Ñ", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y",
            "Z", "Á", "É", "Í", "Ó", "Ú", "Ü",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "ñ", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y",
            "z", "á", "é", "í", "ó", "ú", "ü",
        ],
        freq: [
            "e" => 0.1368, "a" => 0.1253, "o" => 0.0868, "s" => 0.0798,
            "r" => 0.0687, "n" => 0.0671, "i" => 0.0625, "d" => 0.0586,
            "l" => 0.0497, "c" => 0.0468, "t" => 0.0463, "u" => 0.0393,
            "m" => 0.0315, "p" => 0.0251, "b" => 0.0142, "g" => 0.0101,
            "v" => 0.0090, "y" => 0.0090, "q" => 0.0088, "ó" => 0.0083,
            "í" => 0.0073, "h" => 0.0070, "f" => 0.0069, "z" => 0.0052,
            "á" => 0.0050, "j" => 0.0044, "é" => 0.0043, "ñ" => 0.0031,
            "x" => 0.0022, "ú" => 0.0016,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    fr / Latn: "fr", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
            "À", "Â", "Æ", "Ç", "È", "É", "Ê", "Ë", "Î", "Ï", "Ô", "Œ", "Ù",
            "Û", "Ü", "Ÿ",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
            "à", "â", "æ", "ç", "è", "é", "ê", "ë", "î", "ï", "ô", "œ", "ù",
            "û", "ü", "ÿ",
        ],
        freq: [
            "e" => 0.1471, "s" => 0.0790, "a" => 0.0764, "i" => 0.0753,
            "t" => 0.0724, "n" => 0.0709, "r" => 0.0666, "u" => 0.0631,
            "l" => 0.0546, "o" => 0.0540, "d" => 0.0367, "c" => 0.0326,
            "m" => 0.0297, "p" => 0.0252, "é" => 0.0190, "v" => 0.0183,
            "q" => 0.0136, "f" => 0.0107, "b" => 0.0090, "g" => 0.0087,
            "h" => 0.0074, "j" => 0.0061, "à" => 0.0049, "x" => 0.0043,
            "z" => 0.0033, "è" => 0.0027, "ê" => 0.0022, "y" => 0.0013,
            "ç" => 0.0009, "w" => 0.0005,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    it / Latn: "it", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "L", "M", "N", "O",
            "P", "Q", "R", "S", "T", "U", "V", "Z", "À", "È", "É", "Ì", "Ò",
            "Ù",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "l", "m", "n", "o",
            "p", "q", "r", "s", "t", "u", "v", "z", "à", "è", "é", "ì", "ò",
            "ù",
        ],
        freq: [
            "e" => 0.1179, "a" => 0.1174, "i" => 0.1128, "o" => 0.0983,
            "n" => 0.0688, "l" => 0.0651, "r" => 0.0637, "t" => 0.0562,
            "s" => 0.0498, "c" => 0.0450, "d" => 0.0373, "p" => 0.0305,
            "u" => 0.0301, "m" => 0.0251, "v" => 0.0210, "g" => 0.0164,
            "f" => 0.0095, "b" => 0.0092, "h" => 0.0064, "q" => 0.0051,
            "z" => 0.0049, "è" => 0.0042, "ì" => 0.0030, "ò" => 0.0020,
            "à" => 0.0015, "ù" => 0.0012,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    ja / Jpan: "ja", "Jpan",
        upper: [],
        lower: [
            "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ",
            "さ", "し", "す", "せ", "そ", "た", "ち", "つ", "て", "と",
            "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ",
            "ま", "み", "む", "め", "も", "や", "ゆ", "よ", "ら", "り",
            "る", "れ", "ろ", "わ", "を", "ん",
        ],
        freq: [
            "い" => 0.0664, "ん" => 0.0578, "の" => 0.0482, "か" => 0.0455,
            "し" => 0.0442, "た" => 0.0440, "と" => 0.0403, "う" => 0.0368,
            "て" => 0.0358, "な" => 0.0347, "に" => 0.0334, "き" => 0.0259,
            "こ" => 0.0256, "る" => 0.0255, "は" => 0.0234, "が" => 0.0227,
            "す" => 0.0226, "ま" => 0.0211, "で" => 0.0178, "ち" => 0.0150,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    nl / Latn: "nl", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
            "IJ",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
            "ij",
        ],
        freq: [
            "e" => 0.1891, "n" => 0.1003, "a" => 0.0749, "t" => 0.0679,
            "i" => 0.0650, "r" => 0.0641, "o" => 0.0606, "d" => 0.0593,
            "s" => 0.0373, "l" => 0.0357, "g" => 0.0340, "v" => 0.0285,
            "h" => 0.0238, "k" => 0.0225, "m" => 0.0221, "u" => 0.0199,
            "b" => 0.0158, "p" => 0.0157, "w" => 0.0152, "j" => 0.0146,
            "z" => 0.0139, "c" => 0.0124, "f" => 0.0081, "y" => 0.0035,
            "x" => 0.0004, "q" => 0.0001,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    pt / Latn: "pt", "Latn",
        upper: [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
            "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
            "À", "Á", "Â", "Ã", "Ç", "É", "Ê", "Í", "Ó", "Ô", "Õ", "Ú",
        ],
        lower: [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
            "à", "á", "â", "ã", "ç", "é", "ê", "í", "ó", "ô", "õ", "ú",
        ],
        freq: [
            "a" => 0.1463, "e" => 0.1257, "o" => 0.1073, "s" => 0.0781,
            "r" => 0.0653, "i" => 0.0618, "n" => 0.0505, "d" => 0.0499,
            "m" => 0.0474, "u" => 0.0463, "t" => 0.0434, "c" => 0.0388,
            "l" => 0.0278, "p" => 0.0252, "v" => 0.0167, "g" => 0.0130,
            "h" => 0.0128, "q" => 0.0120, "b" => 0.0104, "f" => 0.0102,
            "ã" => 0.0073, "ç" => 0.0053, "z" => 0.0047, "á" => 0.0047,
            "é" => 0.0045, "ê" => 0.0045, "j" => 0.0040, "õ" => 0.0040,
            "x" => 0.0021, "í" => 0.0013,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    ru / Cyrl: "ru", "Cyrl",
        upper: [
            "А", "Б", "В", "Г", "Д", "Е", "Ё", "Ж", "З", "И", "Й", "К", "Л",
            "М", "Н", "О", "П", "Р", "С", "Т", "У", "Ф", "Х", "Ц", "Ч", "Ш",
            "Щ", "Ъ", "Ы", "Ь", "Э", "Ю", "Я",
        ],
        lower: [
            "а", "б", "в", "г", "д", "е", "ё", "ж", "з", "и", "й", "к", "л",
            "м", "н", "о", "п", "р", "с", "т", "у", "ф", "х", "ц", "ч", "ш",
            "щ", "ъ", "ы", "ь", "э", "ю", "я",
        ],
        freq: [
            "о" => 0.1097, "е" => 0.0845, "а" => 0.0801, "и" => 0.0735,
            "н" => 0.0670, "т" => 0.0626, "с" => 0.0547, "р" => 0.0473,
            "в" => 0.0454, "л" => 0.0440, "к" => 0.0349, "м" => 0.0321,
            "д" => 0.0298, "п" => 0.0281, "у" => 0.0262, "я" => 0.0201,
            "ы" => 0.0190, "ь" => 0.0174, "г" => 0.0170, "з" => 0.0165,
            "б" => 0.0159, "ч" => 0.0144, "й" => 0.0121, "х" => 0.0097,
            "ж" => 0.0094, "ш" => 0.0073, "ю" => 0.0064, "ц" => 0.0048,
            "щ" => 0.0036, "э" => 0.0032, "ф" => 0.0026, "ё" => 0.0004,
            "ъ" => 0.0004,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    sr / Cyrl: "sr", "Cyrl",
        upper: [
            "А", "Б", "В", "Г", "Д", "Ђ", "Е", "Ж", "З", "И", "Ј", "К", "Л",
            "Љ", "М", "Н", "Њ", "О", "П", "Р", "С", "Т", "Ћ", "У", "Ф", "Х",
            "Ц", "Ч", "Џ", "Ш",
        ],
        lower: [
            "а", "б", "в", "г", "д", "ђ", "е", "ж", "з", "и", "ј", "к", "л",
            "љ", "м", "н", "њ", "о", "п", "р", "с", "т", "ћ", "у", "ф", "х",
            "ц", "ч", "џ", "ш",
        ],
        freq: [
            "а" => 0.1151, "и" => 0.0981, "о" => 0.0911, "е" => 0.0843,
            "н" => 0.0547, "с" => 0.0510, "р" => 0.0500, "ј" => 0.0461,
            "т" => 0.0452, "у" => 0.0430, "д" => 0.0378, "к" => 0.0362,
            "м" => 0.0339, "п" => 0.0273, "в" => 0.0269, "л" => 0.0244,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    sr / Latn: "sr", "Latn",
        upper: [
            "A", "B", "C", "Č", "Ć", "D", "Dž", "Đ", "E", "F", "G", "H", "I",
            "J", "K", "L", "Lj", "M", "N", "Nj", "O", "P", "R", "S", "Š",
            "T", "U", "V", "Z", "Ž",
        ],
        lower: [
            "a", "b", "c", "č", "ć", "d", "dž", "đ", "e", "f", "g", "h", "i",
            "j", "k", "l", "lj", "m", "n", "nj", "o", "p", "r", "s", "š",
            "t", "u", "v", "z", "ž",
        ],
        freq: [
            "a" => 0.1151, "i" => 0.0981, "o" => 0.0911, "e" => 0.0843,
            "n" => 0.0547, "s" => 0.0510, "r" => 0.0500, "j" => 0.0461,
            "t" => 0.0452, "u" => 0.0430, "d" => 0.0378, "k" => 0.0362,
            "m" => 0.0339, "p" => 0.0273, "v" => 0.0269, "l" => 0.0244,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],

    zh / Hani: "zh", "Hani",
        upper: [],
        lower: [
            "的", "一", "是", "不", "了", "人", "我", "在", "有", "他",
            "这", "个", "们", "中", "来", "上", "大", "为", "和", "国",
            "地", "到", "以", "说", "时", "要", "就", "出", "会", "你",
        ],
        freq: [
            "的" => 0.0417, "一" => 0.0171, "是" => 0.0158, "不" => 0.0151,
            "了" => 0.0126, "在" => 0.0118, "人" => 0.0108, "有" => 0.0106,
            "我" => 0.0100, "他" => 0.0096, "这" => 0.0092, "个" => 0.0088,
            "们" => 0.0083, "中" => 0.0075, "来" => 0.0071, "上" => 0.0068,
            "大" => 0.0065, "为" => 0.0060, "和" => 0.0057, "国" => 0.0055,
        ],
        digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
}

// ---------------------------------------------------------------------------
//    Frequency lists (rank 0 = most frequent; bigram tokens are 2 codepoints)
// ---------------------------------------------------------------------------

define_frequency_lists! {
    de: "de", TokenMode::Word,
        tokens: [
            "der", "die", "und", "in", "den", "von", "zu", "das", "mit",
            "sich", "des", "auf", "für", "ist", "im", "dem", "nicht", "ein",
            "eine", "als", "auch", "es", "an", "werden", "aus", "er", "hat",
            "dass", "sie", "nach",
        ],

    en: "en", TokenMode::Word,
        tokens: [
            "the", "of", "and", "to", "a", "in", "is", "you", "that", "it",
            "he", "was", "for", "on", "are", "as", "with", "his", "they",
            "at", "be", "this", "have", "from", "or", "one", "had", "by",
            "but", "not",
        ],

    es: "es", TokenMode::Word,
        tokens: [
            "de", "la", "que", "el", "en", "y", "a", "los", "se", "del",
            "las", "un", "por", "con", "no", "una", "su", "para", "es",
            "al", "lo", "como", "más", "pero", "sus", "le", "ha", "me",
            "si", "sin",
        ],

    fr: "fr", TokenMode::Word,
        tokens: [
            "de", "la", "le", "et", "les", "des", "en", "un", "du", "une",
            "que", "est", "pour", "qui", "dans", "par", "plus", "pas", "au",
            "sur", "ne", "se", "ce", "il", "sont", "mais", "nous", "comme",
            "ou", "si",
        ],

    it: "it", TokenMode::Word,
        tokens: [
            "di", "e", "il", "la", "che", "a", "in", "per", "un", "è",
            "con", "non", "le", "si", "da", "come", "io", "questo", "ma",
            "se", "sono", "mi", "ho", "lo", "ha", "più", "al", "dei",
            "nel", "anche",
        ],

    ja: "ja", TokenMode::Bigram,
        tokens: [
            "して", "いる", "です", "ます", "こと", "した", "ない", "ある",
            "から", "する", "てい", "れる", "こん", "んに", "にち", "ちは",
            "とう", "ござ", "あり", "せん", "まし", "たら", "なり", "もの",
        ],

    nl: "nl", TokenMode::Word,
        tokens: [
            "de", "van", "het", "een", "en", "in", "is", "dat", "op", "te",
            "zijn", "met", "die", "voor", "aan", "niet", "er", "om", "ook",
            "als", "dan", "maar", "bij", "of", "uit", "nog", "naar",
            "heeft", "worden", "wordt",
        ],

    pt: "pt", TokenMode::Word,
        tokens: [
            "de", "a", "o", "que", "e", "do", "da", "em", "um", "para",
            "com", "não", "uma", "os", "no", "se", "na", "por", "mais",
            "as", "dos", "como", "mas", "ao", "ele", "das", "à", "seu",
            "sua", "ou",
        ],

    ru: "ru", TokenMode::Word,
        tokens: [
            "и", "в", "не", "на", "я", "быть", "он", "с", "что", "а",
            "по", "это", "она", "этот", "к", "но", "они", "мы", "как",
            "из", "у", "который", "то", "за", "свой", "весь", "год",
            "от", "так", "о",
        ],

    zh: "zh", TokenMode::Bigram,
        tokens: [
            "你好", "我们", "他们", "没有", "什么", "一个", "可以", "自己",
            "现在", "知道", "因为", "所以", "时候", "还是", "这个", "已经",
            "如果", "觉得", "开始", "世界",
        ],
}

// ---------------------------------------------------------------------------
//    Keyboard layouts (key-codes are HID usages; layouts may repeat a
//    key-code within a layer to model dead keys)
// ---------------------------------------------------------------------------

mod de_qwertz {
    use crate::dataset::{KeyMapping, KeyboardLayer};

    pub static BASE: &[KeyMapping] = mappings![
        0x04 => "a", 0x05 => "b", 0x06 => "c", 0x07 => "d", 0x08 => "e",
        0x09 => "f", 0x0A => "g", 0x0B => "h", 0x0C => "i", 0x0D => "j",
        0x0E => "k", 0x0F => "l", 0x10 => "m", 0x11 => "n", 0x12 => "o",
        0x13 => "p", 0x14 => "q", 0x15 => "r", 0x16 => "s", 0x17 => "t",
        0x18 => "u", 0x19 => "v", 0x1A => "w", 0x1B => "x", 0x1C => "z",
        0x1D => "y",
        0x1E => "1", 0x1F => "2", 0x20 => "3", 0x21 => "4", 0x22 => "5",
        0x23 => "6", 0x24 => "7", 0x25 => "8", 0x26 => "9", 0x27 => "0",
        0x2D => "ß", 0x2E => "´", 0x2F => "ü", 0x30 => "+", 0x33 => "ö",
        0x34 => "ä", 0x35 => "^", 0x36 => ",", 0x37 => ".", 0x38 => "-",
        0x64 => "<",
    ];

    pub static SHIFT: &[KeyMapping] = mappings![
        0x04 => "A", 0x05 => "B", 0x06 => "C", 0x07 => "D", 0x08 => "E",
        0x09 => "F", 0x0A => "G", 0x0B => "H", 0x0C => "I", 0x0D => "J",
        0x0E => "K", 0x0F => "L", 0x10 => "M", 0x11 => "N", 0x12 => "O",
        0x13 => "P", 0x14 => "Q", 0x15 => "R", 0x16 => "S", 0x17 => "T",
        0x18 => "U", 0x19 => "V", 0x1A => "W", 0x1B => "X", 0x1C => "Z",
        0x1D => "Y",
        0x1E => "!", 0x1F => "\"", 0x20 => "§", 0x21 => "$", 0x22 => "%",
        0x23 => "&", 0x24 => "/", 0x25 => "(", 0x26 => ")", 0x27 => "=",
        0x2D => "?", 0x2E => "`", 0x2F => "Ü", 0x30 => "*", 0x33 => "Ö",
        0x34 => "Ä", 0x35 => "°", 0x36 => ";", 0x37 => ":", 0x38 => "_",
        0x64 => ">",
    ];

    pub static LAYERS: &[KeyboardLayer] = &[
        KeyboardLayer { name: "base", mappings: BASE },
        KeyboardLayer { name: "shift", mappings: SHIFT },
    ];
}

mod fr_azerty {
    use crate::dataset::{KeyMapping, KeyboardLayer};

    // 0x2F carries both the spacing accent and its combining form.
    pub static BASE: &[KeyMapping] = mappings![
        0x04 => "q", 0x05 => "b", 0x06 => "c", 0x07 => "d", 0x08 => "e",
        0x09 => "f", 0x0A => "g", 0x0B => "h", 0x0C => "i", 0x0D => "j",
        0x0E => "k", 0x0F => "l", 0x10 => ",", 0x11 => "n", 0x12 => "o",
        0x13 => "p", 0x14 => "a", 0x15 => "r", 0x16 => "s", 0x17 => "t",
        0x18 => "u", 0x19 => "v", 0x1A => "z", 0x1B => "x", 0x1C => "y",
        0x1D => "w",
        0x1E => "&", 0x1F => "é", 0x20 => "\"", 0x21 => "'", 0x22 => "(",
        0x23 => "-", 0x24 => "è", 0x25 => "_", 0x26 => "ç", 0x27 => "à",
        0x2D => ")", 0x2E => "=", 0x2F => "^", 0x2F => "\u{0302}",
        0x30 => "$", 0x33 => "m", 0x34 => "ù", 0x35 => "²", 0x36 => ";",
        0x37 => ":", 0x38 => "!", 0x64 => "<",
    ];

    pub static SHIFT: &[KeyMapping] = mappings![
        0x04 => "Q", 0x05 => "B", 0x06 => "C", 0x07 => "D", 0x08 => "E",
        0x09 => "F", 0x0A => "G", 0x0B => "H", 0x0C => "I", 0x0D => "J",
        0x0E => "K", 0x0F => "L", 0x10 => "?", 0x11 => "N", 0x12 => "O",
        0x13 => "P", 0x14 => "A", 0x15 => "R", 0x16 => "S", 0x17 => "T",
        0x18 => "U", 0x19 => "V", 0x1A => "Z", 0x1B => "X", 0x1C => "Y",
        0x1D => "W",
        0x1E => "1", 0x1F => "2", 0x20 => "3", 0x21 => "4", 0x22 => "5",
        0x23 => "6", 0x24 => "7", 0x25 => "8", 0x26 => "9", 0x27 => "0",
        0x2D => "°", 0x2E => "+", 0x2F => "¨", 0x2F => "\u{0308}",
        0x30 => "£", 0x33 => "M", 0x34 => "%", 0x36 => ".", 0x37 => "/",
        0x38 => "§", 0x64 => ">",
    ];

    pub static LAYERS: &[KeyboardLayer] = &[
        KeyboardLayer { name: "base", mappings: BASE },
        KeyboardLayer { name: "shift", mappings: SHIFT },
    ];
}

mod us_qwerty {
    use crate::dataset::{KeyMapping, KeyboardLayer};

    pub static BASE: &[KeyMapping] = mappings![
        0x04 => "a", 0x05 => "b", 0x06 => "c", 0x07 => "d", 0x08 => "e",
        0x09 => "f", 0x0A => "g", 0x0B => "h", 0x0C => "i", 0x0D => "j",
        0x0E => "k", 0x0F => "l", 0x10 => "m", 0x11 => "n", 0x12 => "o",
        0x13 => "p", 0x14 => "q", 0x15 => "r", 0x16 => "s", 0x17 => "t",
        0x18 => "u", 0x19 => "v", 0x1A => "w", 0x1B => "x", 0x1C => "y",
        0x1D => "z",
        0x1E => "1", 0x1F => "2", 0x20 => "3", 0x21 => "4", 0x22 => "5",
        0x23 => "6", 0x24 => "7", 0x25 => "8", 0x26 => "9", 0x27 => "0",
        0x2D => "-", 0x2E => "=", 0x2F => "[", 0x30 => "]", 0x31 => "\\",
        0x33 => ";", 0x34 => "'", 0x35 => "`", 0x36 => ",", 0x37 => ".",
        0x38 => "/",
    ];

    pub static SHIFT: &[KeyMapping] = mappings![
        0x04 => "A", 0x05 => "B", 0x06 => "C", 0x07 => "D", 0x08 => "E",
        0x09 => "F", 0x0A => "G", 0x0B => "H", 0x0C => "I", 0x0D => "J",
        0x0E => "K", 0x0F => "L", 0x10 => "M", 0x11 => "N", 0x12 => "O",
        0x13 => "P", 0x14 => "Q", 0x15 => "R", 0x16 => "S", 0x17 => "T",
        0x18 => "U", 0x19 => "V", 0x1A => "W", 0x1B => "X", 0x1C => "Y",
        0x1D => "Z",
        0x1E => "!", 0x1F => "@", 0x20 => "#", 0x21 => "$", 0x22 => "%",
        0x23 => "^", 0x24 => "&", 0x25 => "*", 0x26 => "(", 0x27 => ")",
        0x2D => "_", 0x2E => "+", 0x2F => "{", 0x30 => "}", 0x31 => "|",
        0x33 => ":", 0x34 => "\"", 0x35 => "~", 0x36 => "<", 0x37 => ">",
        0x38 => "?",
    ];

    pub static LAYERS: &[KeyboardLayer] = &[
        KeyboardLayer { name: "base", mappings: BASE },
        KeyboardLayer { name: "shift", mappings: SHIFT },
    ];
}

pub static KEYBOARD_LAYOUTS: &[KeyboardLayout] = &[
    KeyboardLayout {
        id: "de-german-standard-qwertz",
        name: "German (Standard, QWERTZ)",
        layers: de_qwertz::LAYERS,
    },
    KeyboardLayout {
        id: "fr-french-standard-azerty",
        name: "French (Standard, AZERTY)",
        layers: fr_azerty::LAYERS,
    },
    KeyboardLayout {
        id: "us-english-qwerty",
        name: "English (US, QWERTY)",
        layers: us_qwerty::LAYERS,
    },
];

pub static LAYOUT_IDS: &[&str] = &[
    "de-german-standard-qwertz",
    "fr-french-standard-azerty",
    "us-english-qwerty",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn language_codes_are_sorted_and_unique() {
        let mut sorted = LANGUAGE_CODES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, LANGUAGE_CODES);
    }

    #[test]
    fn language_script_pairs_are_unique() {
        let mut seen = BTreeSet::new();
        for alphabet in ALPHABETS {
            assert!(
                seen.insert((alphabet.language, alphabet.script)),
                "duplicate alphabet {}/{}",
                alphabet.language,
                alphabet.script
            );
        }
    }

    #[test]
    fn every_alphabet_language_has_scripts() {
        for alphabet in ALPHABETS {
            let scripts = SCRIPT_TABLE
                .get(alphabet.language)
                .unwrap_or_else(|| panic!("no script entry for {}", alphabet.language));
            assert!(!scripts.is_empty());
            assert!(scripts.contains(&alphabet.script));
        }
    }

    #[test]
    fn at_most_one_frequency_list_per_language() {
        let mut seen = BTreeSet::new();
        for list in FREQUENCY_LISTS {
            assert!(seen.insert(list.language), "duplicate list for {}", list.language);
            assert!(!list.tokens.is_empty());
        }
    }

    #[test]
    fn frequency_list_tokens_are_unique() {
        for list in FREQUENCY_LISTS {
            let unique: BTreeSet<_> = list.tokens.iter().collect();
            assert_eq!(
                unique.len(),
                list.tokens.len(),
                "duplicate token in {} list",
                list.language
            );
        }
    }

    #[test]
    fn bigram_tokens_are_two_codepoints() {
        for list in FREQUENCY_LISTS {
            if list.mode != TokenMode::Bigram {
                continue;
            }
            for token in list.tokens {
                assert_eq!(token.chars().count(), 2, "bigram {token:?} in {}", list.language);
            }
        }
    }

    #[test]
    fn frequencies_are_normalized_weights() {
        for alphabet in ALPHABETS {
            for entry in alphabet.frequency {
                assert!(entry.freq > 0.0 && entry.freq <= 1.0);
            }
        }
    }

    #[test]
    fn layout_ids_match_table_order() {
        let ids: Vec<_> = KEYBOARD_LAYOUTS.iter().map(|l| l.id).collect();
        assert_eq!(ids, LAYOUT_IDS);
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn every_layout_has_a_base_layer() {
        for layout in KEYBOARD_LAYOUTS {
            assert!(
                layout.layers.iter().any(|layer| layer.name == "base"),
                "{} has no base layer",
                layout.id
            );
        }
    }
}
