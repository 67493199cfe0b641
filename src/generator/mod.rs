//! Random password and passphrase generation, plus strength scoring.
//!
//! Stateless utilities: nothing here touches the vault or the key.
//! The strength heuristic is also reused by the vault's weak-password
//! statistic, so its scoring must stay stable.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Uppercase pool.
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase pool.
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Digit pool.
const DIGITS: &str = "0123456789";
/// Symbol pool.  Also the reference set for the strength heuristic.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually confusable characters removed by the ambiguous filter.
/// Applies to the letter and digit pools only, never to symbols.
const AMBIGUOUS: &str = "0OoIl1";

/// Word list for passphrase generation.
const WORDS: [&str; 30] = [
    "apple", "banana", "cherry", "dragon", "eagle", "forest", "galaxy", "harbor", "island",
    "jungle", "kitten", "lemon", "mountain", "nebula", "ocean", "phoenix", "quantum", "rainbow",
    "sunset", "thunder", "unicorn", "volcano", "waterfall", "yellow", "zebra", "alpha", "bravo",
    "charlie", "delta", "echo",
];

/// Knobs for `generate`.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Requested output length.  If fewer than the number of enabled
    /// classes, the output is as long as the class count instead.
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop `0 O o I l 1` from the letter and digit pools.
    pub exclude_ambiguous: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
        }
    }
}

impl GeneratorOptions {
    /// Numeric PIN: 6 digits.
    pub fn pin() -> Self {
        Self {
            length: 6,
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
            ..Self::default()
        }
    }

    /// Easier to type: 12 characters, no symbols.
    pub fn simple() -> Self {
        Self {
            length: 12,
            symbols: false,
            ..Self::default()
        }
    }

    /// Maximum-strength preset: 20 characters, every class.
    pub fn strong() -> Self {
        Self {
            length: 20,
            ..Self::default()
        }
    }
}

/// Remove ambiguous characters from a pool if the option asks for it.
fn filtered(pool: &str, exclude_ambiguous: bool) -> Vec<char> {
    pool.chars()
        .filter(|c| !exclude_ambiguous || !AMBIGUOUS.contains(*c))
        .collect()
}

/// Generate a random password honoring the given options.
///
/// Guarantees at least one character from every enabled class, fills
/// the rest uniformly from the union of enabled pools, and shuffles the
/// result so class positions are unpredictable.  With no class enabled
/// the result is the empty string.
pub fn generate(options: &GeneratorOptions) -> String {
    let mut rng = rand::rng();

    let mut union: Vec<char> = Vec::new();
    let mut password: Vec<char> = Vec::new();

    // One guaranteed representative per enabled class.
    let mut enable = |pool: Vec<char>| {
        if let Some(c) = pool.choose(&mut rng) {
            password.push(*c);
        }
        union.extend(pool);
    };

    if options.uppercase {
        enable(filtered(UPPERCASE, options.exclude_ambiguous));
    }
    if options.lowercase {
        enable(filtered(LOWERCASE, options.exclude_ambiguous));
    }
    if options.digits {
        enable(filtered(DIGITS, options.exclude_ambiguous));
    }
    if options.symbols {
        // The symbol pool is never ambiguous-filtered.
        enable(SYMBOLS.chars().collect());
    }

    if union.is_empty() {
        return String::new();
    }

    // Fill the remainder from the union pool, with replacement.
    let remaining = options.length.saturating_sub(password.len());
    for _ in 0..remaining {
        if let Some(c) = union.choose(&mut rng) {
            password.push(*c);
        }
    }

    password.shuffle(&mut rng);
    password.into_iter().collect()
}

/// Generate a word-based passphrase.
///
/// Draws `word_count` words uniformly with replacement (duplicates are
/// fine), capitalizes each, appends a random number in 0..=999 as a
/// final token, and joins everything with `separator`.
pub fn generate_passphrase(word_count: usize, separator: &str) -> String {
    let mut rng = rand::rng();

    let mut tokens: Vec<String> = Vec::with_capacity(word_count + 1);
    for _ in 0..word_count {
        if let Some(word) = WORDS.choose(&mut rng) {
            tokens.push(capitalize(word));
        }
    }

    tokens.push(rng.random_range(0..=999u32).to_string());
    tokens.join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Heuristic strength classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a password: one point per satisfied condition (three length
/// thresholds, four character classes), then bucket the 0..=7 total.
pub fn strength(password: &str) -> Strength {
    let mut score = 0;
    let length = password.chars().count();

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_numeric()) {
        score += 1;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        score += 1;
    }

    match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Fair,
        5..=6 => Strength::Good,
        _ => Strength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_class_count(options: &GeneratorOptions) -> usize {
        [
            options.uppercase,
            options.lowercase,
            options.digits,
            options.symbols,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }

    #[test]
    fn output_length_is_max_of_request_and_class_count() {
        for length in [0, 1, 2, 4, 9, 16, 40] {
            let options = GeneratorOptions {
                length,
                ..GeneratorOptions::default()
            };
            let k = enabled_class_count(&options);
            assert_eq!(generate(&options).chars().count(), length.max(k));
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        let options = GeneratorOptions::default();
        for _ in 0..50 {
            let password = generate(&options);
            assert!(password.chars().any(|c| UPPERCASE.contains(c)));
            assert!(password.chars().any(|c| LOWERCASE.contains(c)));
            assert!(password.chars().any(|c| DIGITS.contains(c)));
            assert!(password.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn ambiguous_filter_spares_letters_and_digits_only() {
        // The worked example: 12 chars, no symbols, ambiguous excluded.
        let options = GeneratorOptions {
            length: 12,
            symbols: false,
            ..GeneratorOptions::default()
        };

        for _ in 0..50 {
            let password = generate(&options);
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().all(|c| !AMBIGUOUS.contains(c)));
            assert!(password.chars().any(|c| UPPERCASE.contains(c)));
            assert!(password.chars().any(|c| LOWERCASE.contains(c)));
            assert!(password.chars().any(|c| DIGITS.contains(c)));
        }
    }

    #[test]
    fn ambiguous_characters_allowed_when_filter_is_off() {
        let options = GeneratorOptions {
            length: 2000,
            symbols: false,
            exclude_ambiguous: false,
            ..GeneratorOptions::default()
        };

        // At this length every pool character is all but certain to
        // show up at least once.
        let password = generate(&options);
        assert!(password.chars().any(|c| AMBIGUOUS.contains(c)));
    }

    #[test]
    fn no_enabled_class_yields_empty_string() {
        let options = GeneratorOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..GeneratorOptions::default()
        };
        assert_eq!(generate(&options), "");
    }

    #[test]
    fn pin_preset_is_six_digits() {
        let pin = generate(&GeneratorOptions::pin());
        assert_eq!(pin.chars().count(), 6);
        // Digits only — and the ambiguous filter strips 0 and 1.
        assert!(pin.chars().all(|c| "23456789".contains(c)));
    }

    #[test]
    fn presets_pin_simple_strong() {
        assert_eq!(generate(&GeneratorOptions::simple()).chars().count(), 12);
        assert!(generate(&GeneratorOptions::simple())
            .chars()
            .all(|c| !SYMBOLS.contains(c)));

        let strong_pw = generate(&GeneratorOptions::strong());
        assert_eq!(strong_pw.chars().count(), 20);
        assert_eq!(strength(&strong_pw), Strength::Strong);
    }

    #[test]
    fn passphrase_has_words_and_a_number_token() {
        let phrase = generate_passphrase(4, "-");
        let tokens: Vec<&str> = phrase.split('-').collect();
        assert_eq!(tokens.len(), 5);

        for word in &tokens[..4] {
            assert!(word.chars().next().unwrap().is_uppercase());
            assert!(WORDS.contains(&word.to_lowercase().as_str()));
        }

        let number: u32 = tokens[4].parse().unwrap();
        assert!(number <= 999);
    }

    #[test]
    fn passphrase_respects_separator() {
        let phrase = generate_passphrase(2, "..");
        assert_eq!(phrase.split("..").count(), 3);
    }

    #[test]
    fn strength_mapping_is_exact() {
        // 16 chars, all four classes: 3 + 4 = 7.
        assert_eq!(strength("Abcdefgh1!kmnpqr"), Strength::Strong);
        // 4 lowercase chars: 1 point.
        assert_eq!(strength("abcd"), Strength::Weak);
        assert_eq!(strength(""), Strength::Weak);
        // 8 chars, upper + lower: 1 + 2 = 3.
        assert_eq!(strength("Abcdefgh"), Strength::Fair);
        // 12 chars, upper + lower + digit: 2 + 3 = 5.
        assert_eq!(strength("Abcdefghijk1"), Strength::Good);
        // 15 chars (below the 16 threshold), all classes: 2 + 4 = 6.
        assert_eq!(strength("Abcdefgh1!kmnpq"), Strength::Good);
    }

    #[test]
    fn strength_counts_only_generator_symbols() {
        // Space and tilde are not in the symbol pool.
        assert_eq!(strength("abcdefgh ~"), Strength::Weak);
    }
}
