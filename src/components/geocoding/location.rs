/// Characters dropped from words before they become part of a key or slug
pub const FORBIDDEN_CHARS: [char; 5] = [',', '!', '#', '?', '.'];

/// Lowercase `word` and drop every forbidden character
pub fn clean_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect()
}

/// Lowercase, strip forbidden characters and hyphen-join the words of `text`
pub fn hyphenate(text: &str) -> String {
    text.split_whitespace()
        .map(clean_word)
        .collect::<Vec<_>>()
        .join("-")
}

/// Canonical lookup key of a location.
///
/// Locations differing only by case or forbidden characters share a key.
pub fn normalize_location(text: &str) -> String {
    hyphenate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(normalize_location("Main St.!"), "main-st");
        assert_eq!(normalize_location("main st"), "main-st");
        assert_eq!(normalize_location("MAIN, #ST?"), "main-st");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_location(""), "");
        assert_eq!(normalize_location("   "), "");
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        assert_eq!(normalize_location("Town Hall & Co"), "town-hall-&-co");
        assert_eq!(normalize_location("12 Rue de l'Église"), "12-rue-de-l'église");
    }

    #[test]
    fn test_word_of_only_forbidden_chars() {
        assert_eq!(normalize_location("Pier 39 ! Dock"), "pier-39--dock");
    }
}
