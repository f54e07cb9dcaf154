//! Free-text field normalisation.

/// Upper-case the first letter of every word, leaving the rest untouched.
///
/// A word starts after any character that is not a letter, digit or `_`, so
/// `"o'neil-smith"` becomes `"O'Neil-Smith"`. Already titled input is returned
/// unchanged.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for ch in s.chars() {
        if is_word_separator(prev) {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev = ch;
    }
    out
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalises_each_word() {
        assert_eq!(title_case("grand ballroom hotel"), "Grand Ballroom Hotel");
    }

    #[test]
    fn keeps_inner_case() {
        assert_eq!(title_case("mcDonald HALL"), "McDonald HALL");
    }

    #[test]
    fn punctuation_starts_a_new_word() {
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case("5 march 2024"), "5 March 2024");
    }

    #[test]
    fn underscore_and_digits_do_not_split_words() {
        assert_eq!(title_case("room_a 2b"), "Room_a 2b");
    }

    #[test]
    fn pre_titled_input_is_unchanged() {
        assert_eq!(title_case("Jane Doe"), "Jane Doe");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn non_ascii_letters_are_handled() {
        assert_eq!(title_case("élise ünal"), "Élise Ünal");
    }
}
