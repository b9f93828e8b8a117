//! Small text helpers shared by the legend, chart titles and messages.

/// Upper-case the first character and lower-case everything after it.
///
/// `"multiple majority"` becomes `"Multiple majority"`, `"SURREY"` becomes
/// `"Surrey"`. Empty input stays empty.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn capitalises_first_letter_only() {
        assert_eq!(title_case("multiple majority"), "Multiple majority");
        assert_eq!(title_case("surrey"), "Surrey");
    }

    #[test]
    fn lowercases_the_rest() {
        assert_eq!(title_case("Liberal Party (Original)"), "Liberal party (original)");
        assert_eq!(title_case("SURREY"), "Surrey");
    }

    #[test]
    fn empty_string() {
        assert_eq!(title_case(""), "");
    }
}
