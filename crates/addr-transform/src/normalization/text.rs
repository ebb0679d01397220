//! Capitalization helpers.

/// Capitalizes every space-separated word.
///
/// Splits on single spaces only, so runs of spaces yield empty words which
/// are kept as-is; the spacing of the input is preserved.
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and lower-cases the rest.
///
/// When the upper-case form of the first character is several characters
/// (`ß` is `SS`), only the first of them stays upper-case, so `ß` becomes
/// `Ss`. An empty word stays empty.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let mut out = String::with_capacity(word.len());
    out.extend(upper.next());
    let rest: String = upper.chain(chars).collect();
    out.push_str(&rest.to_lowercase());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize("MARTIN LUTHER KING"), "Martin Luther King");
        assert_eq!(capitalize("elm"), "Elm");
        assert_eq!(capitalize("o'BRIEN"), "O'brien");
    }

    #[test]
    fn keeps_empty_words() {
        assert_eq!(capitalize_word(""), "");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("NORTH  MAIN"), "North  Main");
        assert_eq!(capitalize(" LEADING"), " Leading");
    }

    #[test]
    fn multi_char_upper_case_keeps_one_capital() {
        assert_eq!(capitalize_word("ßtrasse"), "Sstrasse");
        assert_eq!(capitalize_word("ﬁeld"), "Field");
        assert_eq!(capitalize("ßtrasse"), capitalize("SStrasse"));
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(capitalize("COUNTY ROAD 400"), "County Road 400");
        assert_eq!(capitalize_word("3RD"), "3rd");
    }
}
