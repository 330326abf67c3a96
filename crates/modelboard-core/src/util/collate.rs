//! String collation for column sorting.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring, which is
//! what a default locale compare gives. Punctuation is not ignorable, so it
//! sorts before digits, and digits sort before letters.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

thread_local! {
    // Collator keeps scratch buffers between calls.
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Compares two strings in default locale order.
///
/// Base letters decide first, so accents and case are ignored until
/// everything else ties (`"Éclair" < "eclairs" < "Zebra"`). Then unaccented
/// sorts before accented, and lowercase before uppercase (`"a" < "A" < "b"`).
/// Identical strings are `Equal`, which keeps stable sorts stable.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with_borrow_mut(|collator| collator.collate(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_primary_order() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Banana", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("Model A", "model b"), Ordering::Less);
    }

    #[test]
    fn lowercase_before_uppercase_on_case_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("A", "b"), Ordering::Less);
    }

    #[test]
    fn equal_strings_are_equal() {
        assert_eq!(locale_cmp("29/02/2024", "29/02/2024"), Ordering::Equal);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Model", "Model A"), Ordering::Less);
        assert_eq!(locale_cmp("", "x"), Ordering::Less);
    }

    #[test]
    fn digits_compare_as_text() {
        assert_eq!(locale_cmp("#10", "#9"), Ordering::Less);
        assert_eq!(locale_cmp("Active", "Inactive"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_cmp("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(locale_cmp("élan", "fable"), Ordering::Less);
        assert_eq!(locale_cmp("Model É", "Model F"), Ordering::Less);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        assert_eq!(locale_cmp("Model_A", "Model1"), Ordering::Less);
        assert_eq!(locale_cmp("@home", "1st"), Ordering::Less);
        assert_eq!(locale_cmp("[draft]", "alpha"), Ordering::Less);
        assert_eq!(locale_cmp("9", "a"), Ordering::Less);
    }
}
