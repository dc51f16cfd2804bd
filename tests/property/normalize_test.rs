//! Property-based tests for the input normalizer.
//!
//! Every Cyrillic letter in А-Я, а-я, Ё, ё is shifted by `0x410 - 0x41`;
//! every other character is left alone.

use proptest::prelude::*;

use scanform::barcode::normalize;

const SHIFT: u32 = 0x410 - 0x41;

fn is_mapped(ch: char) -> bool {
    ('\u{410}'..='\u{44F}').contains(&ch) || ch == 'Ё' || ch == 'ё'
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cyrillic_letters_shift_by_fixed_offset(ch in prop_oneof![
        prop::char::range('\u{410}', '\u{44F}'),
        Just('Ё'),
        Just('ё'),
    ]) {
        let out: Vec<char> = normalize(&ch.to_string()).chars().collect();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(u32::from(out[0]), u32::from(ch) - SHIFT);
    }

    #[test]
    fn other_characters_pass_through(text in any::<String>()) {
        let expected: String = text
            .chars()
            .map(|c| if is_mapped(c) { char::from_u32(u32::from(c) - SHIFT).unwrap() } else { c })
            .collect();
        prop_assert_eq!(normalize(&text), expected);
    }

    #[test]
    fn text_without_cyrillic_is_unchanged(text in "[ -~]{0,64}") {
        prop_assert_eq!(normalize(&text), text);
    }

    #[test]
    fn char_count_is_preserved(text in any::<String>()) {
        prop_assert_eq!(normalize(&text).chars().count(), text.chars().count());
    }
}
