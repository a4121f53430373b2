use utm_mgrs::letters::{index_to_letter, letter_to_index, ALPHABET};

#[test]
fn every_mgrs_letter_round_trips() {
    for (i, letter) in ALPHABET.iter().enumerate() {
        let idx = letter_to_index(*letter).unwrap();
        assert_eq!(idx, i as i32);
        assert_eq!(index_to_letter(idx), Some(*letter));
    }
}

#[test]
fn alphabet_skips_i_and_o() {
    assert_eq!(ALPHABET.len(), 24);
    assert!(!ALPHABET.contains(&'I'));
    assert!(!ALPHABET.contains(&'O'));

    assert_eq!(letter_to_index('I'), None);
    assert_eq!(letter_to_index('O'), None);

    for idx in 0..24 {
        let letter = index_to_letter(idx).unwrap();
        assert_ne!(letter, 'I');
        assert_ne!(letter, 'O');
    }

    // Letters after the gaps shift down
    assert_eq!(letter_to_index('H'), Some(7));
    assert_eq!(letter_to_index('J'), Some(8));
    assert_eq!(letter_to_index('N'), Some(12));
    assert_eq!(letter_to_index('P'), Some(13));
}

#[test]
fn rejects_non_uppercase_input() {
    for ch in ['a', 'z', 'i', '0', ' ', '@', '[', 'É'] {
        assert_eq!(letter_to_index(ch), None, "{ch:?}");
    }

    assert_eq!(index_to_letter(-1), None);
    assert_eq!(index_to_letter(24), None);
}
