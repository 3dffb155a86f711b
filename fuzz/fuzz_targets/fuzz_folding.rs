//! Fuzz target for folding.
//!
//! Arbitrary text, including broken escapes and character references, must
//! fold without panicking and without losing text outside ANSI mode.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unistring::{FoldOptions, columns_for, divide_by_columns, folded_lines};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    columns: u8,
    divide_at: i16,
    ansi: bool,
    char_ref: bool,
}

fuzz_target!(|input: Input| {
    let options = FoldOptions::new()
        .columns(usize::from(input.columns).max(1))
        .ansi(input.ansi)
        .character_reference(input.char_ref);

    let lines = folded_lines(&input.text, &options);
    if !input.ansi {
        assert_eq!(lines.concat(), input.text);
    }

    let _ = columns_for(&input.text, &options);
    let (left, right) = divide_by_columns(&input.text, isize::from(input.divide_at), &options);
    if !input.ansi {
        assert_eq!(left + &right, input.text);
    }
});
