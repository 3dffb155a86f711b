//! Fuzz target for incremental editing.
//!
//! After any sequence of edits the cluster sequence must equal a fresh scan
//! of the same code units.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unistring::Unistring;

#[derive(Arbitrary, Debug)]
enum Edit {
    Insert { units: Vec<u16>, at: i16 },
    Delete { at: i16, count: Option<u8> },
    Concat { units: Vec<u16> },
}

fuzz_target!(|input: (Vec<u16>, Vec<Edit>)| {
    let (initial, edits) = input;
    let mut text = Unistring::from_utf16(&initial);

    for edit in edits.into_iter().take(64) {
        match edit {
            Edit::Insert { units, at } => text.insert_utf16(&units, isize::from(at)),
            Edit::Delete { at, count } => text.delete(isize::from(at), count.map(usize::from)),
            Edit::Concat { units } => text.concat(&Unistring::from_utf16(&units)),
        }
        assert_eq!(text, Unistring::from_utf16(text.as_utf16()));
    }
});
