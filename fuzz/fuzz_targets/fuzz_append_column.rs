#![no_main]

use colfix::schema::NoteRepair;
use colfix::stream::append_column;
use libfuzzer_sys::fuzz_target;
use std::io::{self, Cursor};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either copy cleanly or fail with a read error, never panic
    let _ = append_column(Cursor::new(data), io::sink(), &NoteRepair::default());

    // The whole-file reader gets the same input
    let _ = colfix::table::Table::from_reader(Cursor::new(data), "fuzz.tsv".as_ref());
});
