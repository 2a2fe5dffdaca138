#![no_main]
use csvdoc::{Document, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = Options::default();
    let Ok(first) = Document::from_reader(data, options) else {
        return;
    };
    let mut saved = Vec::new();
    if first.save_to_writer(&mut saved).is_err() {
        return;
    }

    let second = match Document::from_reader(saved.as_slice(), options) {
        Ok(doc) => doc,
        Err(e) => panic!("failed to reload saved document: {e}\nsaved: {:?}", saved),
    };
    if first.raw_rows() != second.raw_rows() {
        panic!(
            "roundtrip mismatch!\ninput: {:?}\nsaved: {:?}\nfirst: {:?}\nsecond: {:?}",
            data,
            String::from_utf8_lossy(&saved),
            first.raw_rows(),
            second.raw_rows()
        );
    }

    let mut resaved = Vec::new();
    if second.save_to_writer(&mut resaved).is_ok() {
        assert_eq!(saved, resaved, "second save differs from first");
    }
});
