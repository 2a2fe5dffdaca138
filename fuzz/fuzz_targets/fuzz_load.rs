#![no_main]
use csvdoc::{Document, LabelParams, LineReaderParams, Options, SeparatorParams};
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
struct Input {
    column_name_idx: i8,
    row_name_idx: i8,
    separator: u8,
    trim: bool,
    quoted_linebreaks: bool,
    auto_quote: bool,
    skip_comment_lines: bool,
    skip_empty_lines: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let options = Options {
        labels: LabelParams::new(input.column_name_idx as isize, input.row_name_idx as isize),
        separator: SeparatorParams {
            separator: input.separator,
            trim: input.trim,
            quoted_linebreaks: input.quoted_linebreaks,
            auto_quote: input.auto_quote,
            ..SeparatorParams::default()
        },
        line_reader: LineReaderParams {
            skip_comment_lines: input.skip_comment_lines,
            skip_empty_lines: input.skip_empty_lines,
            ..LineReaderParams::default()
        },
        ..Options::default()
    };

    let Ok(doc) = Document::from_reader(input.data.as_slice(), options) else {
        return;
    };
    // every accessor must fail cleanly, never panic
    let columns = doc.column_count();
    let rows = doc.row_count();
    for row in 0..rows.min(8) + 1 {
        let _ = doc.get_row::<String>(row);
        let _ = doc.row_name(row);
    }
    for column in 0..columns.min(8) + 1 {
        let _ = doc.get_column::<String>(column);
        let _ = doc.get_column::<f64>(column);
        let _ = doc.column_name(column);
        let _ = doc.get_cell::<i64>(column, 0);
    }
    for name in doc.column_names() {
        assert!(doc.column_index(name).is_some());
    }
    let mut out = Vec::new();
    let _ = doc.save_to_writer(&mut out);
});
