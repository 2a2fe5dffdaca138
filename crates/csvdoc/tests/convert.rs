use csvdoc::{
    ConverterParams, Document, Error, NumericLocale, Options, ReadOnly, SeparatorParams, ToText,
    ToValue, WriteOnly,
};

const GAPS: &str = "-,A,B,C\n1,,x,#\n2,,y,$\n";

#[test]
fn default_converter_substitutes_unparsable_numbers() -> Result<(), Box<dyn std::error::Error>> {
    let converter = ConverterParams {
        has_default_converter: true,
        ..ConverterParams::default()
    };
    let doc = Document::from_reader(
        GAPS.as_bytes(),
        Options::default().with_labels(0, 0).with_converter(converter),
    )?;
    assert_eq!(doc.get_cell::<i32>(0, 0)?, 0);
    assert_eq!(doc.get_cell::<i64>(1, 0)?, 0);
    assert_eq!(doc.get_cell::<u32>(2, 0)?, 0);
    assert!(doc.get_cell::<f64>(0, 1)?.is_nan());
    assert!(doc.get_cell::<f32>(2, 1)?.is_nan());
    Ok(())
}

#[test]
fn configured_default_integer() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_reader(
        GAPS.as_bytes(),
        Options::default()
            .with_labels(0, 0)
            .with_converter(ConverterParams::with_default_integer(7)),
    )?;
    assert_eq!(doc.get_cell::<i32>("A", "1")?, 7);
    assert_eq!(doc.get_cell::<i16>("B", "1")?, 7);
    assert_eq!(doc.get_column::<u8>("A")?, vec![7, 7]);
    Ok(())
}

#[test]
fn conversion_fails_without_default() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_reader(GAPS.as_bytes(), Options::default().with_labels(0, 0))?;
    let err = doc.get_cell::<i32>("A", "1").unwrap_err();
    assert!(matches!(err, Error::Conversion { .. }));
    let err = doc.get_cell::<i32>("B", "1").unwrap_err();
    assert_eq!(err.to_string(), "cannot convert \"x\" to i32");
    assert!(doc.get_cell::<f64>("C", "2").is_err());
    Ok(())
}

#[test]
fn per_call_converter_params() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_reader(GAPS.as_bytes(), Options::default().with_labels(0, 0))?;
    let value: i32 = doc.get_cell_with("B", "2", ConverterParams::with_default_integer(-1))?;
    assert_eq!(value, -1);
    let values: Vec<f64> = doc.get_column_with("A", ConverterParams::with_default_float(0.5))?;
    assert_eq!(values, vec![0.5, 0.5]);
    Ok(())
}

#[test]
fn whitespace_around_numbers_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_reader(
        "a,b\n 12 ,\t-3.5\n".as_bytes(),
        Options::default(),
    )?;
    assert_eq!(doc.get_cell::<u16>("a", 0)?, 12);
    assert_eq!(doc.get_cell::<f64>("b", 0)?, -3.5);
    assert_eq!(doc.get_cell::<String>("a", 0)?, " 12 ");
    Ok(())
}

#[test]
fn decimal_comma_locale() -> Result<(), Box<dyn std::error::Error>> {
    let converter = ConverterParams {
        locale: NumericLocale::new(',', None),
        ..ConverterParams::default()
    };
    let mut doc = Document::from_reader(
        "-;A;B;C\n1;1;10;100\n2;0,1;0,01;0,001\n".as_bytes(),
        Options::default()
            .with_labels(0, 0)
            .with_separator(SeparatorParams::new(b';'))
            .with_converter(converter),
    )?;
    assert_eq!(doc.get_cell::<f32>("A", "2")?, 0.1f32);
    assert_eq!(doc.get_cell::<f32>("B", "2")?, 0.01f32);
    assert_eq!(doc.get_cell::<f64>("C", "2")?, 0.001);

    doc.set_cell("A", "1", 2.5f64)?;
    assert_eq!(doc.get_cell::<String>("A", "1")?, "2,5");
    Ok(())
}

#[test]
fn locale_ignored_when_numeric_locale_off() -> Result<(), Box<dyn std::error::Error>> {
    let converter = ConverterParams {
        numeric_locale: false,
        locale: NumericLocale::new(',', None),
        ..ConverterParams::default()
    };
    let doc = Document::from_reader(
        "-,A,B\n1,1,10\n2,0.1,0.01\n".as_bytes(),
        Options::default().with_labels(0, 0).with_converter(converter),
    )?;
    assert_eq!(doc.get_cell::<f32>("A", "2")?, 0.1f32);
    assert_eq!(doc.get_cell::<f32>("B", "2")?, 0.01f32);
    Ok(())
}

#[test]
fn chars_and_bools() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::from_reader("A,B\nxyz,true\n,no\n".as_bytes(), Options::default())?;
    assert_eq!(doc.get_cell::<char>("A", 0)?, 'x');
    assert!(doc.get_cell::<bool>("B", 0)?);
    assert!(!doc.get_cell::<bool>("B", 1)?);
    assert!(matches!(
        doc.get_cell::<char>("A", 1),
        Err(Error::Conversion { .. })
    ));

    doc.set_cell("B", 1, true)?;
    doc.set_cell("A", 1, 'q')?;
    assert_eq!(doc.get_row::<String>(1)?, vec!["q", "true"]);
    Ok(())
}

#[test]
fn closures_as_converters() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::from_reader("A,B\nabc,1\nde,2\n".as_bytes(), Options::default())?;

    let len = doc.get_cell_with("A", 0, |text: &str| -> csvdoc::Result<usize> { Ok(text.len()) })?;
    assert_eq!(len, 3);
    let lens = doc.get_column_with("A", |text: &str| -> csvdoc::Result<usize> { Ok(text.len()) })?;
    assert_eq!(lens, vec![3, 2]);

    let bracket = |v: &i32| -> csvdoc::Result<String> { Ok(format!("<{v}>")) };
    doc.set_cell_with("B", 0, 42, bracket)?;
    assert_eq!(doc.get_cell::<String>("B", 0)?, "<42>");
    doc.set_row_with(1, &[7, 8], bracket)?;
    assert_eq!(doc.get_row::<String>(1)?, vec!["<7>", "<8>"]);
    doc.set_column_with("A", &[1, 2], bracket)?;
    assert_eq!(doc.get_column::<String>("A")?, vec!["<1>", "<2>"]);

    let parsed = doc.get_row_with(1, |text: &str| -> csvdoc::Result<i32> {
        text.trim_matches(['<', '>'])
            .parse()
            .map_err(|_| csvdoc::Error::Unsupported(text.to_string()))
    })?;
    assert_eq!(parsed, vec![2, 8]);
    Ok(())
}

#[test]
fn one_way_converters() -> Result<(), Box<dyn std::error::Error>> {
    let read_only = ReadOnly(|text: &str| -> csvdoc::Result<i32> { Ok(text.len() as i32) });
    assert_eq!(read_only.to_value("abcd")?, 4);
    assert!(matches!(read_only.to_text(&1i32), Err(Error::Unsupported(_))));

    let write_only = WriteOnly(|v: &i32| -> csvdoc::Result<String> { Ok(v.to_string()) });
    assert_eq!(write_only.to_text(&5)?, "5");
    let read: csvdoc::Result<i32> = write_only.to_value("5");
    assert!(matches!(read, Err(Error::Unsupported(_))));

    let mut doc = Document::from_reader("A\nx\n".as_bytes(), Options::default())?;
    assert!(matches!(
        doc.set_cell_with("A", 0, 3i32, read_only),
        Err(Error::Unsupported(_))
    ));
    assert_eq!(doc.get_cell::<String>("A", 0)?, "x");
    Ok(())
}

fn assert_converter<T, C: csvdoc::Converter<T>>(_: &C) {}

#[test]
fn converter_params_convert_both_ways() {
    assert_converter::<i32, _>(&ConverterParams::default());
    assert_converter::<f64, _>(&ConverterParams::default());
    assert_converter::<i32, _>(&ReadOnly(|text: &str| -> csvdoc::Result<i32> {
        Ok(text.len() as i32)
    }));
}

#[test]
fn default_integer_must_fit_the_target() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::from_reader(
        GAPS.as_bytes(),
        Options::default()
            .with_labels(0, 0)
            .with_converter(ConverterParams::with_default_integer(300)),
    )?;
    assert_eq!(doc.get_cell::<i32>("A", "1")?, 300);
    assert_eq!(doc.get_cell::<u16>("A", "1")?, 300);
    assert!(matches!(
        doc.get_cell::<u8>("A", "1"),
        Err(Error::Conversion { .. })
    ));

    let negative: u32 = doc
        .get_cell_with("B", "1", ConverterParams::with_default_integer(-1))
        .unwrap_or(42);
    assert_eq!(negative, 42);
    Ok(())
}

#[test]
fn default_parameter_sets_compare_equal() {
    assert_eq!(ConverterParams::default(), ConverterParams::default());
    assert_eq!(Options::default(), Options::default());
    assert_ne!(
        ConverterParams::default(),
        ConverterParams::with_default_float(0.0)
    );
    assert_eq!(
        ConverterParams::with_default_float(f64::NAN),
        ConverterParams::with_default_integer(0)
    );
}
