use std::fs::File;
use std::io::{BufReader, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use csvdoc::{Document, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "csvdoc-cli",
    about = "Inspect CSV documents and re-save them with different formatting",
    version
)]
struct Args {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// JSON file with csvdoc options; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field separator (a single ASCII char, `\t` for tab)
    #[arg(short, long, value_parser = parse_ascii)]
    separator: Option<u8>,

    /// Quote char
    #[arg(long, value_parser = parse_ascii)]
    quote: Option<u8>,

    /// Raw row holding column labels (-1 for none)
    #[arg(long, allow_hyphen_values = true)]
    column_labels: Option<isize>,

    /// Raw column holding row labels (-1 for none)
    #[arg(long, allow_hyphen_values = true)]
    row_labels: Option<isize>,

    /// Strip spaces and tabs around cells
    #[arg(long)]
    trim: bool,

    /// Allow linebreaks inside quoted cells
    #[arg(long)]
    quoted_linebreaks: bool,

    /// Keep quote chars on read and never add them on write
    #[arg(long)]
    no_auto_quote: bool,

    /// Skip lines starting with this char
    #[arg(long, value_parser = parse_ascii)]
    comment: Option<u8>,

    /// Skip empty lines
    #[arg(long)]
    skip_empty: bool,

    /// Print row/column counts and labels
    #[arg(long)]
    info: bool,

    /// Print one cell
    #[arg(long, num_args = 2, value_names = ["COL", "ROW"])]
    cell: Option<Vec<String>>,

    /// Print one row
    #[arg(long)]
    row: Option<String>,

    /// Print one column
    #[arg(long)]
    column: Option<String>,

    /// Treat COL/ROW arguments as zero-based indices instead of labels
    #[arg(long)]
    by_index: bool,

    /// Save the document to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write CR/LF line endings
    #[arg(long, conflicts_with = "lf")]
    crlf: bool,

    /// Write LF line endings
    #[arg(long)]
    lf: bool,
}

fn parse_ascii(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("expected a single ASCII character, got {s:?}")),
        },
    }
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse()
        .with_context(|| format!("{s:?} is not a valid index"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn build_options(args: &Args) -> Result<Options> {
    let mut options = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Options::default(),
    };

    if let Some(idx) = args.column_labels {
        options.labels.column_name_idx = idx;
    }
    if let Some(idx) = args.row_labels {
        options.labels.row_name_idx = idx;
    }
    if let Some(sep) = args.separator {
        options.separator.separator = sep;
    }
    if let Some(quote) = args.quote {
        options.separator.quote_char = quote;
    }
    if args.trim {
        options.separator.trim = true;
    }
    if args.quoted_linebreaks {
        options.separator.quoted_linebreaks = true;
    }
    if args.no_auto_quote {
        options.separator.auto_quote = false;
    }
    if let Some(prefix) = args.comment {
        options.line_reader.skip_comment_lines = true;
        options.line_reader.comment_prefix = prefix;
    }
    if args.skip_empty {
        options.line_reader.skip_empty_lines = true;
    }
    Ok(options)
}

fn print_info(doc: &Document) {
    println!("rows: {}", doc.row_count());
    println!("columns: {}", doc.column_count());
    let columns = doc.column_names();
    if !columns.is_empty() {
        println!("column labels: {}", columns.join(", "));
    }
    let rows = doc.row_names();
    if !rows.is_empty() {
        println!("row labels: {}", rows.join(", "));
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let options = build_options(&args)?;

    let mut doc = match &args.input {
        Some(path) => Document::open(path, options)
            .with_context(|| format!("reading {}", path.display()))?,
        None => Document::from_reader(stdin().lock(), options)?,
    };
    tracing::debug!(
        rows = doc.row_count(),
        columns = doc.column_count(),
        encoding = ?doc.encoding(),
        "input ready"
    );
    let join = char::from(doc.options().separator.separator).to_string();

    let mut printed = false;
    if let Some(cell) = &args.cell {
        let [col, row] = cell.as_slice() else {
            bail!("--cell takes a column and a row");
        };
        let value: String = if args.by_index {
            doc.get_cell(parse_index(col)?, parse_index(row)?)?
        } else {
            doc.get_cell(col, row)?
        };
        println!("{value}");
        printed = true;
    }
    if let Some(row) = &args.row {
        let values: Vec<String> = if args.by_index {
            doc.get_row(parse_index(row)?)?
        } else {
            doc.get_row(row)?
        };
        println!("{}", values.join(&join));
        printed = true;
    }
    if let Some(column) = &args.column {
        let values: Vec<String> = if args.by_index {
            doc.get_column(parse_index(column)?)?
        } else {
            doc.get_column(column)?
        };
        for value in values {
            println!("{value}");
        }
        printed = true;
    }
    if args.info || (!printed && args.output.is_none()) {
        print_info(&doc);
    }

    if let Some(path) = &args.output {
        if args.crlf || args.lf {
            let mut separator = doc.options().separator;
            separator.has_cr = args.crlf;
            doc.set_separator_params(separator);
        }
        tracing::info!(
            path = %path.display(),
            has_cr = doc.options().separator.has_cr,
            "writing output"
        );
        doc.save_as(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
