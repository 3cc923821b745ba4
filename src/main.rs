use clap::Parser;
use tracing_subscriber::EnvFilter;
use xlsx2json::cli;
use xlsx2json::core::EmptySelectionPolicy;
use xlsx2json::export::ExportConfig;

#[derive(Parser, Debug)]
#[command(name = "xlsx2json")]
#[command(about = "Convert every sheet of a workbook into a JSON file")]
#[command(long_about = "xlsx2json - Workbook sheets to JSON files

Writes one <SHEET>.json per sheet into the sheets directory. The first row of
each sheet is the header row; every row below it becomes one JSON object keyed
by those headers. Date cells are written as DD/MM/YYYY.

Sheets without data rows produce an empty array ([]). Existing files are
overwritten.

EXAMPLES:
  xlsx2json -i definition.xlsx -D sheets              # Export every sheet
  xlsx2json -i definition.xlsx -D sheets Jurisdiction # Only Jurisdiction.json
  xlsx2json -i definition.xlsx -D sheets A B --strict # Fail if neither A nor B exist

Unknown sheet names are skipped unless --strict is given.")]
#[command(version)]
struct Cli {
    /// Spreadsheet file (.xlsx, .xlsm, .xlsb, .xls, .ods)
    #[arg(short = 'i', long, default_value = "", env = "XLSX2JSON_SOURCE")]
    source_xlsx: String,

    /// Directory receiving the JSON files (created if missing)
    #[arg(short = 'D', long, default_value = "", env = "XLSX2JSON_SHEETS_DIR")]
    sheets_dir: String,

    /// Sheets to export (default: all sheets)
    sheets: Vec<String>,

    /// Fail when none of the requested sheets exist
    #[arg(long)]
    strict: bool,

    /// Show per-sheet output and info logs
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "xlsx2json=info" } else { "xlsx2json=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let policy = if args.strict {
        EmptySelectionPolicy::Reject
    } else {
        EmptySelectionPolicy::Allow
    };
    let config = ExportConfig::new(args.source_xlsx, args.sheets_dir)
        .with_sheets(args.sheets)
        .with_empty_selection(policy);

    cli::convert(&config, args.verbose)?;
    Ok(())
}
