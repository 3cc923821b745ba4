use crate::error::ConvertResult;
use crate::export::{self, ExportConfig, ExportSummary};
use colored::Colorize;

/// Execute the convert command
pub fn convert(config: &ExportConfig, verbose: bool) -> ConvertResult<ExportSummary> {
    println!("{}", "📊 xlsx2json - Sheet Export".bold().green());
    println!("   Input:  {}", config.source_xlsx.display());
    println!("   Output: {}", config.sheets_dir.display());
    if !config.sheet_names.is_empty() {
        println!("   Sheets: {}", config.sheet_names.join(", ").bright_yellow());
    }
    println!();

    let summary = export::run(config)?;

    if verbose {
        for sheet in &summary.sheets {
            println!(
                "   📄 {} → {} ({} records)",
                sheet.sheet.bright_blue(),
                sheet.path.display(),
                sheet.records
            );
        }
        println!();
    }

    if summary.is_empty() {
        println!("{}", "⚠️  No sheets matched, nothing written".yellow());
    } else {
        println!(
            "{} {} sheets, {} records",
            "✅ Export Complete!".bold().green(),
            summary.len(),
            summary.total_records()
        );
    }

    Ok(summary)
}
