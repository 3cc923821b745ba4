//! Workbook fixtures built on the fly with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};

/// A cell to write into a fixture sheet
#[derive(Debug, Clone, Copy)]
pub enum Fx {
    Text(&'static str),
    Num(f64),
    Date(u16, u8, u8),
    Bool(bool),
    Blank,
}

pub type FixtureSheet = (&'static str, Vec<Vec<Fx>>);

/// Write `sheets` (first row = header) to `dir/file_name` and return its path
pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[FixtureSheet]) -> PathBuf {
    let path = dir.join(file_name);
    let date_format = Format::new().set_num_format("dd/mm/yyyy");

    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match *cell {
                    Fx::Text(s) => {
                        worksheet.write_string(r, c, s).unwrap();
                    }
                    Fx::Num(n) => {
                        worksheet.write_number(r, c, n).unwrap();
                    }
                    Fx::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    Fx::Bool(b) => {
                        worksheet.write_boolean(r, c, b).unwrap();
                    }
                    Fx::Blank => {}
                }
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}

pub fn jurisdiction_sheet() -> FixtureSheet {
    (
        "Jurisdiction",
        vec![
            vec![
                Fx::Text("Description"),
                Fx::Text("ID"),
                Fx::Text("LiveFrom"),
                Fx::Text("LiveTo"),
                Fx::Text("Name"),
                Fx::Text("Shuttered"),
            ],
            vec![
                Fx::Text("description"),
                Fx::Num(1.0),
                Fx::Date(2017, 6, 20),
                Fx::Date(2018, 7, 20),
                Fx::Text("name"),
                Fx::Text("No"),
            ],
        ],
    )
}

pub fn case_type_sheet() -> FixtureSheet {
    (
        "CaseType",
        vec![
            vec![Fx::Text("ID"), Fx::Text("Name"), Fx::Text("Active"), Fx::Text("Count")],
            vec![Fx::Text("GrantOnly"), Fx::Text("Grant"), Fx::Bool(true), Fx::Num(0.0)],
            vec![Fx::Text("Caveat"), Fx::Text(""), Fx::Bool(false), Fx::Num(2.5)],
        ],
    )
}

pub fn header_only_sheet(name: &'static str) -> FixtureSheet {
    (
        name,
        vec![vec![Fx::Text("ID"), Fx::Text("Name"), Fx::Text("LiveFrom")]],
    )
}

pub fn empty_sheet(name: &'static str) -> FixtureSheet {
    (name, Vec::new())
}

/// Jurisdiction, CaseType, State (header only) and Empty (no cells)
pub fn definition_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "definition.xlsx",
        &[
            jurisdiction_sheet(),
            case_type_sheet(),
            header_only_sheet("State"),
            empty_sheet("Empty"),
        ],
    )
}

/// A template: every sheet has headers and no data
pub fn template_workbook(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "ccd-template.xlsx",
        &[
            header_only_sheet("Jurisdiction"),
            header_only_sheet("CaseType"),
            header_only_sheet("CaseField"),
            empty_sheet("UserProfile"),
        ],
    )
}

/// Sorted names of the `.json` files in `dir`
pub fn json_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    files.sort();
    files
}
