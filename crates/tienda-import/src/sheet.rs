//! Reading tabular files into a uniform string grid.
//!
//! The first worksheet of an `.xlsx`/`.xls` file (or the whole `.csv`) is
//! read as row 1 = headers, subsequent rows = records. All cells are
//! coerced to trimmed strings with `""` for blanks, matching the behavior
//! the import pipeline expects regardless of source format.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::ImportError;

/// A sheet reduced to headers plus string rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads the first sheet of `path`, dispatching on the file extension.
///
/// # Errors
///
/// Returns [`ImportError::UnsupportedFormat`] for unknown extensions,
/// [`ImportError::EmptySheet`] when the workbook has no sheet at all, or
/// the underlying parse error.
pub fn read_sheet(path: &Path) -> Result<Sheet, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" | "xls" => read_workbook(path),
        "csv" => read_csv(path),
        _ => Err(ImportError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_workbook(path: &Path) -> Result<Sheet, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptySheet)??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
    let Some(headers) = rows.next() else {
        return Err(ImportError::EmptySheet);
    };
    Ok(Sheet {
        headers,
        rows: rows.collect(),
    })
}

fn read_csv(path: &Path) -> Result<Sheet, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(|v| v.trim().to_owned()).collect();
        // Short records are padded so column indexes stay valid.
        row.resize(headers.len(), String::new());
        rows.push(row);
    }
    Ok(Sheet { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_owned(),
        Data::Float(f) => float_to_string(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => float_to_string(dt.as_f64()),
    }
}

/// Excel stores every number as a float; integral values are rendered
/// without the trailing `.0` so codes like `1000` survive as `"1000"`.
fn float_to_string(f: f64) -> String {
    if (f - f.trunc()).abs() < f64::EPSILON && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = read_sheet(Path::new("productos.pdf")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn csv_round_trip_with_blank_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("productos.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Codigo,Articulo,Marca").unwrap();
        writeln!(file, "P001, Producto Uno ,").unwrap();
        writeln!(file, "P002,Dos").unwrap();
        drop(file);

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.headers, vec!["Codigo", "Articulo", "Marca"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0], vec!["P001", "Producto Uno", ""]);
        // Short record padded to header width.
        assert_eq!(sheet.rows[1], vec!["P002", "Dos", ""]);
    }

    #[test]
    fn float_to_string_drops_trailing_zero_fraction() {
        assert_eq!(float_to_string(1000.0), "1000");
        assert_eq!(float_to_string(2.5), "2.5");
    }
}
