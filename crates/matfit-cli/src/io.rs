use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use matfit::{EliminationConfig, Matrix};

pub fn validate_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") | Some("txt") => {}
        _ => anyhow::bail!("File must have a .csv or .txt extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Read headerless numeric CSV rows. Lines starting with `#` are skipped.
fn read_numeric_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read row {} of {}", line + 1, path.display()))?;
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f64>().with_context(|| {
                    format!("Invalid number {:?} on row {} of {}", field, line + 1, path.display())
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load a matrix, one CSV row per matrix row.
pub fn read_matrix_csv<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let rows = read_numeric_rows(&path)?;
    log::debug!("read {} rows from {}", rows.len(), path.as_ref().display());
    let matrix = Matrix::from_rows(rows)
        .with_context(|| format!("Rows of {} differ in length", path.as_ref().display()))?;
    Ok(matrix)
}

/// Load `x,y` sample pairs.
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, Vec<f64>)> {
    let rows = read_numeric_rows(&path)?;
    let mut xs = Vec::with_capacity(rows.len());
    let mut ys = Vec::with_capacity(rows.len());
    for (line, row) in rows.into_iter().enumerate() {
        match row.as_slice() {
            [x, y] => {
                xs.push(*x);
                ys.push(*y);
            }
            _ => anyhow::bail!(
                "Row {} of {} must have exactly two columns (x,y), found {}",
                line + 1,
                path.as_ref().display(),
                row.len()
            ),
        }
    }
    Ok((xs, ys))
}

/// Load an elimination config from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EliminationConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EliminationConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
