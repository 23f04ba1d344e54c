//! Assertions over `--format json` output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use agdeck_types::GRID_CELLS;

/// Row ids of a `sessions` result, in display order
pub fn row_ids(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("content.rows is not an array")?;

    rows.iter()
        .map(|row| {
            row["id"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("row without string id: {}", row))
        })
        .collect()
}

/// Assert the rows of a `sessions` result appear exactly in `expected` order
pub fn assert_row_order(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = row_ids(json)?;
    if ids != expected {
        bail!("row order mismatch\n  expected: {:?}\n  actual:   {:?}", expected, ids);
    }
    Ok(())
}

/// Assert an `activity` result holds a complete grid, column-major
pub fn assert_grid_shape(json: &Value) -> Result<()> {
    let cells = json["content"]["cells"]
        .as_array()
        .context("content.cells is not an array")?;

    if cells.len() != GRID_CELLS {
        bail!("expected {} cells, got {}", GRID_CELLS, cells.len());
    }

    for (index, cell) in cells.iter().enumerate() {
        let column = cell["column"].as_u64().context("cell without column")? as usize;
        let row = cell["row"].as_u64().context("cell without row")? as usize;
        if column * 7 + row != index {
            bail!("cell {} is at column {} row {}", index, column, row);
        }
    }

    Ok(())
}

/// Cell count for `date` (YYYY-MM-DD) in an `activity` result
pub fn cell_count(json: &Value, date: &str) -> Result<u64> {
    let cells = json["content"]["cells"]
        .as_array()
        .context("content.cells is not an array")?;

    cells
        .iter()
        .find(|cell| cell["date"] == date)
        .and_then(|cell| cell["count"].as_u64())
        .with_context(|| format!("no cell for {}", date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_order() {
        let json = json!({"content": {"rows": [{"id": "b"}, {"id": "a"}]}});
        assert!(assert_row_order(&json, &["b", "a"]).is_ok());
        assert!(assert_row_order(&json, &["a", "b"]).is_err());
    }

    #[test]
    fn test_missing_rows_is_error() {
        let json = json!({"content": {}});
        assert!(row_ids(&json).is_err());
    }
}
