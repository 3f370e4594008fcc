//! File I/O operations for Game of Life grids

use super::{decode_with_markers, encode_json, Cell, Grid};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load a grid from a file.
///
/// `.json` files hold a matrix of arbitrary values run through the state
/// encoder; anything else is read as plaintext (see [`parse_grid_from_string`]).
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let grid = if is_json {
        parse_grid_from_json(&content)
    } else {
        parse_grid_from_string(&content)
    };
    grid.with_context(|| format!("Failed to parse grid from file: {}", path.display()))
}

/// Parse a grid from a JSON matrix
pub fn parse_grid_from_json(content: &str) -> Result<Grid> {
    let matrix: Value = serde_json::from_str(content).context("Grid is not valid JSON")?;
    Ok(encode_json(&matrix)?)
}

/// Parse a grid from its plaintext representation.
///
/// Each non-empty line is a row: `1`, `#`, `O` or `*` for alive cells and
/// `0`, `.` or `_` for dead ones. Lines starting with `!` are comments.
/// Rows may have different lengths.
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '1' | '#' | 'O' | '*' => row.push(Cell::Alive),
                '0' | '.' | '_' => row.push(Cell::Dead),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {})",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(rows))
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    write_creating_dirs(path.as_ref(), grid_to_string(grid))
}

/// Save a grid to a file as a pretty-printed JSON matrix
pub fn save_grid_to_json_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content =
        serde_json::to_string_pretty(&grid_to_json(grid)).context("Failed to serialize grid")?;
    write_creating_dirs(path.as_ref(), content)
}

fn write_creating_dirs(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.display()))
}

/// Convert a grid to the `1`/`0` plaintext form
pub fn grid_to_string(grid: &Grid) -> String {
    decode_with_markers(grid, '1', '0')
        .into_iter()
        .map(|row| row.into_iter().chain(std::iter::once('\n')).collect::<String>())
        .collect()
}

/// Convert a grid to a JSON matrix of `1`/`0`
pub fn grid_to_json(grid: &Grid) -> Value {
    Value::from(decode_with_markers(grid, 1u8, 0u8))
}

/// Create example pattern files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
    ];
    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let grid = parse_grid_from_string("! a comment\n.#.\n#_#\n\n010\n").unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_count(), 4);
        assert_eq!(grid.get(0, 1), Some(Cell::Alive));
        assert_eq!(grid.get(1, 0), Some(Cell::Alive));
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.get(2, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_parse_ragged() {
        let grid = parse_grid_from_string("01\n1\n0110\n").unwrap();
        assert_eq!(grid.row_len(0), Some(2));
        assert_eq!(grid.row_len(1), Some(1));
        assert_eq!(grid.row_len(2), Some(4));
    }

    #[test]
    fn test_grid_to_string() {
        let grid = Grid::from_bools(vec![
            vec![false, true, false],
            vec![true, false, true],
            vec![false, true],
        ]);
        assert_eq!(grid_to_string(&grid), "010\n101\n01\n");
    }

    #[test]
    fn test_grid_to_json() {
        let grid = Grid::from_bools(vec![vec![true, false], vec![false]]);
        assert_eq!(grid_to_json(&grid), serde_json::json!([[1, 0], [0]]));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested").join("test_grid.txt");

        let original_grid = Grid::from_bools(vec![vec![true, false, true], vec![false, true, false]]);
        save_grid_to_file(&original_grid, &file_path).unwrap();

        let loaded_grid = load_grid_from_file(&file_path).unwrap();
        assert_eq!(original_grid, loaded_grid);
    }

    #[test]
    fn test_save_json_into_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("out").join("deep").join("grid.json");

        let grid = Grid::from_bools(vec![vec![false, true], vec![true]]);
        save_grid_to_json_file(&grid, &file_path).unwrap();

        assert_eq!(load_grid_from_file(&file_path).unwrap(), grid);
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("grid.json");
        std::fs::write(&file_path, r#"[[1, 0, "x"], [null, true]]"#).unwrap();

        let grid = load_grid_from_file(&file_path).unwrap();
        assert_eq!(grid, Grid::from_bools(vec![vec![true, false, true], vec![false, true]]));

        std::fs::write(&file_path, r#"[[1, 0], 7]"#).unwrap();
        assert!(load_grid_from_file(&file_path).is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_grid_from_string("010\n1X1\n010\n").is_err());
        assert!(parse_grid_from_string("").is_err());
        assert!(parse_grid_from_string("! only comments\n").is_err());
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        create_example_grids(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.height(), 5);
        assert_eq!(glider.living_count(), 5);
    }
}
