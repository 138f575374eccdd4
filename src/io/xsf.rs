// src/io/xsf.rs

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SpiralError;
use crate::model::structure::{cell_matrix, scaled_atoms, SpiralStructure};

/// Z of the species written when nothing else is configured (Fe).
pub const DEFAULT_ATOMIC_NUMBER: u32 = 26;

const HEADER: [&str; 2] = [
    "# XSF file generated for magnetic spiral visualization",
    "# Can be opened in VESTA to visualize magnetic moments",
];

/// Renders the XSF document for a spiral.
///
/// Positions and moments are zipped in order; the atom count in the
/// PRIMCOORD block is `positions.len()`. `extents` only feeds the cell.
pub fn format(
    positions: &[[usize; 3]],
    moments: &[[f64; 3]],
    extents: [usize; 3],
    scale: f64,
    atomic_number: u32,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, positions, moments, extents, scale, atomic_number);
    out
}

/// Same document as `format`, fed from a generated structure.
pub fn format_structure(structure: &SpiralStructure, scale: f64, atomic_number: u32) -> String {
    format(
        &structure.positions,
        &structure.moments,
        structure.extents,
        scale,
        atomic_number,
    )
}

fn write_document(
    out: &mut String,
    positions: &[[usize; 3]],
    moments: &[[f64; 3]],
    extents: [usize; 3],
    scale: f64,
    atomic_number: u32,
) -> std::fmt::Result {
    for line in HEADER {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "CRYSTAL")?;

    // Orthogonal cell, one lattice vector per row
    let cell = cell_matrix(extents, scale);
    writeln!(out, "PRIMVEC")?;
    writeln!(out, "{:6.1}  0.0  0.0", cell[0][0])?;
    writeln!(out, "  0.0  {:6.1}  0.0", cell[1][1])?;
    writeln!(out, "  0.0  0.0  {:6.1}", cell[2][2])?;

    writeln!(out, "PRIMCOORD")?;
    writeln!(out, "{} 1", positions.len())?;

    for atom in scaled_atoms(positions, moments, scale) {
        let [x, y, z] = atom.position;
        let [mx, my, mz] = atom.moment;
        writeln!(
            out,
            "{}  {:8.4}  {:8.4}  {:8.4}  {:8.4}  {:8.4}  {:8.4}",
            atomic_number, x, y, z, mx, my, mz
        )?;
    }

    writeln!(out)
}

/// Writes the document to `dir/filename`, replacing any existing file,
/// and returns the absolute path of the written file.
pub fn write(
    dir: &Path,
    filename: &str,
    positions: &[[usize; 3]],
    moments: &[[f64; 3]],
    extents: [usize; 3],
    scale: f64,
    atomic_number: u32,
) -> Result<PathBuf, SpiralError> {
    let path = super::resolve_output_path(dir, filename);
    let doc = format(positions, moments, extents, scale, atomic_number);

    write_text(&path, &doc).map_err(|e| SpiralError::io(&path, e))?;
    log::debug!("Wrote {} bytes to {:?}", doc.len(), path);

    fs::canonicalize(&path).map_err(|e| SpiralError::io(&path, e))
}

fn write_text(path: &Path, text: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::spiral;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mspiral-xsf-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn numbers(line: &str) -> Vec<f64> {
        line.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_single_site_document() {
        let doc = format(&[[0, 0, 0]], &[[1.0, 0.0, 0.0]], [1, 1, 1], 1.0, 26);
        let lines: Vec<&str> = doc.lines().collect();

        assert_eq!(lines[0], HEADER[0]);
        assert_eq!(lines[1], HEADER[1]);
        assert_eq!(lines[2], "CRYSTAL");
        assert_eq!(lines[3], "PRIMVEC");
        assert_eq!(lines[4], "   1.0  0.0  0.0");
        assert_eq!(lines[5], "  0.0     1.0  0.0");
        assert_eq!(lines[6], "  0.0  0.0     1.0");
        assert_eq!(lines[7], "PRIMCOORD");
        assert_eq!(lines[8], "1 1");
        assert_eq!(
            lines[9],
            "26    0.0000    0.0000    0.0000    1.0000    0.0000    0.0000"
        );
        assert_eq!(
            lines[9].split_whitespace().collect::<Vec<_>>(),
            vec!["26", "0.0000", "0.0000", "0.0000", "1.0000", "0.0000", "0.0000"]
        );
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], "");
        assert!(doc.ends_with("\n\n"));
    }

    #[test]
    fn test_default_cell_header() {
        let s = spiral::generate([3, 6, 6], [0.0, 1.0 / 3.0, 1.0 / 3.0], [1.0, 0.0, 0.0]);
        let doc = format_structure(&s, 3.0, DEFAULT_ATOMIC_NUMBER);
        let lines: Vec<&str> = doc.lines().collect();

        assert_eq!(lines[4], "   9.0  0.0  0.0");
        assert_eq!(lines[5], "  0.0    18.0  0.0");
        assert_eq!(lines[6], "  0.0  0.0    18.0");
        assert_eq!(lines[8], "108 1");
        // header + 108 records + trailing blank
        assert_eq!(lines.len(), 9 + 108 + 1);
    }

    #[test]
    fn test_scale_multiplies_everything() {
        let s = spiral::generate([2, 2, 3], [0.1, 0.2, 0.3], [0.5, 0.5, 0.25]);
        let unit = format_structure(&s, 1.0, 26);
        let scaled = format_structure(&s, 2.0, 26);

        let unit_lines: Vec<&str> = unit.lines().collect();
        let scaled_lines: Vec<&str> = scaled.lines().collect();
        assert_eq!(unit_lines.len(), scaled_lines.len());

        for row in 4..7 {
            let a = numbers(unit_lines[row]);
            let b = numbers(scaled_lines[row]);
            assert!((b[row - 4] - 2.0 * a[row - 4]).abs() < 1e-9);
        }

        for (site, line) in scaled_lines[9..9 + s.len()].iter().enumerate() {
            let vals = numbers(line);
            assert_eq!(vals[0], 26.0);
            let p = s.positions[site];
            let m = s.moments[site];
            for axis in 0..3 {
                assert!((vals[1 + axis] - 2.0 * p[axis] as f64).abs() < 1e-4);
                assert!((vals[4 + axis] - 2.0 * m[axis]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_records_match_scaled_atoms() {
        let s = spiral::generate([1, 2, 2], [0.0, 0.25, 0.1], [0.0, 1.0, 0.5]);
        let doc = format_structure(&s, 1.5, 26);
        let lines: Vec<&str> = doc.lines().collect();
        for (line, atom) in lines[9..].iter().zip(s.to_atoms(1.5)) {
            let vals = numbers(line);
            for axis in 0..3 {
                assert!((vals[1 + axis] - atom.position[axis]).abs() < 1e-4);
                assert!((vals[4 + axis] - atom.moment[axis]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_records_follow_input_order() {
        let positions = [[1, 0, 0], [0, 0, 0]];
        let moments = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
        let doc = format(&positions, &moments, [2, 1, 1], 1.0, 25);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(numbers(lines[9]), vec![25.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(numbers(lines[10]), vec![25.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_write_creates_and_truncates() {
        let dir = temp_dir("write");
        let long = spiral::generate([2, 2, 2], [0.0, 0.25, 0.25], [1.0, 0.0, 0.0]);
        let short = spiral::generate([1, 1, 1], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);

        let first = write(&dir, "spiral.xsf", &long.positions, &long.moments, long.extents, 3.0, 26).unwrap();
        assert!(first.is_absolute());
        assert!(fs::read_to_string(&first).unwrap().contains("8 1"));

        let second = write(&dir, "spiral.xsf", &short.positions, &short.moments, short.extents, 1.0, 26).unwrap();
        assert_eq!(first, second);
        let text = fs::read_to_string(&second).unwrap();
        assert_eq!(text, format_structure(&short, 1.0, 26));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = temp_dir("missing").join("does").join("not").join("exist");
        let err = write(&dir, "spiral.xsf", &[[0, 0, 0]], &[[1.0, 0.0, 0.0]], [1, 1, 1], 1.0, 26)
            .unwrap_err();
        assert!(matches!(err, SpiralError::Io { .. }));
    }
}
