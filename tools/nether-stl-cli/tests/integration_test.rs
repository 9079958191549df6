//! Integration tests for nether-stl
//!
//! Runs the built binary against generated STL files in a temp directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const TETRAHEDRON: &str = "solid tetra
facet normal 0 0 -1
  outer loop
    vertex 0 0 0
    vertex 0 1 0
    vertex 1 0 0
  endloop
endfacet
facet normal 0 -1 0
  outer loop
    vertex 0 0 0
    vertex 1 0 0
    vertex 0 0 1
  endloop
endfacet
facet normal -1 0 0
  outer loop
    vertex 0 0 0
    vertex 0 0 1
    vertex 0 1 0
  endloop
endfacet
facet normal 0.577350 0.577350 0.577350
  outer loop
    vertex 1 0 0
    vertex 0 1 0
    vertex 0 0 1
  endloop
endfacet
endsolid tetra
";

fn nether_stl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nether-stl"))
        .args(args)
        .output()
        .expect("Failed to run nether-stl")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

/// Test ASCII -> binary conversion with the default output path
#[test]
fn test_convert_ascii_to_binary() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("tetra.stl");
    std::fs::write(&input, TETRAHEDRON).expect("Failed to write input");

    let out = nether_stl(&["convert", path_str(&input)]);
    assert!(out.status.success(), "convert failed: {:?}", out);

    let output = dir.path().join("tetra.binary.stl");
    let data = std::fs::read(&output).expect("Failed to read binary output");
    assert_eq!(data.len(), 84 + 4 * 50);
    assert_eq!(&data[80..84], &4u32.to_le_bytes());
}

/// Test binary -> ASCII conversion back to the canonical text
#[test]
fn test_convert_roundtrip_to_ascii() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("tetra.stl");
    let binary = dir.path().join("tetra.bin.stl");
    let ascii = dir.path().join("tetra.txt.stl");
    std::fs::write(&input, TETRAHEDRON).expect("Failed to write input");

    let out = nether_stl(&["convert", path_str(&input), "-o", path_str(&binary)]);
    assert!(out.status.success(), "convert failed: {:?}", out);
    let out = nether_stl(&[
        "convert",
        path_str(&binary),
        "-o",
        path_str(&ascii),
        "--to",
        "ascii",
    ]);
    assert!(out.status.success(), "convert failed: {:?}", out);

    let text = std::fs::read_to_string(&ascii).expect("Failed to read ASCII output");
    assert!(text.starts_with("solid object\nfacet normal 0.000000 0.000000 -1.000000\n"));
    assert!(text.ends_with("endsolid object\n"));
    assert_eq!(text.matches("endfacet").count(), 4);
}

/// Test the info report
#[test]
fn test_info() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("tetra.stl");
    std::fs::write(&input, TETRAHEDRON).expect("Failed to write input");

    let out = nether_stl(&["info", path_str(&input)]);
    assert!(out.status.success(), "info failed: {:?}", out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("encoding:  ascii"), "{stdout}");
    assert!(stdout.contains("solid:     'tetra'"), "{stdout}");
    assert!(stdout.contains("triangles: 4"), "{stdout}");
    assert!(stdout.contains("max:       1.000000 1.000000 1.000000"), "{stdout}");
    assert!(stdout.contains("center:    0.500000 0.500000 0.500000"), "{stdout}");
}

/// Test check with and without strict solid names
#[test]
fn test_check_strict() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("renamed.stl");
    std::fs::write(&input, TETRAHEDRON.replace("endsolid tetra", "endsolid")).unwrap();

    assert!(nether_stl(&["check", path_str(&input)]).status.success());

    let out = nether_stl(&["check", "--strict", path_str(&input)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does not match endsolid"), "{stderr}");
}

/// Test that a truncated binary file is rejected with both byte counts
#[test]
fn test_check_truncated_binary() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("overflow.stl");
    let mut data = vec![0u8; 80];
    data.extend_from_slice(&1_000_000_000u32.to_le_bytes());
    data.extend(std::iter::repeat_n(0x7Fu8, 16300));
    std::fs::write(&input, data).unwrap();

    let out = nether_stl(&["check", path_str(&input)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("50000000000"), "{stderr}");
    assert!(stderr.contains("16300"), "{stderr}");
}

/// Test a missing input file
#[test]
fn test_missing_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = nether_stl(&["info", path_str(&dir.path().join("nope.stl"))]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read"));
}
