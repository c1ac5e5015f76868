//! CLI regression test
//!
//! Runs the compiled binary against real stream files and checks the exact
//! stdout tuple format and exit statuses.

use std::process::Command;

fn glyphdiff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glyphdiff"))
}

fn image_bytes(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P5\n{width} {height}\n255\n").into_bytes();
    bytes.extend_from_slice(pixels);
    bytes
}

#[test]
fn cli_reg_scores_all_pairs_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glyphs.pgm");
    let mut data = image_bytes(2, 2, &[255; 4]);
    data.extend_from_slice(&image_bytes(2, 2, &[255; 4]));
    data.extend_from_slice(&image_bytes(2, 2, &[0; 4]));
    std::fs::write(&path, &data).unwrap();

    let output = glyphdiff().arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0\t1\t1.000000");
    assert!(lines[1].starts_with("0\t2\t"));
    assert!(lines[2].starts_with("1\t2\t"));
    // All-white vs all-black 2x2: the XOR canvas is all white, nothing
    // counts, identical fixed value both times.
    assert_eq!(lines[1], "0\t2\t0.000000");
    assert_eq!(lines[2], "1\t2\t0.000000");
}

#[test]
fn cli_reg_empty_stream_emits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pgm");
    std::fs::write(&path, b"").unwrap();

    let output = glyphdiff().arg(&path).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_reg_missing_argument_prints_usage_and_exits_zero() {
    let output = glyphdiff().output().unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn cli_reg_unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = glyphdiff()
        .arg(dir.path().join("missing.pgm"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
