//! End-to-end merge tests against real files.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tmm::{
    center_pad, crop_cell, merge_tiles, DecodeOptions, MergeOptions, Printer, RowPolicy,
    TileSize, TmmError,
};

fn write_tile(dir: &Path, name: &str, w: u32, h: u32, seed: u8) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(w, h, |x, y| Rgba([seed, x as u8 * 3, y as u8 * 5, 200 + seed]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn merged_cells_match_padded_sources() {
    let dir = tempdir().unwrap();
    let dims = [(10, 10), (8, 8), (10, 6), (4, 4), (10, 10), (7, 9)];
    let files: Vec<PathBuf> = dims
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| write_tile(dir.path(), &format!("t{}.png", i), w, h, i as u8))
        .collect();
    let out = dir.path().join("tilemap.png");

    let options = MergeOptions::with_columns(3);
    merge_tiles(&files, &out, &options, &Printer::quiet()).unwrap();

    let sheet = image::open(&out).unwrap().to_rgba8();
    let tile = TileSize::new(10, 10);
    assert_eq!(sheet.dimensions(), (30, 20));

    for (i, file) in files.iter().enumerate() {
        let source = image::open(file).unwrap().to_rgba8();
        let cell = crop_cell(&sheet, tile, 3, i).unwrap();
        assert_eq!(cell, center_pad(&source, tile), "cell {}", i);
    }
}

#[test]
fn ceil_rows_keep_the_last_partial_row() {
    let dir = tempdir().unwrap();
    let files: Vec<PathBuf> = (0..7)
        .map(|i| write_tile(dir.path(), &format!("{}.png", i), 4, 4, i as u8))
        .collect();
    let out = dir.path().join("sheet.png");

    let options = MergeOptions {
        columns: 3,
        rows: RowPolicy::Ceil,
        ..Default::default()
    };
    merge_tiles(&files, &out, &options, &Printer::quiet()).unwrap();

    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (12, 12));
    // Tile 6 sits at column 0, row 2.
    assert_eq!(sheet.get_pixel(0, 8).0, [6, 0, 0, 206]);
    // The rest of the last row is empty.
    assert_eq!(sheet.get_pixel(4, 8).0, [0, 0, 0, 0]);
}

#[test]
fn missing_file_fails_without_output() {
    let dir = tempdir().unwrap();
    let good = write_tile(dir.path(), "a.png", 4, 4, 1);
    let missing = dir.path().join("does-not-exist.png");
    let out = dir.path().join("tilemap.png");

    let err = merge_tiles(
        &[good, missing.clone()],
        &out,
        &MergeOptions::default(),
        &Printer::quiet(),
    )
    .unwrap_err();

    match err {
        TmmError::FileNotFound { path } => assert_eq!(path, missing),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    assert!(!out.exists());
}

#[test]
fn corrupt_file_fails_without_output() {
    let dir = tempdir().unwrap();
    let good = write_tile(dir.path(), "a.png", 4, 4, 1);
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"\x89PNG\r\n\x1a\nnot really").unwrap();
    let out = dir.path().join("tilemap.png");

    let err = merge_tiles(&[good, bad], &out, &MergeOptions::default(), &Printer::quiet())
        .unwrap_err();
    assert!(matches!(err, TmmError::Decode { .. }));
    assert!(!out.exists());
}

#[test]
fn truncated_png_needs_force_flag() {
    let dir = tempdir().unwrap();
    let path = write_tile(dir.path(), "cut.png", 32, 32, 9);
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 20]).unwrap();
    let out = dir.path().join("tilemap.png");

    let strict = merge_tiles(&[&path], &out, &MergeOptions::default(), &Printer::quiet());
    assert!(matches!(strict, Err(TmmError::Decode { .. })));
    assert!(!out.exists());

    let options = MergeOptions {
        decode: DecodeOptions::tolerant(),
        ..Default::default()
    };
    merge_tiles(&[&path], &out, &options, &Printer::quiet()).unwrap();
    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (32, 32));
}

/// Incompressible pixels, so cutting the file halfway cuts the image data.
fn write_noise_tile(dir: &Path, name: &str, w: u32, h: u32) -> (PathBuf, RgbaImage) {
    let mut state = 0x2545_f491u32;
    let img = RgbaImage::from_fn(w, h, |_, _| {
        let mut channel = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        };
        Rgba([channel(), channel(), channel(), channel()])
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    (path, img)
}

#[test]
fn truncated_image_data_keeps_decoded_rows() {
    let dir = tempdir().unwrap();
    let (path, source) = write_noise_tile(dir.path(), "half.png", 64, 64);
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
    let out = dir.path().join("tilemap.png");

    let strict = merge_tiles(&[&path], &out, &MergeOptions::default(), &Printer::quiet());
    assert!(matches!(strict, Err(TmmError::Decode { .. })));
    assert!(!out.exists());

    let options = MergeOptions {
        decode: DecodeOptions::tolerant(),
        ..Default::default()
    };
    merge_tiles(&[&path], &out, &options, &Printer::quiet()).unwrap();
    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (64, 64));

    let top: Vec<_> = (0..64).map(|x| sheet.get_pixel(x, 0).0).collect();
    let expected: Vec<_> = (0..64).map(|x| source.get_pixel(x, 0).0).collect();
    assert_eq!(top, expected);

    let bottom: Vec<_> = (0..64).map(|x| sheet.get_pixel(x, 63).0).collect();
    assert_eq!(bottom, vec![[0, 0, 0, 0]; 64]);
}

#[test]
fn output_is_deterministic() {
    let dir = tempdir().unwrap();
    let files = vec![
        write_tile(dir.path(), "a.png", 5, 3, 1),
        write_tile(dir.path(), "b.png", 3, 5, 2),
    ];
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    merge_tiles(&files, &first, &MergeOptions::default(), &Printer::quiet()).unwrap();
    merge_tiles(&files, &second, &MergeOptions::default(), &Printer::quiet()).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

// -- Binary --

fn tmm() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tmm"))
}

#[test]
fn cli_merges_with_flags() {
    let dir = tempdir().unwrap();
    let a = write_tile(dir.path(), "a.png", 4, 4, 1);
    let b = write_tile(dir.path(), "b.png", 4, 4, 2);
    let out = dir.path().join("sheet.png");

    let status = tmm()
        .current_dir(dir.path())
        .args(["merge", "-c", "1", "-o"])
        .arg(&out)
        .arg(&a)
        .arg(&b)
        .status()
        .unwrap();

    assert!(status.success());
    let sheet = image::open(&out).unwrap().to_rgba8();
    assert_eq!(sheet.dimensions(), (4, 8));
}

#[test]
fn cli_reads_manifest_defaults() {
    let dir = tempdir().unwrap();
    write_tile(dir.path(), "a.png", 4, 4, 1);
    write_tile(dir.path(), "b.png", 4, 4, 2);
    std::fs::write(dir.path().join("tmm.yaml"), "out: from-manifest.png\ncolumns: 1\n").unwrap();

    let status = tmm()
        .current_dir(dir.path())
        .args(["merge", "a.png", "b.png"])
        .status()
        .unwrap();

    assert!(status.success());
    let sheet = image::open(dir.path().join("from-manifest.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(sheet.dimensions(), (4, 8));
}

#[test]
fn cli_reports_missing_file() {
    let dir = tempdir().unwrap();

    let output = tmm()
        .current_dir(dir.path())
        .args(["merge", "ghost.png"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ghost.png"), "stderr: {}", stderr);
    assert!(stderr.contains("File not found."), "stderr: {}", stderr);
    assert!(!dir.path().join("tilemap.png").exists());
}

#[test]
fn cli_requires_files() {
    let output = tmm().arg("merge").output().unwrap();
    assert!(!output.status.success());
}
