//! End-to-end runs of the directory batch against scratch directories.

use std::fs;
use std::path::Path;

use bgstrip::{StripConfig, TRANSPARENT_WHITE, process_directory, process_directory_with};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

fn config_for(dir: &Path) -> StripConfig {
    StripConfig {
        directory: dir.to_path_buf(),
        ..StripConfig::default()
    }
}

fn write_two_tone_png(path: &Path) {
    let raw = vec![255, 255, 255, 255, 10, 10, 10, 255];
    RgbaImage::from_raw(2, 1, raw).unwrap().save(path).unwrap();
}

#[test]
fn png_is_stripped_in_place() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("logo.png");
    write_two_tone_png(&input);

    let report = process_directory(&config_for(dir.path())).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);

    let out = image::open(&input).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (2, 1));
    assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
    assert_eq!(*out.get_pixel(1, 0), Rgba([10, 10, 10, 255]));
}

#[test]
fn jpeg_gets_a_sibling_png() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));
    for y in 0..16 {
        for x in 0..8 {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    img.save_with_format(dir.path().join("Photo.JPEG"), ImageFormat::Jpeg)
        .unwrap();

    let report = process_directory(&config_for(dir.path())).unwrap();
    assert_eq!(report.processed, 1);

    let out_path = dir.path().join("Photo.png");
    assert!(out_path.exists());
    assert!(dir.path().join("Photo.JPEG").exists());

    let out = image::open(&out_path).unwrap();
    assert!(out.color().has_alpha());
    let out = out.to_rgba8();
    assert_eq!(out.dimensions(), (16, 16));
    assert_eq!(out.get_pixel(15, 0)[3], 0);
    assert_eq!(out.get_pixel(0, 0)[3], 255);
}

#[test]
fn corrupt_file_is_reported_and_batch_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a_broken.jpg"), b"\xFF\xD8 truncated").unwrap();
    write_two_tone_png(&dir.path().join("b_good.png"));
    fs::write(dir.path().join("readme.txt"), b"not an image").unwrap();

    let mut seen = Vec::new();
    let report = process_directory_with(&config_for(dir.path()), |input, outcome| {
        seen.push((input.to_path_buf(), outcome.is_ok()));
    })
    .unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.skipped, 1);
    assert!(!dir.path().join("a_broken.png").exists());

    assert_eq!(seen.len(), 2);
    assert!(!seen[0].1);
    assert!(seen[1].1);

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.input, dir.path().join("a_broken.jpg"));
    assert!(failure.to_string().starts_with("Error processing "));
}

#[test]
fn output_dir_leaves_inputs_untouched() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");
    let input = dir.path().join("logo.png");
    write_two_tone_png(&input);
    let before = fs::read(&input).unwrap();

    let config = StripConfig {
        output_dir: Some(out_dir.clone()),
        ..config_for(dir.path())
    };
    let report = process_directory(&config).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(fs::read(&input).unwrap(), before);
    let out = image::open(out_dir.join("logo.png")).unwrap().to_rgba8();
    assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
}

#[test]
fn second_run_is_a_no_op_on_pixels() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("logo.png");
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 255]));
    img.put_pixel(1, 1, Rgba([40, 80, 120, 100]));
    img.save(&input).unwrap();

    let config = config_for(dir.path());
    process_directory(&config).unwrap();
    let first = image::open(&input).unwrap().to_rgba8();
    process_directory(&config).unwrap();
    let second = image::open(&input).unwrap().to_rgba8();

    assert_eq!(first, second);
    assert_eq!(*second.get_pixel(1, 1), Rgba([40, 80, 120, 100]));
}

#[test]
fn missing_directory_fails_the_call() {
    let dir = TempDir::new().unwrap();
    let res = process_directory(&config_for(&dir.path().join("nope")));
    assert!(matches!(res, Err(bgstrip::Error::NotADirectory { .. })));
}

#[test]
fn missing_input_dir_does_not_create_output_dir() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");
    let config = StripConfig {
        directory: dir.path().join("nope"),
        output_dir: Some(out_dir.clone()),
        ..StripConfig::default()
    };

    assert!(process_directory(&config).is_err());
    assert!(!out_dir.exists());
}

#[test]
fn png_input_keeps_its_name_over_a_jpeg_twin() {
    let dir = TempDir::new().unwrap();
    RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]))
        .save_with_format(dir.path().join("a.jpg"), ImageFormat::Jpeg)
        .unwrap();
    write_two_tone_png(&dir.path().join("a.png"));

    let report = process_directory(&config_for(dir.path())).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.outcomes.len(), 1);

    // a.png was stripped from its own content, not from a.jpg's
    let out = image::open(dir.path().join("a.png")).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (2, 1));
    assert_eq!(*out.get_pixel(0, 0), TRANSPARENT_WHITE);
    assert_eq!(*out.get_pixel(1, 0), Rgba([10, 10, 10, 255]));
}

#[test]
fn failed_write_keeps_input_and_batch_going() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.jpg");
    RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]))
        .save_with_format(&input, ImageFormat::Jpeg)
        .unwrap();
    let before = fs::read(&input).unwrap();
    // photo.jpg's output path is occupied by a non-empty directory
    let blocked = dir.path().join("photo.png");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep.txt"), b"keep").unwrap();
    write_two_tone_png(&dir.path().join("z_logo.png"));

    let report = process_directory(&config_for(dir.path())).unwrap();

    assert_eq!(report.errors, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(fs::read(&input).unwrap(), before);
    assert_eq!(fs::read(blocked.join("keep.txt")).unwrap(), b"keep");
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3, "stray files left behind: {names:?}");
}
