//! Tests for whole-directory runs through `web_image_producer::run`.

use std::fs;

use web_image_producer::config::RunConfig;
use web_image_producer::run;

use crate::common::{expected_half_viewport_names, file_names, write_gradient_png};

#[test]
fn test_three_sources_make_27_files() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_gradient_png(src_dir.path(), "a.png", 240, 160);
    write_gradient_png(src_dir.path(), "b.png", 160, 240);
    write_gradient_png(src_dir.path(), "c.png", 200, 200);

    let config = RunConfig::new(src_dir.path().into(), out_dir.path().into(), 50, 80);
    let reports = run(&config).unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.written.len() == 9));

    let names = file_names(out_dir.path());
    assert_eq!(names.len(), 27);
    let mut expected: Vec<String> = ["a", "b", "c"]
        .iter()
        .flat_map(|stem| expected_half_viewport_names(stem))
        .collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn test_subdirectories_are_skipped() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_gradient_png(src_dir.path(), "top.png", 120, 80);
    let nested = src_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_gradient_png(&nested, "deep.png", 120, 80);

    let config = RunConfig::new(src_dir.path().into(), out_dir.path().into(), 50, 80);
    let reports = run(&config).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(file_names(out_dir.path()), expected_half_viewport_names("top"));
}

#[test]
fn test_single_file_input() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let source = write_gradient_png(src_dir.path(), "solo.png", 120, 80);
    write_gradient_png(src_dir.path(), "ignored.png", 120, 80);

    let config = RunConfig::new(source, out_dir.path().into(), 50, 80);
    run(&config).unwrap();

    assert_eq!(file_names(out_dir.path()), expected_half_viewport_names("solo"));
}

#[test]
fn test_bad_file_aborts_batch() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_gradient_png(src_dir.path(), "good.png", 120, 80);
    fs::write(src_dir.path().join("notes.txt"), b"shopping list").unwrap();

    let config = RunConfig::new(src_dir.path().into(), out_dir.path().into(), 50, 80);
    let err = run(&config).unwrap_err();

    assert_eq!(err.category(), "decode");
    assert_eq!(err.path(), Some(src_dir.path().join("notes.txt").as_path()));
    // depending on listing order the good image may or may not have been written first
    let written = file_names(out_dir.path()).len();
    assert!(written == 0 || written == 9, "unexpected partial output: {written}");
}

#[test]
fn test_invalid_config_touches_nothing() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_gradient_png(src_dir.path(), "a.png", 120, 80);

    let config = RunConfig::new(src_dir.path().into(), out_dir.path().into(), 0, 80);
    let err = run(&config).unwrap_err();

    assert_eq!(err.category(), "config");
    assert!(file_names(out_dir.path()).is_empty());
}

#[test]
fn test_empty_directory_is_a_no_op() {
    let src_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let config = RunConfig::new(src_dir.path().into(), out_dir.path().into(), 50, 80);
    assert!(run(&config).unwrap().is_empty());
}
