use language_tour::core::config::TourOptions;
use language_tour::core::scratch::SCRATCH_FILE_NAME;
use language_tour::demos::Demo;
use language_tour::demos::datetime::{format_timestamp, now};
use language_tour::demos::files::{exercise_scratch_file, run, scratch_content};
use language_tour::utils;
use std::fs;

fn looks_like_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn test_file_walkthrough_cleans_up() {
    let dir = tempfile::tempdir().unwrap();

    let report = exercise_scratch_file(dir.path()).unwrap();

    assert!(!dir.path().join(SCRATCH_FILE_NAME).exists());
    assert_eq!(report.lines.len(), 3);
    assert!(report.lines[2].starts_with("Created at: "));

    // The reported size is the size of exactly what was written.
    let stamp = report.lines[2].trim_start_matches("Created at: ");
    assert!(looks_like_timestamp(stamp), "unexpected stamp {stamp:?}");
    assert_eq!(report.size, scratch_content(stamp).len() as u64);
}

#[test]
fn test_file_walkthrough_swallows_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-there");

    assert!(run(&missing).is_none());
    assert!(!missing.join(SCRATCH_FILE_NAME).exists());
}

#[test]
fn test_file_walkthrough_replaces_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SCRATCH_FILE_NAME), "left over\n").unwrap();

    let report = run(dir.path()).unwrap();

    assert_eq!(report.lines[0], "This is a temporary file");
    assert!(!dir.path().join(SCRATCH_FILE_NAME).exists());
}

#[test]
fn test_current_time_format_shape() {
    assert!(looks_like_timestamp(&format_timestamp(&now())));
}

#[test]
fn test_full_tour_leaves_no_scratch_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = TourOptions::new(Some(dir.path().to_path_buf()), false);

    utils::run_tour(&options);
    utils::run_single(Demo::Files, &options);

    assert!(!dir.path().join(SCRATCH_FILE_NAME).exists());
}
