use std::fs;
use std::path::Path;

use log_extract::output::output_path;
use log_extract::{
    build_index, extract, run_query, write_output, Config, IndexEntry, LogExtractError, QuerySession,
};
use tempfile::TempDir;

const LOG: &str = "2024-01-01 a\n2024-01-01 b\n2024-01-02 c\n";

fn config_in(dir: &Path) -> Config {
    Config {
        log_file: dir.join("app.log"),
        index_file: dir.join("log_index.txt"),
        output_dir: dir.join("output"),
        read_buffer_capacity: 64,
        search_cache_capacity: 2,
    }
}

fn setup(log: &str) -> (TempDir, Config, Vec<IndexEntry>) {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(dir.path());
    fs::write(&cfg.log_file, log).unwrap();
    let index = build_index(&cfg).unwrap();
    (dir, cfg, index)
}

#[test]
fn extracts_each_date_run() {
    let (_dir, cfg, index) = setup(LOG);

    let day2 = extract(&cfg.log_file, &index, "2024-01-02", cfg.read_buffer_capacity).unwrap();
    assert_eq!(day2, vec!["2024-01-02 c"]);

    let day1 = extract(&cfg.log_file, &index, "2024-01-01", cfg.read_buffer_capacity).unwrap();
    assert_eq!(day1, vec!["2024-01-01 a", "2024-01-01 b"]);

    let day3 = extract(&cfg.log_file, &index, "2024-01-03", cfg.read_buffer_capacity).unwrap();
    assert!(day3.is_empty());
}

#[test]
fn only_first_run_of_a_repeated_date_is_returned() {
    let (_dir, cfg, index) = setup("x 1\nx 2\ny 3\nx 4\n");
    let lines = extract(&cfg.log_file, &index, "x", cfg.read_buffer_capacity).unwrap();
    assert_eq!(lines, vec!["x 1", "x 2"]);
}

#[test]
fn large_log_spans_many_buffers() {
    let mut log = String::new();
    for day in 1..=28 {
        for n in 0..50 {
            log.push_str(&format!("2024-02-{day:02} event {n} payload\n"));
        }
    }
    let (_dir, cfg, index) = setup(&log);
    assert_eq!(index.len(), 28);

    let lines = extract(&cfg.log_file, &index, "2024-02-17", cfg.read_buffer_capacity).unwrap();
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0], "2024-02-17 event 0 payload");
    assert_eq!(lines[49], "2024-02-17 event 49 payload");
}

#[test]
fn output_file_has_newline_terminated_lines() {
    let (_dir, cfg, index) = setup(LOG);
    let lines = extract(&cfg.log_file, &index, "2024-01-01", cfg.read_buffer_capacity).unwrap();

    let path = write_output(&cfg.output_dir, "2024-01-01", &lines).unwrap();
    assert_eq!(path, cfg.output_dir.join("output_2024-01-01.txt"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "2024-01-01 a\n2024-01-01 b\n"
    );

    write_output(&cfg.output_dir, "2024-01-01", &["replaced".to_string()]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "replaced\n");
}

#[test]
fn empty_result_writes_nothing() {
    let (_dir, cfg, _index) = setup(LOG);

    let written = run_query(&cfg, "2024-01-09").unwrap();
    assert_eq!(written, None);
    assert!(!cfg.output_dir.exists());
    assert!(!output_path(&cfg.output_dir, "2024-01-09").exists());
}

#[test]
fn matching_query_writes_output_file() {
    let (_dir, cfg, _index) = setup(LOG);

    let written = run_query(&cfg, "2024-01-01").unwrap();
    let expected = cfg.output_dir.join("output_2024-01-01.txt");
    assert_eq!(written, Some(expected.clone()));
    assert_eq!(
        fs::read_to_string(&expected).unwrap(),
        "2024-01-01 a\n2024-01-01 b\n"
    );
}

#[test]
fn zero_read_buffer_still_indexes_and_extracts() {
    let dir = TempDir::new().unwrap();
    let cfg = Config {
        read_buffer_capacity: 0,
        ..config_in(dir.path())
    };
    fs::write(&cfg.log_file, "2024-01-01 a\n2024-01-02 b\n").unwrap();

    let index = build_index(&cfg).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(fs::read_to_string(&cfg.index_file).unwrap(), "2024-01-01 0\n2024-01-02 13\n");

    let lines = extract(&cfg.log_file, &index, "2024-01-01", cfg.read_buffer_capacity).unwrap();
    assert_eq!(lines, vec!["2024-01-01 a"]);
    assert_eq!(run_query(&cfg, "2024-01-02").unwrap(), Some(output_path(&cfg.output_dir, "2024-01-02")));
}

#[test]
fn deleted_log_is_reported_by_path() {
    let (_dir, cfg, index) = setup(LOG);
    fs::remove_file(&cfg.log_file).unwrap();

    let err = extract(&cfg.log_file, &index, "2024-01-01", cfg.read_buffer_capacity).unwrap_err();
    assert!(matches!(err, LogExtractError::MissingLogFile(ref p) if p == &cfg.log_file));
    assert!(err.to_string().contains("app.log"));
}

#[test]
fn session_builds_missing_index() {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(dir.path());
    fs::write(&cfg.log_file, LOG).unwrap();
    assert!(!cfg.index_file.exists());

    let mut session = QuerySession::open(cfg.clone()).unwrap();
    assert!(cfg.index_file.exists());
    assert_eq!(session.index().len(), 2);
    assert_eq!(session.query("2024-01-02").unwrap(), vec!["2024-01-02 c"]);
}

#[test]
fn session_does_not_rebuild_stale_index() {
    let (_dir, cfg, _index) = setup(LOG);
    fs::write(&cfg.log_file, "2024-01-01 a\n2024-01-01 b\n2024-01-02 c\n2024-01-03 d\n").unwrap();

    let mut session = QuerySession::open(cfg).unwrap();
    assert_eq!(session.index().len(), 2);
    assert!(session.query("2024-01-03").unwrap().is_empty());
}

#[test]
fn session_caches_recent_queries() {
    let (_dir, cfg, _index) = setup(LOG);
    let mut session = QuerySession::open(cfg.clone()).unwrap();

    let first = session.query("2024-01-01").unwrap();
    assert!(session.is_cached("2024-01-01"));

    // Cached results survive the log disappearing.
    fs::remove_file(&cfg.log_file).unwrap();
    assert_eq!(session.query("2024-01-01").unwrap(), first);

    // Capacity 2: a third distinct date evicts the least recently used.
    session.query("nope-1").unwrap();
    session.query("nope-2").unwrap();
    assert!(!session.is_cached("2024-01-01"));
}

#[test]
fn session_open_fails_without_log() {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(dir.path());
    assert!(QuerySession::open(cfg.clone()).is_err());
    assert!(!cfg.index_file.exists());
}
