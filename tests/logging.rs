// tests/logging.rs
//
// Own test binary: the global logger can only be installed once per process.
//
use std::fs;

use cardfilter::logging;
use simplelog::LevelFilter;

#[test]
fn log_file_is_appended_not_truncated() {
    let dir = std::env::temp_dir().join(format!("cardfilter_log_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("store").join("debug.log");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "earlier run\n").unwrap();

    logging::init(&path, LevelFilter::Info).unwrap();
    cardfilter::logf!("second run");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("earlier run\n"));
    assert!(text.contains("second run"));

    let _ = fs::remove_dir_all(&dir);
}
