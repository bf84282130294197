//! The root registry is process-wide, so everything touching it lives in one test.

use lingolog::{CallerContext, Level};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn root_helpers_share_one_registry() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("root.log");

    lingolog::flush_all_handlers().unwrap();

    let plain = lingolog::get_logger("plain");
    assert!(lingolog::install_translator(Arc::new(
        |msg: &str, ctx: &CallerContext| -> String {
            if ctx.domain == "publish" && msg == "Ad [42] published" {
                "Anzeige [42] veröffentlicht".to_string()
            } else {
                msg.to_string()
            }
        }
    )));
    let publish = lingolog::get_logger("publish");
    assert!(Arc::ptr_eq(&plain, &lingolog::get_logger("plain")));
    assert!(!lingolog::is_debug(&publish));

    let handle = lingolog::open_file_sink(&path).unwrap();
    plain.info("Ad [42] published");
    publish.info("Ad [42] published");
    publish.log(Level::Debug, "not shown");
    lingolog::flush_all_handlers().unwrap();
    handle.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] Ad [42] published"));
    assert!(lines[1].ends_with("[INFO] Anzeige [42] veröffentlicht"));
}
