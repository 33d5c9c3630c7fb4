//! The process-wide streams are shared by every test in a binary, so the
//! whole lifecycle is checked in a single test, in order.

use leveled_log::{global, init, try_init, FormatFlags, Level, LevelMask, LogOptions};

#[test]
fn process_wide_streams_follow_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app");

    // Before init every stream discards.
    for level in Level::ALL {
        assert!(!global().get(level).is_active(), "{level} active before init");
    }
    leveled_log::error!("dropped {}", 1);
    leveled_log::info().print("dropped");
    assert!(!path.exists());

    // Only the masked levels become active.
    init(&path, false, FormatFlags::NONE, LevelMask::INFO | LevelMask::ERROR);
    leveled_log::debug!("d");
    leveled_log::info!("i {}", 1);
    leveled_log::warning!("w");
    leveled_log::error!("e");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Info: i 1\nError: e\n");
    assert!(!leveled_log::debug().is_active());
    assert!(!leveled_log::warning().is_active());

    // A second init appends to the same file and leaves other levels bound.
    init(&path, false, FormatFlags::NONE, LevelMask::DEBUG);
    leveled_log::debug!("second");
    leveled_log::info!("still bound");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Info: i 1\nError: e\nDebug: second\nInfo: still bound\n"
    );

    // A failed try_init changes nothing.
    let bad = LogOptions::new(dir.path().join("missing").join("app.log"));
    let err = try_init(&bad).unwrap_err();
    assert_eq!(err.code(), "OPEN_LOG_FILE");
    assert!(!leveled_log::warning().is_active());
    leveled_log::error!("after failure");
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .ends_with("Error: after failure\n"));
}
