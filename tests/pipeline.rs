//! End-to-end tests for a batch run against fixture corpora.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::Path;

use serde_json::{json, Value};
use songprep::config::Config;
use songprep::error::Error;
use songprep::services::runner::run;

// Helper writing a raw corpus fixture into `dir`
fn write_input(dir: &Path, value: &Value) -> Config {
    let config = Config::with_data_dir(dir);
    std::fs::write(&config.input_path, serde_json::to_string(value).unwrap()).unwrap();
    config
}

fn read_output(config: &Config) -> Value {
    let text = std::fs::read_to_string(&config.output_path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_two_of_five_survive() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_input(
        dir.path(),
        &json!([
            {
                "song_name": "晴天",
                "singer_name": ["周杰伦"],
                "lyric": "作词：周杰伦\\n作曲：周杰伦\\n故事的小黄花\\n从出生那年就飘着"
            },
            {
                "song_name": "广岛之恋",
                "singer_name": ["张洪量", "莫文蔚"],
                "lyric": "你早就该拒绝我"
            },
            {
                "song_name": "稻香 (Live)",
                "singer_name": ["周杰伦"],
                "lyric": "对这个世界如果你有太多的抱怨"
            },
            {
                "song_name": "后来",
                "singer_name": ["刘若英"],
                "lyric": "后来\\n我总算学会了如何去爱"
            },
            {
                "song_name": "空白",
                "singer_name": ["某人"],
                "lyric": "   \\n  "
            }
        ]),
    );

    let summary = run(&config).unwrap();
    assert_eq!(summary.report.input, 5);
    assert_eq!(summary.report.output, 2);
    assert_eq!(summary.output_path, config.output_path);

    assert_eq!(
        read_output(&config),
        json!([
            {
                "id": 26,
                "name": "晴天",
                "artist": "周杰伦",
                "lyric": "故事的小黄花\n从出生那年就飘着"
            },
            {
                "id": 27,
                "name": "后来",
                "artist": "刘若英",
                "lyric": "后来\n我总算学会了如何去爱"
            }
        ])
    );
}

#[test]
fn test_output_keeps_non_ascii_literal() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_input(
        dir.path(),
        &json!([{ "song_name": "七里香", "singer_name": ["周杰伦"], "lyric": "窗外的麻雀" }]),
    );

    run(&config).unwrap();
    let text = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("窗外的麻雀"));
    assert!(text.contains("\n  {\n    \"id\": 26,\n    \"name\": \"七里香\""));
}

#[test]
fn test_missing_field_aborts_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_input(
        dir.path(),
        &json!([
            { "song_name": "晴天", "singer_name": ["周杰伦"], "lyric": "故事的小黄花" },
            { "song_name": "七里香", "lyric": "窗外的麻雀" }
        ]),
    );

    match run(&config) {
        Err(Error::Parse { message, .. }) => assert!(message.contains("singer_name")),
        other => panic!("Expected Parse error, got {other:?}"),
    }
    assert!(!config.output_path.exists());
}

#[test]
fn test_existing_output_untouched_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    std::fs::write(&config.input_path, "not json").unwrap();
    std::fs::write(&config.output_path, "[]").unwrap();

    assert!(run(&config).is_err());
    assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), "[]");
}

#[test]
fn test_custom_markers_and_start_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_input(
        dir.path(),
        &json!([
            { "song_name": "后来", "singer_name": ["刘若英"], "lyric": "[前奏]\\n后来\\n我总算学会了" },
            { "song_name": "怀旧联唱", "singer_name": ["群星"], "lyric": "歌词" }
        ]),
    );
    config.start_id = 100;
    config.lyric_markers = songprep::lyrics::LyricMarkers::new(["[前奏]"]);
    config.name_filter.medley_markers.push("联唱".to_string());

    let summary = run(&config).unwrap();
    assert_eq!(summary.report.rejected_name, 1);
    assert_eq!(
        read_output(&config),
        json!([{ "id": 100, "name": "后来", "artist": "刘若英", "lyric": "后来\n我总算学会了" }])
    );
}

#[test]
fn test_invalid_utf8_input_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    std::fs::write(&config.input_path, [0xff]).unwrap();

    assert!(matches!(run(&config), Err(Error::Parse { .. })));
    assert!(!config.output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_rerun_keeps_output_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let config = write_input(
        dir.path(),
        &json!([{ "song_name": "七里香", "singer_name": ["周杰伦"], "lyric": "窗外的麻雀" }]),
    );
    std::fs::write(&config.output_path, "[]").unwrap();
    std::fs::set_permissions(&config.output_path, std::fs::Permissions::from_mode(0o644)).unwrap();

    run(&config).unwrap();

    let mode = std::fs::metadata(&config.output_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
