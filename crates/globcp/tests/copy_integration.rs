//! End-to-end tests for the public copy API

use bytes::Bytes;
use globcp::{copy, copy_each, copy_one, CopyOptions, ErrorKind, SourceFile};
use std::path::PathBuf;
use tempfile::TempDir;

fn options(dir: &TempDir) -> CopyOptions {
    CopyOptions::default().with_cwd(dir.path())
}

async fn write(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.unwrap();
    }
    tokio::fs::write(path, contents).await.unwrap();
}

#[tokio::test]
async fn test_copy_single_literal_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "foo.txt", "hello").await;

    let files = copy("foo.txt", "dist", options(&dir)).await.unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path(), dir.path().join("dist/foo.txt"));
    let copied = tokio::fs::read(dir.path().join("dist/foo.txt")).await.unwrap();
    assert_eq!(copied, b"hello");
}

#[tokio::test]
async fn test_copy_glob_preserves_structure() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/a.txt", "a").await;
    write(&dir, "src/sub/b.txt", "b").await;
    write(&dir, "src/skip.md", "md").await;

    let files = copy("src/**/*.txt", "dist", options(&dir)).await.unwrap();

    // Base is the pattern's non-glob parent, so structure under src/ survives.
    let created: Vec<PathBuf> = files.iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(
        created,
        vec![
            dir.path().join("dist/a.txt"),
            dir.path().join("dist/sub/b.txt"),
        ]
    );
    assert!(!dir.path().join("dist/skip.md").exists());
}

#[tokio::test]
async fn test_copy_each_with_src_base_override() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a/b.txt", "b").await;

    let files = copy_each(["a/b.txt"], "dist", options(&dir).with_src_base("a"))
        .await
        .unwrap();

    assert_eq!(files[0].path(), dir.path().join("dist/b.txt"));
    assert!(dir.path().join("dist/b.txt").exists());
}

#[tokio::test]
async fn test_copy_creates_missing_destination_tree() {
    let dir = TempDir::new().unwrap();
    write(&dir, "foo.txt", "x").await;

    copy("foo.txt", "deep/nested/dist", options(&dir))
        .await
        .unwrap();

    assert!(dir.path().join("deep/nested/dist/foo.txt").exists());
}

#[tokio::test]
async fn test_empty_sources_is_invalid() {
    let dir = TempDir::new().unwrap();
    let err = copy(Vec::<String>::new(), "dist", options(&dir))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    assert!(!dir.path().join("dist").exists());
}

#[tokio::test]
async fn test_empty_destination_is_invalid() {
    let dir = TempDir::new().unwrap();
    write(&dir, "foo.txt", "x").await;

    let err = copy("foo.txt", "", options(&dir)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArguments);
}

#[tokio::test]
async fn test_zero_concurrency_rejected_before_expansion() {
    let dir = TempDir::new().unwrap();
    // The working directory does not exist; a walk there would fail. The
    // invalid concurrency bound must surface first, before any expansion.
    let options = CopyOptions::default()
        .with_cwd(dir.path().join("missing"))
        .with_max_concurrency(0);

    let err = copy("src/*.txt", "dist", options).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArguments);
}

#[tokio::test]
async fn test_copy_one_returns_single_descriptor() {
    let dir = TempDir::new().unwrap();
    write(&dir, "one.txt", "only").await;

    let file = copy_one("one.txt", "dist", options(&dir)).await.unwrap();

    assert_eq!(file.path(), dir.path().join("dist/one.txt"));
    assert_eq!(file.bytes_copied(), 4);
}

#[tokio::test]
async fn test_copy_virtual_file_without_disk_source() {
    let dir = TempDir::new().unwrap();
    let virtual_file =
        SourceFile::new("generated/report.txt").with_contents(Bytes::from_static(b"contents"));

    let files = copy_each(vec![virtual_file], "dist", options(&dir))
        .await
        .unwrap();

    // The base defaults to cwd, so the relative path under it is preserved.
    assert_eq!(files[0].path(), dir.path().join("dist/generated/report.txt"));
    let written = tokio::fs::read(dir.path().join("dist/generated/report.txt"))
        .await
        .unwrap();
    assert_eq!(written, b"contents");
}

#[tokio::test]
async fn test_first_error_surfaces_and_earlier_copies_remain() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ok.txt", "fine").await;

    let err = copy_each(
        ["ok.txt", "does-not-exist.txt"],
        "dist",
        options(&dir).with_max_concurrency(1),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(dir.path().join("dist/ok.txt").exists());
}

#[tokio::test]
async fn test_result_order_matches_input_order_under_concurrency() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..16).map(|i| format!("file-{i:02}.txt")).collect();
    for name in &names {
        write(&dir, name, name).await;
    }

    let files = copy_each(
        names.clone(),
        "dist",
        options(&dir).with_max_concurrency(8),
    )
    .await
    .unwrap();

    let copied: Vec<String> = files
        .iter()
        .map(|f| f.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(copied, names);
}

#[tokio::test]
async fn test_glob_results_relative_to_computed_base() {
    let dir = TempDir::new().unwrap();
    write(&dir, "assets/img/logo.png", "png").await;
    write(&dir, "assets/img/icons/x.png", "png").await;

    let files = copy("assets/**/*.png", "out", options(&dir)).await.unwrap();

    let relative: Vec<PathBuf> = files
        .iter()
        .map(|f| f.source().relative_path())
        .collect();
    assert_eq!(
        relative,
        vec![
            PathBuf::from("img/icons/x.png"),
            PathBuf::from("img/logo.png"),
        ]
    );
}

#[tokio::test]
async fn test_mixed_globs_and_descriptors_keep_input_positions() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/a.txt", "a").await;
    write(&dir, "src/b.txt", "b").await;

    let virtual_file = SourceFile::new("v.txt").with_contents(Bytes::from_static(b"v"));
    let inputs = vec![
        globcp::CopyInput::from(virtual_file),
        globcp::CopyInput::from("src/*.txt"),
    ];

    let files = copy(inputs, "dist", options(&dir)).await.unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|f| f.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    // The descriptor came first in the input list, so it comes first in the
    // results; the pattern's matches follow in its position.
    assert_eq!(names, ["v.txt", "a.txt", "b.txt"]);
}

#[tokio::test]
async fn test_timestamps_preserved_by_default() {
    let dir = TempDir::new().unwrap();
    write(&dir, "stamped.txt", "t").await;

    let source = dir.path().join("stamped.txt");
    let old = filetime::FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_times(&source, old, old).unwrap();

    copy("stamped.txt", "dist", options(&dir)).await.unwrap();

    let metadata = std::fs::metadata(dir.path().join("dist/stamped.txt")).unwrap();
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    assert_eq!(mtime.unix_seconds(), old.unix_seconds());
}
