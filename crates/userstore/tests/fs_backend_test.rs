use std::fs;
use std::path::Path;
use tempfile::TempDir;
use userstore::api::{Arguments, RecordApi};
use userstore::store::backend::{ByteStore, StorageBackend};
use userstore::store::fs_backend::FsBackend;
use userstore::store::WriteMode;

fn assert_no_tmp_files(dir: &Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_open_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    let mut handle = FsBackend::new().open(&path).unwrap();
    assert!(path.exists());
    assert!(handle.read_all().unwrap().is_empty());
}

#[test]
fn test_open_does_not_truncate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "[]").unwrap();

    let mut handle = FsBackend::new().open(&path).unwrap();
    assert_eq!(handle.read_all().unwrap(), b"[]");
    assert_eq!(fs::read(&path).unwrap(), b"[]");
}

#[test]
fn test_open_in_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("users.json");

    let err = FsBackend::new().open(&path).unwrap_err();
    assert!(matches!(err, userstore::error::StoreError::Io(_)));
}

#[test]
fn test_truncate_rewrite_shrinks_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "a much longer previous payload").unwrap();

    let mut handle = FsBackend::new().open(&path).unwrap();
    handle.read_all().unwrap();
    handle.rewrite(b"[]").unwrap();
    drop(handle);

    assert_eq!(fs::read(&path).unwrap(), b"[]");
}

#[test]
fn test_read_after_rewrite_sees_new_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    for mode in [WriteMode::Truncate, WriteMode::AtomicRename] {
        let mut handle = FsBackend::new().with_write_mode(mode).open(&path).unwrap();
        handle.rewrite(b"first").unwrap();
        handle.rewrite(b"2nd").unwrap();
        assert_eq!(handle.read_all().unwrap(), b"2nd");
    }
}

#[test]
fn test_atomic_rewrite_leaves_no_artifacts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "old contents that are longer").unwrap();

    let backend = FsBackend::new().with_write_mode(WriteMode::AtomicRename);
    let mut handle = backend.open(&path).unwrap();
    handle.rewrite(b"[]").unwrap();
    drop(handle);

    assert_eq!(fs::read(&path).unwrap(), b"[]");
    assert_no_tmp_files(dir.path());
}

#[cfg(unix)]
#[test]
fn test_atomic_rewrite_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "[]").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    let backend = FsBackend::new().with_write_mode(WriteMode::AtomicRename);
    let mut handle = backend.open(&path).unwrap();
    handle.rewrite(b"[ ]").unwrap();
    drop(handle);

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o640);
    assert_eq!(fs::read(&path).unwrap(), b"[ ]");
}

fn run(api: &RecordApi<FsBackend>, pairs: &[(&str, &str)]) -> String {
    let args: Arguments = pairs.iter().copied().collect();
    let mut out = Vec::new();
    api.perform(&args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_scenario_on_disk_in_both_modes() {
    for mode in [WriteMode::Truncate, WriteMode::AtomicRename] {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let file = path.to_str().unwrap();
        let api = RecordApi::new(FsBackend::new().with_write_mode(mode));

        run(
            &api,
            &[
                ("operation", "add"),
                ("fileName", file),
                ("item", r#"{"id":"1","email":"a@b.com","age":30}"#),
            ],
        );
        run(
            &api,
            &[
                ("operation", "add"),
                ("fileName", file),
                ("item", r#"{"id":"2","email":"c@d.com","age":25}"#),
            ],
        );
        run(
            &api,
            &[("operation", "remove"), ("fileName", file), ("id", "1")],
        );

        let found = run(
            &api,
            &[("operation", "findById"), ("fileName", file), ("id", "2")],
        );
        assert_eq!(found, r#"{"id":"2","email":"c@d.com","age":25}"#);

        let listed = run(&api, &[("operation", "list"), ("fileName", file)]);
        assert_eq!(listed, r#"[{"id":"2","email":"c@d.com","age":25}]"#);
        assert_eq!(fs::read_to_string(&path).unwrap(), listed);
        assert_no_tmp_files(dir.path());
    }
}

#[test]
fn test_duplicate_add_leaves_file_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let original = "[\n  {\"id\": \"1\", \"email\": \"a@b.com\", \"age\": 30}\n]\n";
    fs::write(&path, original).unwrap();

    let api = RecordApi::new(FsBackend::new());
    let out = run(
        &api,
        &[
            ("operation", "add"),
            ("fileName", path.to_str().unwrap()),
            ("item", r#"{"id":"1","email":"x@x.com","age":5}"#),
        ],
    );

    assert_eq!(out, "Item with id 1 already exists");
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
