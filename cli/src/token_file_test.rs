use super::*;

#[test]
fn missing_file_means_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    assert_eq!(store.token(), None);
}

#[test]
fn store_read_clear() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    store.store("tok-1").unwrap();
    assert_eq!(store.token().as_deref(), Some("tok-1"));

    store.clear().unwrap();
    assert_eq!(store.token(), None);
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn whitespace_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  tok-2\n").unwrap();
    assert_eq!(FileTokenStore::new(path).token().as_deref(), Some("tok-2"));
}

#[test]
fn unwritable_path_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("missing").join("token"));
    let err = store.store("tok").unwrap_err();
    assert_eq!(err.error_code(), "E_STORAGE");
}

#[cfg(unix)]
#[test]
fn token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    FileTokenStore::new(&path).store("tok-1").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn existing_token_file_is_tightened() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let store = FileTokenStore::new(&path);
    store.store("tok-2").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.token().as_deref(), Some("tok-2"));
}
