use super::*;

use std::os::unix::fs::symlink;

use crate::provider::OsMetadataProvider;
use crate::testing::FakeProvider;

fn sorted(mut names: Vec<OsString>) -> Vec<OsString> {
    names.sort();
    names
}

#[test]
fn resolve_args_defaults_to_current_directory() {
    let provider = FakeProvider::new().dir(".");
    let empty: [&str; 0] = [];

    let resolution = resolve_args(&provider, &empty);

    assert_eq!(resolution.arg_count, 1);
    assert_eq!(resolution.dirs, vec!["."]);
    assert!(resolution.files.is_empty());
    assert!(resolution.missing.is_empty());
}

#[test]
fn resolve_args_partitions_files_dirs_and_missing() {
    let provider = FakeProvider::new()
        .dir("d1")
        .dir("d2")
        .file("f1", 0o644, 0)
        .symlink("link", "d1");

    let resolution = resolve_args(&provider, &["d2", "zzz", "f1", "aaa", "link", "d1"]);

    assert_eq!(resolution.arg_count, 6);
    assert_eq!(resolution.files, vec!["f1"]);
    assert_eq!(resolution.dirs, vec!["d2", "link", "d1"]);
    let missing: Vec<_> = resolution.missing.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        missing,
        vec![
            "aaa: No such file or directory",
            "zzz: No such file or directory",
        ]
    );
}

#[test]
fn resolve_args_lists_links_to_files_and_dangling_links_as_entries() {
    let provider = FakeProvider::new()
        .file("f1", 0o644, 0)
        .symlink("to_file", "f1")
        .symlink("dangling", "nowhere")
        .dir("d1")
        .symlink("hop", "to_d1")
        .symlink("to_d1", "d1");

    let resolution = resolve_args(&provider, &["to_file", "dangling", "hop"]);

    assert_eq!(resolution.files, vec!["to_file", "dangling"]);
    assert_eq!(resolution.dirs, vec!["hop"]);
    assert!(resolution.missing.is_empty());
}

#[test]
fn resolve_args_expands_real_symlinked_directory() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    std::fs::create_dir(root.join("real")).expect("mkdir");
    std::fs::write(root.join("real").join("inside"), b"").expect("write");
    symlink("real", root.join("link")).expect("symlink");
    symlink("gone", root.join("broken")).expect("symlink");

    let link = root.join("link").to_string_lossy().into_owned();
    let broken = root.join("broken").to_string_lossy().into_owned();
    let provider = OsMetadataProvider::new();

    let resolution = resolve_args(&provider, &[link.as_str(), broken.as_str()]);

    assert_eq!(resolution.dirs, vec![link]);
    assert_eq!(resolution.files, vec![broken]);
}

#[test]
fn resolve_args_reports_unreadable_argument_without_stopping() {
    let provider = FakeProvider::new().file("ok", 0o644, 0).denied("locked/x");

    let resolution = resolve_args(&provider, &["locked/x", "ok"]);

    assert_eq!(resolution.files, vec!["ok"]);
    assert_eq!(
        resolution.missing,
        vec![ListError::PermissionDenied {
            path: "locked/x".into()
        }]
    );
}

#[test]
fn list_children_hides_dotfiles_by_default() {
    let provider = FakeProvider::new()
        .dir("dir")
        .file("dir/a", 0o644, 0)
        .file("dir/.secret", 0o644, 0)
        .dir("dir/sub")
        .file("dir/sub/deep", 0o644, 0);

    let names = list_children(&provider, Path::new("dir"), false).expect("list");
    assert_eq!(sorted(names), vec!["a", "sub"]);
}

#[test]
fn list_children_with_hidden_adds_dot_entries() {
    let provider = FakeProvider::new()
        .dir("dir")
        .file("dir/a", 0o644, 0)
        .file("dir/.secret", 0o644, 0);

    let names = list_children(&provider, Path::new("dir"), true).expect("list");
    assert_eq!(sorted(names), vec![".", "..", ".secret", "a"]);
}

#[test]
fn list_children_unreadable_dir_is_permission_denied() {
    let provider = FakeProvider::new().dir("locked").unreadable("locked");

    let err = list_children(&provider, Path::new("locked"), false).expect_err("denied");
    assert_eq!(
        err,
        ListError::PermissionDenied {
            path: "locked".into()
        }
    );
}

#[test]
fn list_children_on_real_directory_is_one_level_deep() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    std::fs::write(root.join("test_file1"), b"").expect("write");
    std::fs::write(root.join(".dotfile"), b"").expect("write");
    std::fs::create_dir(root.join("nested")).expect("mkdir");
    std::fs::write(root.join("nested").join("inner"), b"").expect("write");

    let provider = OsMetadataProvider::new();

    let names = list_children(&provider, root, false).expect("list");
    assert_eq!(sorted(names), vec!["nested", "test_file1"]);

    let names = list_children(&provider, root, true).expect("list");
    assert_eq!(sorted(names), vec![".", "..", ".dotfile", "nested", "test_file1"]);
}

#[test]
fn list_children_keeps_non_utf8_names_intact() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let raw = std::ffi::OsStr::from_bytes(b"bad\xffname");
    // Some filesystems refuse names that are not UTF-8.
    if std::fs::write(tmp.path().join(raw), b"").is_err() {
        return;
    }

    let provider = OsMetadataProvider::new();
    let names = list_children(&provider, tmp.path(), false).expect("list");

    assert_eq!(names, vec![raw.to_os_string()]);
}
