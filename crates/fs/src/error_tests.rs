use super::*;

#[test]
fn from_io_classifies_by_kind() {
    let not_found = io::Error::from(io::ErrorKind::NotFound);
    let denied = io::Error::from(io::ErrorKind::PermissionDenied);

    assert_eq!(
        ListError::from_io("missing", &not_found),
        ListError::NotFound {
            path: "missing".into()
        }
    );
    assert_eq!(
        ListError::from_io("secret", &denied),
        ListError::PermissionDenied {
            path: "secret".into()
        }
    );
}

#[test]
fn display_matches_diagnostic_body() {
    let cases = [
        (
            ListError::NotFound {
                path: "missing".into(),
            },
            "missing: No such file or directory",
        ),
        (
            ListError::PermissionDenied {
                path: "dir/secret".into(),
            },
            "dir/secret: Permission denied",
        ),
        (
            ListError::Io {
                path: "loop".into(),
                reason: "Too many levels of symbolic links".into(),
            },
            "loop: Too many levels of symbolic links",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn os_reason_strips_errno_suffix() {
    #[cfg(unix)]
    {
        let err = io::Error::from_raw_os_error(libc::ENOTDIR);
        let listed = ListError::from_io("file/child", &err);
        match listed {
            ListError::Io { ref reason, .. } => {
                assert!(!reason.contains("os error"), "got {reason:?}");
                assert!(!reason.is_empty());
            }
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    let custom = io::Error::other("disk on fire");
    assert_eq!(os_reason(&custom), "disk on fire");
}

#[test]
fn path_returns_offending_path_for_every_variant() {
    let errs = [
        ListError::NotFound { path: "a".into() },
        ListError::PermissionDenied { path: "a".into() },
        ListError::Io {
            path: "a".into(),
            reason: "x".into(),
        },
    ];
    for err in &errs {
        assert_eq!(err.path(), "a");
    }
}
