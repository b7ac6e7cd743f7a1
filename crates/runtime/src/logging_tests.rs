use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
fn parse_level_handles_known_and_unknown_values() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Error),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some("info"), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("WARN"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some("garbage"), Level::Error),
        (Some("off"), Level::Error),
        (Some(""), Level::Error),
    ];

    for (value, expected) in cases {
        let lvl = parse_level(*value);
        assert_eq!(
            lvl, *expected,
            "value {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }
}

#[test]
#[serial]
fn get_level_from_env_reads_program_variable() {
    unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, "debug") };
    assert_eq!(get_level_from_env(), Level::Debug);

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
    assert_eq!(get_level_from_env(), Level::Error);
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger {
            level: logger_level,
        };

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("test_target")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn format_line_is_timestamp_level_target_message() {
    let name = "a.txt";
    let args = format_args!("skipped {name}");
    let record = Record::builder()
        .level(Level::Warn)
        .target("collector")
        .args(args)
        .build();

    let line = format_line(&"2026-01-02 03:04:05.000", &record);
    assert_eq!(
        line,
        "2026-01-02 03:04:05.000 WARN [collector] skipped a.txt"
    );
}

#[test]
fn init_twice_is_a_noop() {
    init_with_level(Level::Error).expect("first init");
    init_with_level(Level::Trace).expect("second init is ignored");
    assert_eq!(log::max_level(), LevelFilter::Error);
}
