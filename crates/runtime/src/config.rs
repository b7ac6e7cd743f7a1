pub const PROGRAM_NAME: &str = "lister";
pub const PROGRAM_LOG_LEVEL: &str = "LISTER_LOG_LEVEL";

/// Prefix of every user-facing diagnostic line, e.g. `ls: missing: No such file or directory`.
pub const DIAGNOSTIC_PREFIX: &str = "ls";

/// Environment variable consulted for the console width when stdout is not a terminal.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Width used when neither the terminal nor `COLUMNS` can tell us anything.
pub const DEFAULT_CONSOLE_WIDTH: usize = 80;

/// Entries whose name starts with this are hidden unless `-a` is given.
pub const HIDDEN_PREFIX: char = '.';

/// Synthetic entries added to every expanded directory under `-a`.
pub const SELF_ENTRY: &str = ".";
pub const PARENT_ENTRY: &str = "..";
