pub const PROGRAM_NAME: &str = "arbor";
pub const PROGRAM_LOG_LEVEL: &str = "ARBOR_LOG_LEVEL";

/// Environment variable holding the user's home directory.
#[cfg(not(windows))]
pub const HOME_ENV: &str = "HOME";
#[cfg(windows)]
pub const HOME_ENV: &str = "USERPROFILE";

/// Home directory used for `~` expansion.
///
/// An unset or non-UTF-8 variable yields the empty string, so `~/x`
/// expands to `/x` rather than failing.
pub fn home_dir() -> String {
    std::env::var(HOME_ENV).unwrap_or_default()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
