use std::path::Path;

/// Escape a string for safe use in shell single quotes
/// Converts: foo'bar -> 'foo'\''bar'
///
/// This ensures that arguments with spaces, special characters, or quotes
/// are properly escaped when building shell commands.
///
/// # Examples
///
/// ```
/// use agents_cli::utils::shell::escape;
///
/// assert_eq!(escape("hello"), "'hello'");
/// assert_eq!(escape("hello world"), "'hello world'");
/// assert_eq!(escape("foo'bar"), "'foo'\\''bar'");
/// ```
pub fn escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Build the line each agent terminal runs: change into `dir`, then start
/// the agent's command. The directory is escaped; the command is the
/// agent's own invocation line and is passed through untouched.
///
/// # Examples
///
/// ```
/// use agents_cli::utils::shell::cd_and_run;
/// use std::path::Path;
///
/// let line = cd_and_run(Path::new("/tmp/my project"), "claude");
/// assert_eq!(line, "cd '/tmp/my project' && claude");
/// ```
pub fn cd_and_run(dir: &Path, command: &str) -> String {
    format!("cd {} && {}", escape(&dir.to_string_lossy()), command)
}
