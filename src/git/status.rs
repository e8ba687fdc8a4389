//! Git Status Operations
//!
//! Reads the porcelain status of the working tree and extracts the untracked
//! paths from it.

use regex::Regex;
use std::io;

use crate::{
    errors::{GitError, Result, StrataError},
    utils::print_warning,
};

use super::runner::{CommandRunner, GitCommand};

/// Two-character code git uses for untracked entries.
pub const UNTRACKED_MARKER: &str = "??";

/// Reads the git status.
///
/// Unlike staging and committing, a failure here is fatal: nothing downstream
/// can run without the file list.
///
/// # Errors
/// * If the git command exits non-zero or cannot be spawned
///
/// # Returns
/// * `Result<String>` - The raw porcelain status
pub fn read_git_status<R: CommandRunner + ?Sized>(runner: &R) -> Result<String> {
    let command = GitCommand::status();
    let outcome = runner.run(&command);

    if outcome.success {
        Ok(outcome.stdout)
    } else {
        Err(StrataError::Git(GitError::CommandFailed {
            command: command.to_string(),
            output: outcome.stderr,
        }))
    }
}

/// Extracts untracked paths from porcelain status output, in output order.
///
/// Only lines starting with exactly `?? ` are kept; modified, staged, ignored
/// and every other entry is skipped.
///
/// # Errors
/// * If the line pattern fails to compile
pub fn parse_untracked(status: &str) -> Result<Vec<String>> {
    let regex_rule = Regex::new(r"^\?\? (.+)$")
        .map_err(|e| StrataError::Io(io::Error::new(io::ErrorKind::InvalidData, e.to_string())))?;

    let files = status
        .lines()
        .filter_map(|line| {
            let captures = regex_rule.captures(line)?;
            let raw = captures.get(1)?.as_str();

            if !is_valid_utf8_path(raw) {
                print_warning(
                    "Path is not valid UTF-8",
                    &format!("{raw} cannot be staged by its exact name and will stay untracked."),
                );
            }

            Some(unquote_path(raw))
        })
        .collect();

    Ok(files)
}

/// Reads the status and returns the untracked paths.
///
/// # Errors
/// * If reading git status fails
pub fn get_untracked_files<R: CommandRunner + ?Sized>(runner: &R) -> Result<Vec<String>> {
    let status = read_git_status(runner)?;
    parse_untracked(&status)
}

/// Undoes git's C-style quoting of unusual paths (`"caf\303\251.txt"`).
///
/// Paths that are not wrapped in double quotes are returned unchanged. Bytes
/// that do not form UTF-8 become U+FFFD, see [`is_valid_utf8_path`].
#[must_use]
pub fn unquote_path(raw: &str) -> String {
    String::from_utf8_lossy(&unquote_bytes(raw)).to_string()
}

/// Whether the unquoted path is valid UTF-8, so [`unquote_path`] is exact.
#[must_use]
pub fn is_valid_utf8_path(raw: &str) -> bool {
    std::str::from_utf8(&unquote_bytes(raw)).is_ok()
}

fn unquote_bytes(raw: &str) -> Vec<u8> {
    let Some(inner) = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return raw.as_bytes().to_vec();
    };

    let bytes = inner.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 == bytes.len() {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let escape = bytes[i + 1];
        let simple = match escape {
            b'a' => Some(0x07),
            b'b' => Some(0x08),
            b't' => Some(b'\t'),
            b'n' => Some(b'\n'),
            b'v' => Some(0x0b),
            b'f' => Some(0x0c),
            b'r' => Some(b'\r'),
            b'"' => Some(b'"'),
            b'\\' => Some(b'\\'),
            _ => None,
        };

        if let Some(byte) = simple {
            decoded.push(byte);
            i += 2;
            continue;
        }

        let octal = &bytes[i + 1..bytes.len().min(i + 4)];
        if octal.len() == 3 && octal.iter().all(|b| (b'0'..=b'7').contains(b)) {
            let value = octal
                .iter()
                .fold(0u32, |acc, digit| acc * 8 + u32::from(digit - b'0'));
            decoded.push(u8::try_from(value).unwrap_or(b'?'));
            i += 4;
        } else {
            decoded.push(b'\\');
            i += 1;
        }
    }

    decoded
}
