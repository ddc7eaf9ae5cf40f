use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use atomicwrites::{AtomicFile, OverwriteBehavior};
use log::warn;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetlistError {
    #[error("failed to read netlist {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write netlist {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid directive: {0}")]
    InvalidDirective(String),
    #[error("model reconciliation failed: {0}")]
    Reconcile(String),
}

/// What a single edit did to the netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome {
    /// An existing line matched and was rewritten.
    Replaced,
    /// No line matched; the directive was inserted ahead of `.END`.
    Inserted,
    /// The matched line already had the requested text; nothing written.
    Unchanged,
    /// No line matched and the netlist has no `.END` terminator; nothing
    /// was written.
    MissingEnd,
}

/// Prefix-anchored, case-insensitive line predicate for one directive kind.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    fn from_pattern(pattern: &str) -> Self {
        let regex = Regex::new(pattern).expect("directive pattern must compile");
        Self { regex }
    }

    /// `.WORD` opening a line, followed by whitespace.
    pub fn keyword(word: &str) -> Self {
        Self::from_pattern(&format!(r"(?i)^\.{word}\s"))
    }

    /// `.WORD NAME` opening a line, with `NAME` ending at a word boundary
    /// so `VCC` does not also claim `VCC2`.
    pub fn keyword_with_name(word: &str, name: &str) -> Self {
        Self::from_pattern(&format!(r"(?i)^\.{}\s+{}\b", word, regex::escape(name)))
    }

    /// A component declaration: the component name opening the line.
    pub fn component(name: &str) -> Self {
        Self::from_pattern(&format!(r"(?i)^{}\s", regex::escape(name)))
    }

    /// A predicate that matches no real line. Editing against it always
    /// takes the insert path, which is how fresh probe lists get appended.
    pub fn sentinel() -> Self {
        Self::from_pattern(r"^\.PROBE 123456789ABCDEFG\s")
    }

    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// A SPICE netlist on disk.
///
/// The file is the single source of truth: every edit loads it into a line
/// buffer, mutates by index, and flushes atomically (temp file + rename) so
/// an interrupted edit cannot leave a half-written netlist behind.
#[derive(Debug, Clone)]
pub struct Netlist {
    path: PathBuf,
}

impl Netlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back the whole netlist as one string.
    pub fn text(&self) -> Result<String, NetlistError> {
        fs::read_to_string(&self.path).map_err(|source| NetlistError::Read {
            path: self.path.clone(),
            source,
        })
    }

    pub(crate) fn load(&self) -> Result<Vec<String>, NetlistError> {
        Ok(self.text()?.lines().map(str::to_owned).collect())
    }

    pub(crate) fn flush(&self, lines: &[String]) -> Result<(), NetlistError> {
        let mut text = lines.join("\n");
        text.push('\n');
        AtomicFile::new(&self.path, OverwriteBehavior::AllowOverwrite)
            .write(|file| file.write_all(text.as_bytes()))
            .map_err(|err| {
                let source = match err {
                    atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
                };
                NetlistError::Write {
                    path: self.path.clone(),
                    source,
                }
            })
    }

    /// Rewrite the first line matching `matcher` with `replacement`, or
    /// insert `replacement` directly before the `.END` terminator when no
    /// line matches. At most one line is touched per call.
    pub fn find_and_replace(
        &self,
        matcher: &Matcher,
        replacement: &str,
    ) -> Result<EditOutcome, NetlistError> {
        let mut lines = self.load()?;

        if let Some(idx) = lines.iter().position(|line| matcher.matches(line)) {
            if lines[idx] == replacement {
                return Ok(EditOutcome::Unchanged);
            }
            lines[idx] = replacement.to_owned();
            self.flush(&lines)?;
            return Ok(EditOutcome::Replaced);
        }

        match lines.iter().position(|line| is_terminator(line)) {
            Some(end) => {
                lines.insert(end, replacement.to_owned());
                self.flush(&lines)?;
                Ok(EditOutcome::Inserted)
            }
            None => {
                warn!(
                    "netlist {} has no .END directive; {replacement:?} was not inserted",
                    self.path.display()
                );
                Ok(EditOutcome::MissingEnd)
            }
        }
    }
}

fn is_terminator(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case(".end"))
}
