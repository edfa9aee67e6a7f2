//! Ordered dependency manifest model.

mod parse;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::identifiers::package_name::canonicalize;
use crate::domain::{PackageName, VersionConstraint};

pub use parse::parse_manifest;

/// One declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub name: PackageName,
    pub constraint: VersionConstraint,
    /// Zero-based index among the manifest's entries.
    pub position: usize,
    /// Trailing comment text; `Some("")` for a bare `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl DependencyEntry {
    /// Canonical single-line form, without the annotation.
    pub fn requirement(&self) -> String {
        format!("{}{}", self.name, self.constraint)
    }

    /// Canonical single-line form, including the annotation.
    pub fn render(&self) -> String {
        match &self.annotation {
            Some(note) if note.is_empty() => format!("{}  #", self.requirement()),
            Some(note) => format!("{}  # {}", self.requirement(), note),
            None => self.requirement(),
        }
    }
}

/// A manifest line, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    /// Full-line comment, stored as written (including `#`).
    Comment(String),
    Entry(DependencyEntry),
}

/// Parsed manifest. Line order is the declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    lines: Vec<Line>,
}

impl Manifest {
    /// Build from lines, renumbering entry positions to match line order.
    pub fn from_lines(mut lines: Vec<Line>) -> Self {
        let mut position = 0;
        for line in &mut lines {
            if let Line::Entry(entry) = line {
                entry.position = position;
                position += 1;
            }
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Entries in declared order.
    pub fn entries(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// Entries paired with their 1-based line number.
    pub fn numbered_entries(&self) -> impl Iterator<Item = (usize, &DependencyEntry)> {
        self.lines.iter().enumerate().filter_map(|(index, line)| match line {
            Line::Entry(entry) => Some((index + 1, entry)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Package names in declared order, as written.
    pub fn names(&self) -> Vec<&str> {
        self.entries().map(|entry| entry.name.as_str()).collect()
    }

    /// First entry whose name denotes `name` (case and separator insensitive).
    pub fn find(&self, name: &str) -> Option<&DependencyEntry> {
        let wanted = canonicalize(name);
        self.entries().find(|entry| entry.name.canonical() == wanted)
    }

    /// Canonical text: entries re-rendered, comments and blank lines kept as they are.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Blank => {}
                Line::Comment(text) => out.push_str(text),
                Line::Entry(entry) => out.push_str(&entry.render()),
            }
            out.push('\n');
        }
        out
    }

    /// SHA-256 over the ordered entries only; comments do not contribute.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in self.entries() {
            hasher.update(entry.requirement().as_bytes());
            hasher.update(b"\n");
        }
        let digest = hasher.finalize();
        digest.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}
