//! Directory scanning for the navigator.
//!
//! Provides the [Entry] struct which is used throughout the navigator and the
//! [EntryCatalog], the sorted, immutable listing of one directory.
//! A catalog is never updated in place: every directory change builds a fresh one.

use crate::core::error::{NavError, NavResult};
use crate::core::path::ROOT;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

/// The parent-reference entry name.
pub const PARENT_NAME: &str = "..";
/// Default bound for displayed names, in characters.
pub const DEFAULT_NAME_CHARS: usize = 20;

/// The two kinds of entries the navigator knows about.
///
/// Everything the OS reports that is not a directory (sockets, devices, fifos, broken
/// symlinks) is treated as [EntryKind::Regular].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
}

impl EntryKind {
    /// Label shown in the type column.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Regular => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

/// A single entry in a directory listing.
///
/// `name` is the text used for display and sorting. `os_name` is the name exactly as the OS
/// reported it, which is what descending and opening use. Only [Entry::display_name] is
/// bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    os_name: OsString,
    kind: EntryKind,
    size_kb: u64,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind, size_kb: u64) -> Self {
        let name = name.into();
        Self::with_names(OsString::from(&name), name, kind, size_kb)
    }

    /// Entry for a name as read from the OS; the text name is its lossy UTF-8 form.
    pub fn from_os_name(os_name: OsString, kind: EntryKind, size_kb: u64) -> Self {
        let name = os_name.to_string_lossy().into_owned();
        Self::with_names(os_name, name, kind, size_kb)
    }

    fn with_names(os_name: OsString, name: String, kind: EntryKind, size_kb: u64) -> Self {
        let size_kb = match kind {
            EntryKind::Directory => 0,
            EntryKind::Regular => size_kb,
        };
        Entry {
            name,
            os_name,
            kind,
            size_kb,
        }
    }

    /// The synthesized `..` entry.
    pub fn parent() -> Self {
        Entry::new(PARENT_NAME, EntryKind::Directory, 0)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn os_name(&self) -> &OsStr {
        &self.os_name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn size_kb(&self) -> u64 {
        self.size_kb
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_parent(&self) -> bool {
        self.name == PARENT_NAME
    }

    /// The name truncated to at most `max_chars` characters.
    pub fn display_name(&self, max_chars: usize) -> Cow<'_, str> {
        match self.name.char_indices().nth(max_chars) {
            Some((cut, _)) => Cow::Owned(self.name[..cut].to_string()),
            None => Cow::Borrowed(&self.name),
        }
    }
}

/// The sorted listing of one directory plus its column alignment hints.
#[derive(Debug, Clone)]
pub struct EntryCatalog {
    directory: PathBuf,
    directory_path: String,
    entries: Vec<Entry>,
    max_name_chars: usize,
    max_name_width: usize,
    max_size_digits: usize,
}

impl EntryCatalog {
    /// Scans `path` with the default name bound.
    pub fn build(path: impl AsRef<Path>) -> NavResult<Self> {
        Self::build_with_limit(path, DEFAULT_NAME_CHARS)
    }

    /// Scans `path`, bounding displayed names to `max_name_chars` characters.
    ///
    /// Dotfiles are hidden everywhere except at the filesystem root.
    ///
    /// # Errors
    /// [NavError::DirectoryUnreadable] if `path` cannot be opened as a directory.
    pub fn build_with_limit(path: impl AsRef<Path>, max_name_chars: usize) -> NavResult<Self> {
        let path = path.as_ref();
        scan(path, !shows_dotfiles(path), max_name_chars)
    }

    /// Builds a catalog from entries that are already known. Sorts them and computes the hints.
    pub fn from_entries(
        path: impl AsRef<Path>,
        mut entries: Vec<Entry>,
        max_name_chars: usize,
    ) -> Self {
        let directory = path.as_ref().to_path_buf();
        sort_entries(&mut entries);
        let max_name_width = entries
            .iter()
            .map(|e| e.display_name(max_name_chars).chars().count())
            .max()
            .unwrap_or(0);
        let max_size_digits = entries
            .iter()
            .map(Entry::size_kb)
            .max()
            .map_or(1, digit_count);

        Self {
            directory_path: directory.to_string_lossy().into_owned(),
            directory,
            entries,
            max_name_chars,
            max_name_width,
            max_size_digits,
        }
    }

    // Accessors

    /// The scanned directory as display text.
    #[inline]
    pub fn path(&self) -> &str {
        &self.directory_path
    }

    #[inline]
    pub fn dir_path(&self) -> &Path {
        &self.directory
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Entry> {
        self.entries.get(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn max_name_chars(&self) -> usize {
        self.max_name_chars
    }

    #[inline]
    pub fn max_name_width(&self) -> usize {
        self.max_name_width
    }

    #[inline]
    pub fn max_size_digits(&self) -> usize {
        self.max_size_digits
    }
}

/// Dotfiles are shown only when listing the filesystem root.
pub fn shows_dotfiles(path: &Path) -> bool {
    path == Path::new(ROOT)
}

/// Whether a name survives the dotfile rule.
///
/// `..` is always listed. Other `.`-prefixed names are hidden unless `show_dotfiles` is set,
/// which is the case at the filesystem root.
pub fn is_listed(name: &str, show_dotfiles: bool) -> bool {
    !name.is_empty() && (show_dotfiles || name == PARENT_NAME || !name.starts_with('.'))
}

/// Lowercases the first character only; the rest is left untouched.
pub fn fold_first_letter(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let mut folded: String = first.to_lowercase().collect();
            folded.push_str(chars.as_str());
            Cow::Owned(folded)
        }
        _ => Cow::Borrowed(name),
    }
}

/// Byte-wise comparison of the first-letter-folded names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_first_letter(a)
        .as_bytes()
        .cmp(fold_first_letter(b).as_bytes())
}

/// Sorts entries by [compare_names]. `..` is not pinned, it sorts like any other name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_names(a.name(), b.name()));
}

/// Floor division of a byte count into kilobytes.
#[inline]
pub fn kb_from_bytes(bytes: u64) -> u64 {
    bytes / 1024
}

/// Number of decimal digits in `n`. `0` has one digit.
pub fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn scan(path: &Path, hide_dotfiles: bool, max_name_chars: usize) -> NavResult<EntryCatalog> {
    let read = fs::read_dir(path).map_err(|source| NavError::DirectoryUnreadable {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;

    let mut entries = Vec::with_capacity(64);
    entries.push(Entry::parent());

    for item in read {
        let item = match item {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };

        let os_name = item.file_name();
        if !is_listed(&os_name.to_string_lossy(), !hide_dotfiles) {
            continue;
        }

        let full_path = item.path();
        let kind = classify(&item, &full_path);
        let size_kb = match kind {
            EntryKind::Directory => 0,
            EntryKind::Regular => stat_size_kb(&full_path),
        };
        entries.push(Entry::from_os_name(os_name, kind, size_kb));
    }

    tracing::debug!("scanned {}: {} entries", path.display(), entries.len());
    Ok(EntryCatalog::from_entries(path, entries, max_name_chars))
}

/// Uses the type reported by the directory listing, falling back to a `stat` of the target
/// for symlinks and filesystems that report an unknown type.
fn classify(item: &DirEntry, full_path: &Path) -> EntryKind {
    match item.file_type() {
        Ok(ft) if ft.is_dir() => EntryKind::Directory,
        Ok(ft) if ft.is_file() => EntryKind::Regular,
        _ => match fs::metadata(full_path) {
            Ok(md) if md.is_dir() => EntryKind::Directory,
            _ => EntryKind::Regular,
        },
    }
}

fn stat_size_kb(full_path: &Path) -> u64 {
    match fs::metadata(full_path) {
        Ok(md) => kb_from_bytes(md.len()),
        Err(e) => {
            tracing::debug!(
                "stat failed for {}, size reported as 0: {e}",
                full_path.display()
            );
            0
        }
    }
}
