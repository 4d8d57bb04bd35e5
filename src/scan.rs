//! Recovers the list of published posts from the posts directory. The file
//! system is the only record of which posts exist: every post's date and
//! display name are read back out of its file name, which must have the shape
//! produced by [`crate::post::post_file_name`] (`YYYY-MM-DD-some-slug.html`).

use crate::config::Config;
use crate::post::{DATE_FORMAT, HTML_EXTENSION};
use chrono::NaiveDate;
use log::{debug, warn};
use std::fmt;
use walkdir::WalkDir;

/// The length of the `YYYY-MM-DD` prefix of a post file name.
const DATE_LEN: usize = 10;

/// A published post, as recovered from its file name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostRecord {
    /// The publish date.
    pub date: NaiveDate,

    /// The file name of the post inside the posts directory. Since the archive
    /// page lives in the same directory this doubles as the post's link.
    pub file_name: String,

    /// The slug with hyphens turned into spaces.
    pub display_name: String,
}

impl PostRecord {
    /// The link to the post, relative to the posts directory.
    pub fn link(&self) -> &str {
        &self.file_name
    }
}

/// Returns whether `file_name` names a rendered post. This excludes non-HTML
/// files, the about/archive page, and the site index (which duplicates the
/// latest post).
pub fn is_post_file(config: &Config, file_name: &str) -> bool {
    file_name.ends_with(HTML_EXTENSION)
        && file_name != config.about_page_filename
        && file_name != config.index_filename
}

/// Parses a [`PostRecord`] from a post file name such as
/// `2024-03-05-second-post.html`.
pub fn parse_file_name(file_name: &str) -> Result<PostRecord, FileNameError> {
    let stem = file_name
        .strip_suffix(HTML_EXTENSION)
        .ok_or(FileNameError::MissingExtension)?;
    let date = stem.get(..DATE_LEN).ok_or(FileNameError::MissingDate)?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(FileNameError::InvalidDate)?;
    let slug = stem[DATE_LEN..]
        .strip_prefix('-')
        .ok_or(FileNameError::MissingSeparator)?;
    if slug.is_empty() {
        return Err(FileNameError::EmptyName);
    }
    Ok(PostRecord {
        date,
        file_name: file_name.to_owned(),
        display_name: slug.replace('-', " "),
    })
}

/// Lists the posts directory (not recursively) and returns a record for every
/// post file. Files that aren't posts are ignored. Post files whose names
/// can't be parsed are skipped with a warning. The result is in directory
/// listing order, which is not guaranteed to be chronological.
pub fn scan_posts(config: &Config) -> Result<Vec<PostRecord>, Error> {
    let mut records = Vec::new();
    for result in WalkDir::new(&config.posts_path).min_depth(1).max_depth(1) {
        let entry = result?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = match entry.file_name().to_str() {
            Some(file_name) => file_name,
            None => {
                warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
                continue;
            }
        };
        if !is_post_file(config, file_name) {
            debug!("Ignoring `{}`", file_name);
            continue;
        }
        match parse_file_name(file_name) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping `{}` in archive: {}", file_name, e),
        }
    }
    Ok(records)
}

/// Describes why a file name in the posts directory isn't a post file name.
#[derive(Debug, PartialEq)]
pub enum FileNameError {
    /// Returned when the name doesn't end in `.html`.
    MissingExtension,

    /// Returned when the name is too short to hold a date.
    MissingDate,

    /// Returned when the leading characters aren't a `YYYY-MM-DD` date.
    InvalidDate(chrono::ParseError),

    /// Returned when the date isn't followed by `-`.
    MissingSeparator,

    /// Returned when nothing follows the date.
    EmptyName,
}

impl fmt::Display for FileNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileNameError::MissingExtension => write!(f, "missing `.html` extension"),
            FileNameError::MissingDate => write!(f, "missing `YYYY-MM-DD` date prefix"),
            FileNameError::InvalidDate(err) => write!(f, "invalid date prefix: {}", err),
            FileNameError::MissingSeparator => write!(f, "date must be followed by `-`"),
            FileNameError::EmptyName => write!(f, "missing post name after date"),
        }
    }
}

impl std::error::Error for FileNameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileNameError::InvalidDate(err) => Some(err),
            _ => None,
        }
    }
}

/// Represents an error listing the posts directory.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while walking the posts directory.
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::WalkDir(err) => write!(f, "Scanning posts directory: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::WalkDir(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator while walking the posts directory.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
