//! Exports the [`build_site`] function which stitches together the high-level
//! steps of a run: publishing every markup source file as a post
//! ([`Publisher::publish_posts`]) and then regenerating the about/archive page
//! from whatever posts are on disk ([`Publisher::rebuild_archive`]).
//!
//! Problems with an individual input (a missing or unreadable source file, or
//! one with no usable name) skip that input and are reported in the returned
//! [`Report`]. Problems writing output or listing the posts directory abort
//! the run; posts written before the failure are left in place.

use crate::archive::ArchivePage;
use crate::config::Config;
use crate::markup::Translator;
use crate::page::Page;
use crate::post::{post_file_name, InvalidFileNameError, PostPage};
use crate::scan::{scan_posts, Error as ScanError};
use chrono::NaiveDate;
use log::{error, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Publishes every file in `sources` on `date` and then rebuilds the archive.
/// The archive is rebuilt even when `sources` is empty or some of them were
/// skipped.
pub fn build_site(config: &Config, sources: &[PathBuf], date: NaiveDate) -> Result<Report> {
    let publisher = Publisher::new(config);
    let mut report = publisher.publish_posts(sources, date)?;
    report.archived = publisher.rebuild_archive()?;
    Ok(report)
}

/// The outcome of a [`build_site`] run.
#[derive(Debug, Default)]
pub struct Report {
    /// The post files written, in input order.
    pub published: Vec<PathBuf>,

    /// The inputs that were skipped.
    pub skipped: Vec<PathBuf>,

    /// The number of posts listed on the rebuilt archive page.
    pub archived: usize,
}

/// Translates, renders, and writes posts and the archive page.
pub struct Publisher<'a> {
    config: &'a Config,
    translator: Translator<'static>,
}

impl<'a> Publisher<'a> {
    pub fn new(config: &'a Config) -> Publisher<'a> {
        Publisher {
            config,
            translator: Translator::default(),
        }
    }

    /// Publishes each source in order. Input errors are logged and the input
    /// is skipped; any other error stops the run.
    pub fn publish_posts(&self, sources: &[PathBuf], date: NaiveDate) -> Result<Report> {
        let mut report = Report::default();
        for source in sources {
            match self.publish_post(source, date) {
                Ok(path) => report.published.push(path),
                Err(e) if e.is_input_error() => {
                    error!("Skipping `{}`: {}", source.display(), e);
                    report.skipped.push(source.to_owned());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    /// Publishes a single markup source file as a post dated `date`. The page
    /// is written to `{posts_path}/{date}-{stem}.html` and copied over the
    /// site index, overwriting both. Returns the path of the post file.
    pub fn publish_post(&self, source: &Path, date: NaiveDate) -> Result<PathBuf> {
        let file_name = post_file_name(date, source)?;
        let markup = fs::read_to_string(source).map_err(|err| Error::ReadInput {
            path: source.to_owned(),
            err,
        })?;

        let body = self.translator.translate(&markup);
        let html = PostPage {
            config: self.config,
            body: &body,
            date,
        }
        .render();

        self.create_posts_directory()?;
        let post_path = self.config.posts_path.join(&file_name);
        write_file(&post_path, &html)?;
        write_file(&self.config.index_path(), &html)?;
        info!("Published `{}` as `{}`", source.display(), post_path.display());
        Ok(post_path)
    }

    /// Regenerates the about/archive page from the post files in the posts
    /// directory. Returns the number of posts listed.
    pub fn rebuild_archive(&self) -> Result<usize> {
        self.create_posts_directory()?;
        let page = ArchivePage::new(self.config, scan_posts(self.config)?);
        let path = self.config.about_page_path();
        write_file(&path, &page.render())?;
        info!(
            "Rebuilt `{}` with {} posts",
            path.display(),
            page.posts().len()
        );
        Ok(page.posts().len())
    }

    fn create_posts_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.config.posts_path).map_err(|err| Error::WriteOutput {
            path: self.config.posts_path.clone(),
            err,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| Error::WriteOutput {
        path: path.to_owned(),
        err,
    })
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for a publishing run.
#[derive(Debug)]
pub enum Error {
    /// Returned when a markup source file can't be read.
    ReadInput { path: PathBuf, err: std::io::Error },

    /// Returned when a markup source path has no usable file name.
    InvalidFileName(InvalidFileNameError),

    /// Returned when an output file or the posts directory can't be written.
    WriteOutput { path: PathBuf, err: std::io::Error },

    /// Returned when the posts directory can't be listed.
    Scan(ScanError),
}

impl Error {
    /// Returns whether the error concerns a single input, in which case the
    /// run can carry on without it.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::ReadInput { .. } | Error::InvalidFileName(_))
    }
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadInput { path, err } => {
                write!(f, "Reading source file '{}': {}", path.display(), err)
            }
            Error::InvalidFileName(err) => err.fmt(f),
            Error::WriteOutput { path, err } => {
                write!(f, "Writing '{}': {}", path.display(), err)
            }
            Error::Scan(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadInput { path: _, err } => Some(err),
            Error::InvalidFileName(err) => Some(err),
            Error::WriteOutput { path: _, err } => Some(err),
            Error::Scan(err) => Some(err),
        }
    }
}

impl From<InvalidFileNameError> for Error {
    /// Converts [`InvalidFileNameError`]s into [`Error`]. This allows us to
    /// use the `?` operator.
    fn from(err: InvalidFileNameError) -> Error {
        Error::InvalidFileName(err)
    }
}

impl From<ScanError> for Error {
    /// Converts [`ScanError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: ScanError) -> Error {
        Error::Scan(err)
    }
}
