//! Defines [`PostPage`], the rendered HTML document for a single blog post,
//! and the naming scheme for post files on disk.

use crate::config::Config;
use crate::page::{self, Page};
use chrono::NaiveDate;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// The format of every publish date: fixed-width and sortable as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The extension of markup source files.
pub const SOURCE_EXTENSION: &str = ".txt";

/// The extension of rendered pages.
pub const HTML_EXTENSION: &str = ".html";

/// A post page: the translated body plus a "Posted on" caption, wrapped in
/// the site chrome.
pub struct PostPage<'a> {
    pub config: &'a Config,

    /// The post body, already translated to HTML.
    pub body: &'a str,

    /// The publish date shown in the caption.
    pub date: NaiveDate,
}

impl Page for PostPage<'_> {
    fn render_to<W: Write>(&self, w: &mut W) -> fmt::Result {
        page::write_head(w, &self.config.browser_title, &self.config.stylesheet_path)?;
        page::write_header(
            w,
            &format!(
                "<a href=\"{}\">{}</a>",
                self.config.about_page_filename, self.config.title
            ),
        )?;
        write!(
            w,
            "\n<div class=\"post\">\n{}<p><i>Posted on {}</i></p>\n</div>",
            self.body,
            self.date.format(DATE_FORMAT),
        )?;
        page::write_footer(w)
    }
}

/// Returns the file name for a post published on `date` from the markup file
/// at `source`: `{date}-{stem}.html`, where `stem` is the source's base name
/// without its `.txt` extension. Any directories in `source` are dropped.
pub fn post_file_name(date: NaiveDate, source: &Path) -> Result<String, InvalidFileNameError> {
    let base_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| InvalidFileNameError(source.to_owned()))?;
    let stem = base_name
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(base_name);
    if stem.is_empty() {
        return Err(InvalidFileNameError(source.to_owned()));
    }
    Ok(format!("{}-{}{}", date.format(DATE_FORMAT), stem, HTML_EXTENSION))
}

/// Returned when a source path has no usable base name (e.g. `..`, a bare
/// `.txt`, or a name that isn't valid UTF-8).
#[derive(Debug)]
pub struct InvalidFileNameError(pub PathBuf);

impl fmt::Display for InvalidFileNameError {
    /// Displays an [`InvalidFileNameError`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid source file name: {:?}", &self.0)
    }
}

impl std::error::Error for InvalidFileNameError {}

#[cfg(test)]
mod test {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_post_file_name() -> Result<(), InvalidFileNameError> {
        assert_eq!(
            "2024-03-05-second-post.html",
            post_file_name(date(), Path::new("second-post.txt"))?
        );
        assert_eq!(
            "2024-03-05-second-post.html",
            post_file_name(date(), Path::new("drafts/second-post.txt"))?
        );
        assert_eq!(
            "2024-03-05-notes.md.html",
            post_file_name(date(), Path::new("notes.md"))?
        );
        Ok(())
    }

    #[test]
    fn test_post_file_name_invalid() {
        assert!(post_file_name(date(), Path::new("..")).is_err());
        assert!(post_file_name(date(), Path::new("posts/.txt")).is_err());
    }

    #[test]
    fn test_render() {
        let config = Config::default();
        let html = PostPage {
            config: &config,
            body: "<p>hello</p>\n",
            date: date(),
        }
        .render();

        assert_eq!(
            "<html>\n<head>\n<title>null device</title>\n\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"stylesheets/custom.css\" />\n\
             </head>\n<body>\n<center>\n\n\
             <div class=\"header\">\n<a href=\"about_archive.html\">null device</a>\n</div>\n<hr />\
             \n<div class=\"post\">\n<p>hello</p>\n<p><i>Posted on 2024-03-05</i></p>\n</div>\
             \n</center>\n</body>\n</html>",
            html
        );
    }
}
