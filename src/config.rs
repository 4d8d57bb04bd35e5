//! Defines the [`Config`] type which carries every site-wide setting into the
//! renderers and the publisher.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

const DESCRIPTION: &str = "I'm an undergraduate computer science student at UBC
Vancouver interested in operating systems, systems and network security, and
software engineering. <i>null device</i> is a way for me to track my thoughts
and progress -- as well as demonstrate a passion and expertise -- in these
areas.  ";

/// Site-wide settings. [`Config::default`] yields the fixed settings of the
/// `null device` blog; a YAML project file may override any subset of them
/// (see [`Config::from_project_file`]).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The site title shown in the header block of every post page.
    pub title: String,

    /// The `<title>` of every page. The archive page appends ` - About`.
    pub browser_title: String,

    /// The blog description block on the archive page. This is inserted as
    /// raw HTML.
    pub description: String,

    /// The directory that holds every rendered page.
    pub posts_path: PathBuf,

    /// The stylesheet each page links to. This tool never writes it.
    pub stylesheet_path: String,

    /// The file name of the about/archive page inside `posts_path`.
    pub about_page_filename: String,

    /// The file name of the site index inside `posts_path`.
    pub index_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: String::from("null device"),
            browser_title: String::from("null device"),
            description: String::from(DESCRIPTION),
            posts_path: PathBuf::from("posts/"),
            stylesheet_path: String::from("stylesheets/custom.css"),
            about_page_filename: String::from("about_archive.html"),
            index_filename: String::from("index.html"),
        }
    }
}

impl Config {
    /// Loads a [`Config`] from a YAML project file. Missing keys keep their
    /// default values. A relative `posts_path` is resolved against the
    /// directory containing the project file.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let file = match File::open(path) {
            Err(e) => {
                return Err(anyhow!(
                    "Opening project file `{}`: {}",
                    path.display(),
                    e
                ))
            }
            Ok(file) => file,
        };
        let mut config: Config = match serde_yaml::from_reader(file) {
            Err(e) => {
                return Err(anyhow!(
                    "Loading configuration `{}`: {}",
                    path.display(),
                    e
                ))
            }
            Ok(config) => config,
        };
        if config.posts_path.is_relative() {
            if let Some(project_root) = path.parent() {
                config.posts_path = project_root.join(&config.posts_path);
            }
        }
        Ok(config)
    }

    /// The path of the about/archive page.
    pub fn about_page_path(&self) -> PathBuf {
        self.posts_path.join(&self.about_page_filename)
    }

    /// The path of the site index page.
    pub fn index_path(&self) -> PathBuf {
        self.posts_path.join(&self.index_filename)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_fixed_layout() {
        let config = Config::default();
        assert_eq!("null device", config.title);
        assert_eq!(PathBuf::from("posts/about_archive.html"), config.about_page_path());
        assert_eq!(PathBuf::from("posts/index.html"), config.index_path());
        assert_eq!("stylesheets/custom.css", config.stylesheet_path);
    }

    #[test]
    fn test_project_file_overrides_subset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("blog.yaml");
        let mut file = File::create(&path)?;
        writeln!(file, "title: my blog")?;
        writeln!(file, "posts_path: out")?;

        let config = Config::from_project_file(&path)?;
        assert_eq!("my blog", config.title);
        assert_eq!("null device", config.browser_title);
        assert_eq!(dir.path().join("out"), config.posts_path);
        assert_eq!("index.html", config.index_filename);
        Ok(())
    }

    #[test]
    fn test_missing_project_file() {
        let err = Config::from_project_file(Path::new("/nonexistent/blog.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("Opening project file"));
    }
}
