//! Defines [`ArchivePage`], the about/archive page: the blog description
//! followed by a listing of every post, newest first.

use crate::config::Config;
use crate::page::{self, Page};
use crate::post::DATE_FORMAT;
use crate::scan::PostRecord;
use std::fmt::{self, Write};

/// The about/archive page.
pub struct ArchivePage<'a> {
    config: &'a Config,
    posts: Vec<PostRecord>,
}

impl<'a> ArchivePage<'a> {
    /// Builds the page from posts in any order. Posts are sorted by date (ties
    /// broken by file name) and then reversed so the newest post comes first.
    pub fn new(config: &'a Config, mut posts: Vec<PostRecord>) -> ArchivePage<'a> {
        posts.sort_by(|a, b| (a.date, &a.file_name).cmp(&(b.date, &b.file_name)));
        posts.reverse();
        ArchivePage { config, posts }
    }

    /// The posts in display order.
    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }
}

impl Page for ArchivePage<'_> {
    fn render_to<W: Write>(&self, w: &mut W) -> fmt::Result {
        page::write_head(
            w,
            &format!("{} - About", self.config.browser_title),
            &self.config.stylesheet_path,
        )?;

        page::write_header(w, "About")?;
        write!(
            w,
            "\n<div class=\"post\">\n{}\n</div>\n\n<br />\n\n\n",
            self.config.description
        )?;

        page::write_header(w, "Archive")?;
        w.write_str("\n<div class=\"post\">\n")?;
        for post in &self.posts {
            writeln!(
                w,
                "{}: <a href=\"{}\">{}</a> <br />",
                post.date.format(DATE_FORMAT),
                post.link(),
                post.display_name,
            )?;
        }
        w.write_str("\n</div>\n")?;

        page::write_footer(w)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{parse_file_name, FileNameError};

    fn records(file_names: &[&str]) -> Result<Vec<PostRecord>, FileNameError> {
        file_names.iter().map(|name| parse_file_name(name)).collect()
    }

    fn dates(page: &ArchivePage) -> Vec<String> {
        page.posts()
            .iter()
            .map(|p| p.date.format(DATE_FORMAT).to_string())
            .collect()
    }

    #[test]
    fn test_newest_first_regardless_of_listing_order() -> Result<(), FileNameError> {
        let config = Config::default();
        let names = [
            "2024-01-01-first-post.html",
            "2024-03-05-second-post.html",
            "2024-02-10-third.html",
        ];
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders.iter() {
            let listing: Vec<&str> = order.iter().map(|&i| names[i]).collect();
            let page = ArchivePage::new(&config, records(&listing)?);
            assert_eq!(
                vec!["2024-03-05", "2024-02-10", "2024-01-01"],
                dates(&page),
                "listing order {:?}",
                listing
            );
        }
        Ok(())
    }

    #[test]
    fn test_same_day_posts_have_stable_order() -> Result<(), FileNameError> {
        let config = Config::default();
        let a = ArchivePage::new(&config, records(&["2024-01-01-a.html", "2024-01-01-b.html"])?);
        let b = ArchivePage::new(&config, records(&["2024-01-01-b.html", "2024-01-01-a.html"])?);
        assert_eq!(a.posts(), b.posts());
        assert_eq!("2024-01-01-b.html", a.posts()[0].file_name);
        Ok(())
    }

    #[test]
    fn test_render() -> Result<(), FileNameError> {
        let config = Config {
            description: String::from("A <i>test</i> blog."),
            ..Config::default()
        };
        let page = ArchivePage::new(
            &config,
            records(&["2024-01-01-first-post.html", "2024-03-05-second-post.html"])?,
        );

        assert_eq!(
            "<html>\n<head>\n<title>null device - About</title>\n\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"stylesheets/custom.css\" />\n\
             </head>\n<body>\n<center>\n\n\
             <div class=\"header\">\nAbout\n</div>\n<hr />\
             \n<div class=\"post\">\nA <i>test</i> blog.\n</div>\n\n<br />\n\n\n\
             <div class=\"header\">\nArchive\n</div>\n<hr />\
             \n<div class=\"post\">\n\
             2024-03-05: <a href=\"2024-03-05-second-post.html\">second post</a> <br />\n\
             2024-01-01: <a href=\"2024-01-01-first-post.html\">first post</a> <br />\n\
             \n</div>\n\
             \n</center>\n</body>\n</html>",
            page.render()
        );
        Ok(())
    }

    #[test]
    fn test_render_empty_archive() {
        let config = Config::default();
        let html = ArchivePage::new(&config, Vec::new()).render();
        assert!(html.contains("<div class=\"header\">\nArchive\n</div>\n<hr />\n<div class=\"post\">\n\n</div>\n"));
    }
}
