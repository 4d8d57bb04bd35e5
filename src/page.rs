//! The chrome shared by every rendered page: the document head, the header
//! blocks, and the closing tags. Pages are written with [`std::fmt::Write`]
//! directly into a `String`.

use std::fmt::{self, Write};

/// A complete HTML document.
pub trait Page {
    /// Writes the document into `w`.
    fn render_to<W: Write>(&self, w: &mut W) -> fmt::Result;

    /// Renders the document into a new `String`.
    fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.render_to(&mut out);
        out
    }
}

/// Opens the document: `<head>` with the browser title and stylesheet link,
/// then the opening `<body>` and `<center>` tags.
pub fn write_head<W: Write>(w: &mut W, browser_title: &str, stylesheet: &str) -> fmt::Result {
    write!(
        w,
        "<html>\n<head>\n<title>{}</title>\n\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />\n\
         </head>\n<body>\n<center>\n\n",
        browser_title, stylesheet,
    )
}

/// Writes a `header` block followed by a horizontal rule. `content` is
/// inserted as raw HTML.
pub fn write_header<W: Write>(w: &mut W, content: &str) -> fmt::Result {
    write!(w, "<div class=\"header\">\n{}\n</div>\n<hr />", content)
}

/// Closes what [`write_head`] opened.
pub fn write_footer<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str("\n</center>\n</body>\n</html>")
}
