//! Translates the blog's bracket markup (`[b]bold[/b]`, `[url=...]link[/url]`,
//! etc.) into HTML. Translation is plain substring rewriting: there is no
//! parse tree, nothing is escaped, and unbalanced or unknown tokens pass
//! through untouched.
//!
//! Rules are applied one after another, each to the output of the previous
//! rule, one line at a time. The default table puts the two-part
//! [`Rule::Attribute`] rules first. An attribute value ends at the first `]`
//! and every literal token ends in `]`, so a value can never contain a literal
//! token and is copied through verbatim. No literal token is a substring of
//! another and no replacement contains brackets, so the order within the
//! literal group does not affect the result.

/// A single markup rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// Replaces every occurrence of `token` with `replacement`.
    Literal {
        token: &'static str,
        replacement: &'static str,
    },

    /// Replaces `{open}{value}]` with `{prefix}{value}{suffix}`. The value is
    /// copied verbatim. A value ending in `legacy_close` (e.g. `\url`) has
    /// that marker dropped so that old posts written as `[url=x\url]` render
    /// the same as `[url=x]`.
    Attribute {
        open: &'static str,
        legacy_close: &'static str,
        prefix: &'static str,
        suffix: &'static str,
    },
}

const fn literal(token: &'static str, replacement: &'static str) -> Rule {
    Rule::Literal { token, replacement }
}

/// The blog's markup, in application order.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule::Attribute {
        open: "[url=",
        legacy_close: "\\url",
        prefix: "<a href=",
        suffix: ">",
    },
    Rule::Attribute {
        open: "[gist=",
        legacy_close: "\\gist",
        prefix: "<script src=\"http://gist.github.com/",
        suffix: ".js\"></script>",
    },
    literal("[/url]", "</a>"),
    literal("[title]", "<h4>"),
    literal("[/title]", "</h4>"),
    literal("[b]", "<b>"),
    literal("[/b]", "</b>"),
    literal("[i]", "<i>"),
    literal("[/i]", "</i>"),
    literal("[p]", "<p>"),
    literal("[/p]", "</p>"),
    literal("[list]", "<ul>"),
    literal("[/list]", "</ul>"),
    literal("[li]", "<li>"),
    literal("[/li]", "</li>"),
];

impl Rule {
    /// Applies the rule to every occurrence in `line`.
    pub fn apply(&self, line: &str) -> String {
        match *self {
            Rule::Literal { token, replacement } => line.replace(token, replacement),
            Rule::Attribute {
                open,
                legacy_close,
                prefix,
                suffix,
            } => replace_attribute(line, open, legacy_close, prefix, suffix),
        }
    }
}

fn replace_attribute(
    line: &str,
    open: &str,
    legacy_close: &str,
    prefix: &str,
    suffix: &str,
) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let end = match after_open.find(']') {
            Some(end) => end,
            // unterminated; leave the remainder as-is
            None => break,
        };
        let value = &after_open[..end];
        let value = value.strip_suffix(legacy_close).unwrap_or(value);
        out.push_str(&rest[..start]);
        out.push_str(prefix);
        out.push_str(value);
        out.push_str(suffix);
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Applies an ordered list of [`Rule`]s to text.
#[derive(Clone, Debug)]
pub struct Translator<'a> {
    rules: &'a [Rule],
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Translator::new(DEFAULT_RULES)
    }
}

impl<'a> Translator<'a> {
    pub fn new(rules: &'a [Rule]) -> Translator<'a> {
        Translator { rules }
    }

    /// Translates `text` line by line. Line terminators are preserved, so a
    /// token split across two lines is never matched.
    pub fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            out.push_str(&self.translate_line(line));
        }
        out
    }

    fn translate_line(&self, line: &str) -> String {
        let mut line = line.to_owned();
        for rule in self.rules {
            line = rule.apply(&line);
        }
        line
    }
}
