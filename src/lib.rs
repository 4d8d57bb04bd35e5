//! The library code for the `nulldev` blog publisher. The architecture can be
//! generally broken down into two distinct steps:
//!
//! 1. Publishing posts from markup source files ([`crate::build::Publisher::publish_posts`])
//! 2. Rebuilding the about/archive page from the posts already on disk
//!    ([`crate::build::Publisher::rebuild_archive`])
//!
//! The first step translates each source file's bracket markup into HTML
//! ([`crate::markup`]), wraps it in the site chrome with a "Posted on" caption
//! ([`crate::post`]), and writes it twice: once under a dated file name and
//! once as the site index.
//!
//! The second step never trusts any in-memory state. It lists the posts
//! directory ([`crate::scan`]), recovers the date and display name of every
//! post from its file name, and renders the archive newest-first
//! ([`crate::archive`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod archive;
pub mod build;
pub mod config;
pub mod markup;
pub mod page;
pub mod post;
pub mod scan;
