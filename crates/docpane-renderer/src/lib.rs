//! Markdown-to-HTML renderer for bundled documentation.
//!
//! Converts author-controlled markdown into an HTML fragment suitable for
//! direct injection into the documentation pane, classifying links into
//! same-corpus document links and external URLs as it goes.
//!
//! # Architecture
//!
//! Rendering is a single pass over the `pulldown-cmark` event stream rather
//! than chained string substitution, so constructs never interfere: code
//! block content is escaped once and never reinterpreted, and a pipe inside
//! inline code cannot confuse table handling.
//!
//! Links are resolved into [`DocLink`] while rendering. Document links
//! (`./*.md`) are emitted without an `href` and carry a `data-filename`
//! attribute; the host routes clicks on them through a [`LinkInterceptor`]
//! to switch documents instead of navigating.
//!
//! # Example
//!
//! ```
//! use docpane_renderer::MarkdownRenderer;
//!
//! let mut renderer = MarkdownRenderer::new().with_title_extraction();
//! let result = renderer.render_markdown("# Guide\n\nSee [setup](./setup.md)");
//!
//! assert_eq!(result.title.as_deref(), Some("Guide"));
//! assert_eq!(result.links[0].filename(), Some("setup.md"));
//! ```

mod html;
mod link;
mod renderer;
mod state;
mod util;

pub use link::{ClickOutcome, DocLink, LinkInterceptor};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
