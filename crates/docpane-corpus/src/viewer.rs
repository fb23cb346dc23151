//! Active-document state for the documentation pane.
//!
//! The host shell owns visibility and layout; [`DocViewer`] owns which
//! document is showing and how clicks on rendered links are routed. Clicks
//! on document links switch the active document instead of navigating;
//! external links are handed back for the host to open.

use docpane_renderer::{ClickOutcome, DocLink, LinkInterceptor, MarkdownRenderer, RenderResult};

use crate::record::{Corpus, DocRecord};

/// Viewer over a loaded corpus with one active document.
pub struct DocViewer {
    corpus: Corpus,
    active: usize,
    renderer: MarkdownRenderer,
}

impl DocViewer {
    /// Create a viewer positioned on the first document.
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            active: 0,
            renderer: MarkdownRenderer::new(),
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The active document, None for an empty corpus.
    #[must_use]
    pub fn active_doc(&self) -> Option<&DocRecord> {
        self.corpus.records().get(self.active)
    }

    /// Render the active document.
    pub fn render_active(&mut self) -> Option<RenderResult> {
        let content = &self.corpus.records().get(self.active)?.content;
        Some(self.renderer.render_markdown(content))
    }

    /// Switch the active document by corpus filename.
    ///
    /// Returns false (and keeps the current document) when the filename is
    /// not in the corpus.
    pub fn open(&mut self, filename: &str) -> bool {
        match self.corpus.position(filename) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => {
                tracing::warn!(filename = %filename, "Link target not in corpus");
                false
            }
        }
    }

    /// Route a click on a rendered link.
    ///
    /// Document links suppress navigation and switch the active document;
    /// external links yield the URL for the host to open in a new browsing
    /// context.
    pub fn handle_click(&mut self, link: &DocLink) -> ClickOutcome {
        let mut requested = None;
        let outcome = LinkInterceptor::new(|filename: &str| {
            requested = Some(filename.to_owned());
        })
        .click(link);

        if let Some(filename) = requested {
            self.open(&filename);
        }
        outcome
    }

    /// Advance to the next document in corpus order, if any.
    pub fn next(&mut self) -> Option<&DocRecord> {
        if self.active + 1 < self.corpus.len() {
            self.active += 1;
        }
        self.active_doc()
    }

    /// Step back to the previous document in corpus order, if any.
    pub fn prev(&mut self) -> Option<&DocRecord> {
        self.active = self.active.saturating_sub(1);
        self.active_doc()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(DocViewer: Send);

    fn record(filename: &str, content: &str, order: u32) -> DocRecord {
        DocRecord {
            id: filename.trim_end_matches(".md").to_owned(),
            title: filename.to_owned(),
            filename: filename.to_owned(),
            content: content.to_owned(),
            order,
        }
    }

    fn viewer() -> DocViewer {
        DocViewer::new(Corpus::new(vec![
            record("welcome.md", "# Welcome\n\nGo to [setup](./setup.md)", 0),
            record("setup.md", "# Setup\n\n[Docs](https://example.com)", 1),
        ]))
    }

    #[test]
    fn test_starts_on_first_document() {
        let viewer = viewer();
        assert_eq!(viewer.active_doc().unwrap().filename, "welcome.md");
    }

    #[test]
    fn test_empty_corpus_has_no_active_doc() {
        let mut viewer = DocViewer::new(Corpus::default());
        assert!(viewer.active_doc().is_none());
        assert!(viewer.render_active().is_none());
        assert!(viewer.next().is_none());
    }

    #[test]
    fn test_render_active() {
        let mut viewer = viewer();
        let result = viewer.render_active().unwrap();
        assert!(result.html.contains("Welcome"));
        assert_eq!(result.links[0].filename(), Some("setup.md"));
    }

    #[test]
    fn test_doc_link_click_switches_document() {
        let mut viewer = viewer();
        let links = viewer.render_active().unwrap().links;

        let outcome = viewer.handle_click(&links[0]);

        assert_eq!(outcome, ClickOutcome::Suppressed);
        assert_eq!(viewer.active_doc().unwrap().filename, "setup.md");
    }

    #[test]
    fn test_external_click_reports_url_and_stays() {
        let mut viewer = viewer();
        let outcome = viewer.handle_click(&DocLink::External {
            url: "https://example.com".to_owned(),
        });

        assert_eq!(
            outcome,
            ClickOutcome::Navigate("https://example.com".to_owned())
        );
        assert_eq!(viewer.active_doc().unwrap().filename, "welcome.md");
    }

    #[test]
    fn test_unknown_doc_link_keeps_current_document() {
        let mut viewer = viewer();
        let outcome = viewer.handle_click(&DocLink::Doc {
            filename: "missing.md".to_owned(),
        });

        // Navigation is still suppressed; the pane just stays put.
        assert_eq!(outcome, ClickOutcome::Suppressed);
        assert_eq!(viewer.active_doc().unwrap().filename, "welcome.md");
    }

    #[test]
    fn test_next_prev_clamp_at_ends() {
        let mut viewer = viewer();

        assert_eq!(viewer.prev().unwrap().filename, "welcome.md");
        assert_eq!(viewer.next().unwrap().filename, "setup.md");
        assert_eq!(viewer.next().unwrap().filename, "setup.md");
        assert_eq!(viewer.prev().unwrap().filename, "welcome.md");
    }

    #[test]
    fn test_open_by_filename() {
        let mut viewer = viewer();
        assert!(viewer.open("setup.md"));
        assert_eq!(viewer.active_doc().unwrap().filename, "setup.md");
        assert!(!viewer.open("missing.md"));
        assert_eq!(viewer.active_doc().unwrap().filename, "setup.md");
    }
}
