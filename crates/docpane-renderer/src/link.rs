//! Link classification and click interception.
//!
//! Links are classified exactly once, while rendering, into [`DocLink`]:
//! a relative `./*.md` path points at another document in the loaded corpus,
//! everything else is an external URL. Click handling consumes the classified
//! value directly instead of re-deriving the kind from markup attributes.

/// A link found in a rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocLink {
    /// Link to another bundled document, identified by filename
    /// (the `./` prefix already stripped).
    Doc {
        /// Corpus filename, e.g. `setup.md`.
        filename: String,
    },
    /// Any other URL, opened by the host in a new browsing context.
    External {
        /// The URL as written.
        url: String,
    },
}

impl DocLink {
    /// Classify a markdown link destination.
    ///
    /// A relative path starting with `./` and ending in `.md` is a document
    /// link; the returned filename has the `./` prefix stripped. Every other
    /// destination (absolute URLs, `mailto:`, fragments, non-markdown paths)
    /// is external.
    #[must_use]
    pub fn classify(url: &str) -> Self {
        match url.strip_prefix("./") {
            Some(rest) if rest.ends_with(".md") => Self::Doc {
                filename: rest.to_owned(),
            },
            _ => Self::External {
                url: url.to_owned(),
            },
        }
    }

    /// Corpus filename for document links, None for external ones.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Doc { filename } => Some(filename),
            Self::External { .. } => None,
        }
    }
}

/// What the host should do with a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default navigation suppressed; the document callback was invoked.
    Suppressed,
    /// Open the URL in a new browsing context.
    Navigate(String),
}

/// Routes clicks on rendered links.
///
/// Holds the caller-supplied callback for document links. Clicks on a
/// [`DocLink::Doc`] suppress navigation and hand the filename to the
/// callback; clicks on [`DocLink::External`] yield the URL to open.
pub struct LinkInterceptor<F>
where
    F: FnMut(&str),
{
    on_doc_link: F,
}

impl<F> LinkInterceptor<F>
where
    F: FnMut(&str),
{
    pub fn new(on_doc_link: F) -> Self {
        Self { on_doc_link }
    }

    /// Handle a click on a rendered link.
    pub fn click(&mut self, link: &DocLink) -> ClickOutcome {
        match link {
            DocLink::Doc { filename } => {
                (self.on_doc_link)(filename);
                ClickOutcome::Suppressed
            }
            DocLink::External { url } => ClickOutcome::Navigate(url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_doc_link() {
        assert_eq!(
            DocLink::classify("./setup.md"),
            DocLink::Doc {
                filename: "setup.md".to_owned()
            }
        );
    }

    #[test]
    fn test_classify_doc_link_nested() {
        assert_eq!(
            DocLink::classify("./guides/import.md"),
            DocLink::Doc {
                filename: "guides/import.md".to_owned()
            }
        );
    }

    #[test]
    fn test_classify_external_url() {
        assert_eq!(
            DocLink::classify("https://example.com"),
            DocLink::External {
                url: "https://example.com".to_owned()
            }
        );
    }

    #[test]
    fn test_classify_relative_without_prefix_is_external() {
        // Only `./`-prefixed markdown paths are document links.
        assert!(matches!(
            DocLink::classify("setup.md"),
            DocLink::External { .. }
        ));
    }

    #[test]
    fn test_classify_non_md_relative_is_external() {
        assert!(matches!(
            DocLink::classify("./diagram.png"),
            DocLink::External { .. }
        ));
    }

    #[test]
    fn test_classify_fragment_is_external() {
        assert!(matches!(
            DocLink::classify("#section"),
            DocLink::External { .. }
        ));
    }

    #[test]
    fn test_filename_accessor() {
        assert_eq!(DocLink::classify("./a.md").filename(), Some("a.md"));
        assert_eq!(DocLink::classify("https://x.test").filename(), None);
    }

    #[test]
    fn test_click_doc_link_invokes_callback() {
        let mut clicked = Vec::new();
        let mut interceptor = LinkInterceptor::new(|filename: &str| {
            clicked.push(filename.to_owned());
        });

        let outcome = interceptor.click(&DocLink::Doc {
            filename: "setup.md".to_owned(),
        });

        assert_eq!(outcome, ClickOutcome::Suppressed);
        drop(interceptor);
        assert_eq!(clicked, vec!["setup.md".to_owned()]);
    }

    #[test]
    fn test_click_external_does_not_invoke_callback() {
        let mut clicked = Vec::new();
        let mut interceptor = LinkInterceptor::new(|filename: &str| {
            clicked.push(filename.to_owned());
        });

        let outcome = interceptor.click(&DocLink::External {
            url: "https://example.com".to_owned(),
        });

        assert_eq!(
            outcome,
            ClickOutcome::Navigate("https://example.com".to_owned())
        );
        drop(interceptor);
        assert!(clicked.is_empty());
    }
}
