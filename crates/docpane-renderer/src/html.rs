//! HTML emitters for the block and inline elements the renderer produces.

use std::fmt::Write;

use crate::link::DocLink;
use crate::state::escape_html;

/// Emit a fenced code block, escaping the content exactly once.
pub fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
    if let Some(lang) = lang {
        write!(
            out,
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(content)
        )
        .unwrap();
    } else {
        write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
    }
}

/// Emit an image element.
pub fn image(src: &str, alt: &str, title: &str, out: &mut String) {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_html(title))
    };
    write!(
        out,
        r#"<img src="{}"{title_attr} alt="{}">"#,
        escape_html(src),
        escape_html(alt)
    )
    .unwrap();
}

/// Emit the opening anchor tag for a classified link.
///
/// Document links carry their target in a `data-filename` attribute and have
/// no `href`, so the browser has nothing to navigate to; the host's click
/// handler owns them. External links open in a new browsing context.
pub fn anchor_open(link: &DocLink, out: &mut String) {
    match link {
        DocLink::Doc { filename } => {
            write!(
                out,
                r#"<a class="doc-link" data-filename="{}">"#,
                escape_html(filename)
            )
            .unwrap();
        }
        DocLink::External { url } => {
            write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                escape_html(url)
            )
            .unwrap();
        }
    }
}

/// Opening markup for a table: a scrollable wrapper around the table element.
pub fn table_open(out: &mut String) {
    out.push_str(r#"<div class="table-scroll"><table>"#);
}

/// Closing markup for a table, including the scroll wrapper.
pub fn table_close(out: &mut String) {
    out.push_str("</tbody></table></div>");
}
