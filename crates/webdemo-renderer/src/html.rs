//! HTML backend for help document rendering.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::highlight::HighlightMode;
use crate::state::escape_html;

/// HTML render backend.
///
/// Code blocks in a recognized language become
/// `<pre><code data-lang="MODE">`; every other code block is a plain
/// `<pre><code>`.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        match lang.and_then(HighlightMode::from_fence) {
            Some(mode) => {
                write!(
                    out,
                    r#"<pre><code data-lang="{}">{}</code></pre>"#,
                    mode.mode_name(),
                    escape_html(content)
                )
                .unwrap();
            }
            None => {
                write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
            }
        }
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
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
}
