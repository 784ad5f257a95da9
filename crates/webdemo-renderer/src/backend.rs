//! Render backend trait for format-specific rendering.
//!
//! The generic [`MarkdownRenderer`](crate::MarkdownRenderer) handles block and
//! inline structure; a backend decides how code blocks, blockquotes and images
//! are written out.

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Render a fenced or indented code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Language token from the fence info string, if any
    /// * `content` - Raw code content (not yet escaped)
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image with its collected alt text.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
