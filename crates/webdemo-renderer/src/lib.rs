//! Markdown renderer for example help documents.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML via
//! the [`RenderBackend`] trait. The [`HtmlBackend`] tags fenced code blocks
//! written in a recognized language (see [`HighlightMode`]) with a
//! `data-lang` attribute for the browser-side editor highlighter; everything
//! else is standard markdown output.
//!
//! # Example
//!
//! ```
//! use webdemo_renderer::render_help;
//!
//! let html = render_help("# Task\n\n```kotlin\nfun main() {}\n```");
//! assert!(html.contains(r#"<code data-lang="kotlin">"#));
//! ```

mod backend;
mod highlight;
mod html;
mod renderer;
mod state;

pub use backend::RenderBackend;
pub use highlight::HighlightMode;
pub use html::HtmlBackend;
pub use renderer::MarkdownRenderer;
pub use state::escape_html;

/// Render a help document to HTML with the [`HtmlBackend`].
#[must_use]
pub fn render_help(markdown: &str) -> String {
    MarkdownRenderer::<HtmlBackend>::new().render_markdown(markdown)
}
