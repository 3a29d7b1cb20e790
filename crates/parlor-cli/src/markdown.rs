//! Terminal rendering for assistant markup.
//!
//! Assistant replies may carry lightweight markdown (bold emphasis,
//! paragraphs, lists). The controller treats the content as opaque text;
//! this module maps it to styled terminal output at display time.

use colored::Colorize;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Renders markdown source as ANSI-styled terminal text.
///
/// Only inline styling and block separation are handled; anything fancier
/// degrades to its plain text content.
pub fn render_markdown(source: &str) -> String {
    let mut out = String::new();
    let mut strong_depth = 0usize;
    let mut emphasis_depth = 0usize;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Strong) => strong_depth += 1,
            Event::End(TagEnd::Strong) => strong_depth = strong_depth.saturating_sub(1),
            Event::Start(Tag::Emphasis) => emphasis_depth += 1,
            Event::End(TagEnd::Emphasis) => emphasis_depth = emphasis_depth.saturating_sub(1),
            Event::Start(Tag::Paragraph | Tag::Heading { .. }) => {
                if !out.is_empty() {
                    out.push_str("\n\n");
                }
            }
            Event::Start(Tag::Item) => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str("- ");
            }
            Event::Text(text) | Event::Code(text) => {
                if strong_depth > 0 {
                    out.push_str(&text.bold().to_string());
                } else if emphasis_depth > 0 {
                    out.push_str(&text.italic().to_string());
                } else {
                    out.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Styling is forced off so tests see the structural output only.
    fn plain(source: &str) -> String {
        colored::control::set_override(false);
        render_markdown(source)
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(plain("Hi there!"), "Hi there!");
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        assert_eq!(plain("first\n\nsecond"), "first\n\nsecond");
    }

    #[test]
    fn bold_spans_keep_their_text() {
        assert_eq!(plain("a **bold** word"), "a bold word");
    }

    #[test]
    fn list_items_get_dashes() {
        assert_eq!(plain("- one\n- two"), "- one\n- two");
    }

    #[test]
    fn unbalanced_markup_does_not_panic() {
        let rendered = plain("**unterminated");
        assert!(rendered.contains("unterminated"));
    }
}
