//! Line-oriented markup dialect used by lesson content.
//!
//! The dialect is deliberately small: three heading levels, bold label
//! lines, flat list items, inline code spans, and fenced code blocks.
//! `render` turns raw text into typed [`ContentBlock`]s; it is pure and
//! total, so malformed input degrades to plain paragraphs rather than
//! failing.

mod rules;

/// Heading depth supported by the dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// A run of inline content within a paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InlineRun {
    Text(String),
    Code(String),
}

/// One rendered unit of lesson content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph(Vec<InlineRun>),
    /// A whole line wrapped in `**`, optionally split at its first colon
    /// into a label and trailing text.
    BoldLabel { label: String, rest: Option<String> },
    ListItem(String),
    CodeBlock { language: String, body: String },
    /// Vertical gap produced by a blank line.
    Spacer,
}

/// Accumulator for an open ``` fence.
struct Fence {
    language: String,
    body: Vec<String>,
}

impl Fence {
    fn open(tag: &str) -> Self {
        Self {
            language: tag.trim().to_string(),
            body: Vec::new(),
        }
    }

    fn into_block(self) -> ContentBlock {
        ContentBlock::CodeBlock {
            language: self.language,
            body: self.body.join("\n"),
        }
    }
}

/// Renders raw lesson markup into content blocks.
///
/// One forward pass over the input; the only state is the current fence.
/// Fence delimiters toggle fence mode: the opening line's remainder is the
/// language tag, the closing line's remainder is discarded, and a fence
/// still open at end of input drops its accumulated body. Every other line
/// goes through the ordered rule table in [`rules`], first match wins.
#[must_use]
pub fn render(input: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut fence: Option<Fence> = None;

    // `split` rather than `lines`: a trailing newline is a real blank line
    // in this dialect and renders as a spacer.
    for line in input.split('\n') {
        if let Some(tag) = line.strip_prefix("```") {
            match fence.take() {
                Some(open) => blocks.push(open.into_block()),
                None => fence = Some(Fence::open(tag)),
            }
            continue;
        }
        if let Some(open) = fence.as_mut() {
            open.body.push(line.to_string());
            continue;
        }
        blocks.push(rules::emit(line));
    }

    blocks
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
