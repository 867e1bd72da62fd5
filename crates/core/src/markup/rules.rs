//! Stateless line rules for the markup dialect.
//!
//! Each rule pairs a matcher with an emitter. [`emit`] walks the table in
//! order and the first matching rule produces the block, so precedence is
//! the table itself: a list item containing backticks stays a list item,
//! a heading wins over everything after it, and the plain-paragraph rule
//! at the end catches whatever is left.

use super::{ContentBlock, HeadingLevel, InlineRun};

pub(super) struct LineRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub emit: fn(&str) -> ContentBlock,
}

pub(super) const RULES: &[LineRule] = &[
    LineRule {
        name: "heading-1",
        matches: is_heading_1,
        emit: emit_heading_1,
    },
    LineRule {
        name: "heading-2",
        matches: is_heading_2,
        emit: emit_heading_2,
    },
    LineRule {
        name: "heading-3",
        matches: is_heading_3,
        emit: emit_heading_3,
    },
    LineRule {
        name: "bold-label",
        matches: is_bold_label,
        emit: emit_bold_label,
    },
    LineRule {
        name: "list-item",
        matches: is_list_item,
        emit: emit_list_item,
    },
    LineRule {
        name: "blank",
        matches: is_blank,
        emit: emit_blank,
    },
    LineRule {
        name: "inline-code",
        matches: has_inline_code,
        emit: emit_inline_code,
    },
    LineRule {
        name: "plain",
        matches: always,
        emit: emit_plain,
    },
];

/// Emit the block for one line outside a fence.
pub(super) fn emit(line: &str) -> ContentBlock {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map_or_else(|| emit_plain(line), |rule| (rule.emit)(line))
}

// ─── Matchers ──────────────────────────────────────────────────────────────────

fn is_heading_1(line: &str) -> bool {
    line.starts_with("# ")
}

fn is_heading_2(line: &str) -> bool {
    line.starts_with("## ")
}

fn is_heading_3(line: &str) -> bool {
    line.starts_with("### ")
}

fn is_bold_label(line: &str) -> bool {
    line.len() >= 4 && line.starts_with("**") && line.ends_with("**")
}

fn is_list_item(line: &str) -> bool {
    line.starts_with("- ")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn has_inline_code(line: &str) -> bool {
    line.contains('`')
}

fn always(_line: &str) -> bool {
    true
}

// ─── Emitters ──────────────────────────────────────────────────────────────────

fn heading(level: HeadingLevel, prefix: &str, line: &str) -> ContentBlock {
    let text = line.strip_prefix(prefix).unwrap_or(line);
    ContentBlock::Heading {
        level,
        text: text.to_string(),
    }
}

fn emit_heading_1(line: &str) -> ContentBlock {
    heading(HeadingLevel::H1, "# ", line)
}

fn emit_heading_2(line: &str) -> ContentBlock {
    heading(HeadingLevel::H2, "## ", line)
}

fn emit_heading_3(line: &str) -> ContentBlock {
    heading(HeadingLevel::H3, "### ", line)
}

fn emit_bold_label(line: &str) -> ContentBlock {
    // The matcher guarantees both `**` markers, so the slice is in bounds.
    let inner = &line[2..line.len() - 2];
    match inner.split_once(':') {
        Some((label, rest)) => ContentBlock::BoldLabel {
            label: label.to_string(),
            rest: Some(rest.to_string()),
        },
        None => ContentBlock::BoldLabel {
            label: inner.to_string(),
            rest: None,
        },
    }
}

fn emit_list_item(line: &str) -> ContentBlock {
    let text = line.strip_prefix("- ").unwrap_or(line);
    ContentBlock::ListItem(text.to_string())
}

fn emit_blank(_line: &str) -> ContentBlock {
    ContentBlock::Spacer
}

fn emit_inline_code(line: &str) -> ContentBlock {
    // Backticks alternate text and code segments. Empty segments are kept
    // so that runs stay aligned with the original character positions.
    let runs = line
        .split('`')
        .enumerate()
        .map(|(index, segment)| {
            if index % 2 == 1 {
                InlineRun::Code(segment.to_string())
            } else {
                InlineRun::Text(segment.to_string())
            }
        })
        .collect();
    ContentBlock::Paragraph(runs)
}

fn emit_plain(line: &str) -> ContentBlock {
    ContentBlock::Paragraph(vec![InlineRun::Text(line.to_string())])
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
