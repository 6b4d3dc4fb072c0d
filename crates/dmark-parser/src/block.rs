//! Block structure: `#name[attrs] content` lines and their indented children.

use std::iter;

use dmark_core::{ElementNode, Node};
use winnow::{
    Parser as _,
    combinator::{alt, eof, terminated},
};

use crate::{
    attributes::attribute_list,
    cursor::{
        Cursor, Depth, INDENT_WIDTH, PResult, at_blank_line, at_block_start, at_eof, blank_line,
        expect_char, fail, identifier, indentation, peek, skip,
    },
    error::ErrorCode,
    inline::inline_content,
};

/// Parses a whole document into its top-level blocks.
pub(crate) fn document(input: &mut Cursor<'_>, max_depth: usize) -> PResult<Vec<Node>> {
    while !at_eof(input) && at_blank_line(input) {
        blank_line(input)?;
    }

    let mut blocks = Vec::new();
    while !at_eof(input) {
        let block = block_with_children(input, 0, Depth::root(max_depth))?;
        blocks.push(Node::Element(block));
    }
    Ok(blocks)
}

/// Parses a block head followed by every line indented deeper than `level`.
fn block_with_children(input: &mut Cursor<'_>, level: usize, depth: Depth) -> PResult<ElementNode> {
    let depth = depth.descend(input)?;
    let (name, attributes, mut children) = single_block(input, depth)?.into_parts();

    let mut pending_blanks = 0;
    while !at_eof(input) {
        if at_blank_line(input) {
            blank_line(input)?;
            pending_blanks += 1;
            continue;
        }

        if indentation(input) < level + 1 {
            break;
        }
        skip(input, (level + 1) * INDENT_WIDTH);

        if at_block_start(input) {
            pending_blanks = 0;
            let child = block_with_children(input, level + 1, depth)?;
            children.push(Node::Element(child));
            continue;
        }

        if !children.is_empty() {
            children.push(Node::text("\n"));
        }
        children.extend(iter::repeat_n(Node::text("\n"), pending_blanks));
        pending_blanks = 0;

        children.extend(inline_content(input, depth)?);
        end_of_line(input)?;
    }

    Ok(ElementNode::new(name, attributes, children))
}

/// Parses one block line: `#name`, optional attributes, optional content.
fn single_block<'src>(input: &mut Cursor<'src>, depth: Depth) -> PResult<ElementNode> {
    expect_char(input, '#', ErrorCode::D001)?;
    let name = identifier(input)?;
    let attributes = attribute_list(input)?;

    let children = alt((
        line_end.map(|()| Vec::new()),
        |input: &mut Cursor<'src>| -> PResult<Vec<Node>> {
            expect_char(input, ' ', ErrorCode::D001)?;
            terminated(
                |input: &mut Cursor<'src>| inline_content(input, depth),
                end_of_line,
            )
            .parse_next(input)
        },
    ))
    .parse_next(input)?;

    Ok(ElementNode::new(name, attributes, children))
}

/// Consumes a line break, or matches the end of input.
fn line_end(input: &mut Cursor<'_>) -> PResult<()> {
    alt(('\n'.void(), eof.void())).parse_next(input)
}

/// Ends a content line, rejecting whatever stopped the inline content early.
fn end_of_line(input: &mut Cursor<'_>) -> PResult<()> {
    alt((line_end, stray_content)).parse_next(input)
}

fn stray_content(input: &mut Cursor<'_>) -> PResult<()> {
    match peek(input) {
        Some('}') => fail(input, ErrorCode::D101, r#"unexpected } -- try escaping it as "%}""#),
        _ => fail(input, ErrorCode::D003, "unexpected content"),
    }
}

#[cfg(test)]
mod tests {
    use dmark_core::Dump;

    use super::*;
    use crate::error::ParserError;

    fn document_error(source: &str) -> ParserError {
        let mut input = Cursor::new(source);
        let err = document(&mut input, 16).expect_err("document should fail");
        ParserError::from_modal(source, err, 0)
    }

    fn dump_document(source: &str) -> String {
        let mut input = Cursor::new(source);
        let nodes = document(&mut input, 16).expect("document should parse");
        Dump::forest(&nodes).to_string()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(dump_document(""), "[]");
        assert_eq!(dump_document("\n  \n\n"), "[]");
    }

    #[test]
    fn test_block_without_content() {
        assert_eq!(dump_document("#hr"), "[Element(hr, [])]");
        assert_eq!(dump_document("#hr\n"), "[Element(hr, [])]");
    }

    #[test]
    fn test_sibling_blocks() {
        assert_eq!(
            dump_document("#p a\n#p b\n"),
            r#"[Element(p, ["a"]), Element(p, ["b"])]"#
        );
    }

    #[test]
    fn test_trailing_blank_lines_are_ignored() {
        assert_eq!(dump_document("#p a\n  b\n\n   \n"), r#"[Element(p, ["a", "\n", "b"])]"#);
    }

    #[test]
    fn test_continuation_keeps_extra_indentation() {
        assert_eq!(
            dump_document("#p foo\n    donkey"),
            r#"[Element(p, ["foo", "\n", "  donkey"])]"#
        );
    }

    #[test]
    fn test_first_continuation_of_empty_block() {
        assert_eq!(dump_document("#p\n  hello"), r#"[Element(p, ["hello"])]"#);
    }

    #[test]
    fn test_blank_lines_before_continuation() {
        assert_eq!(
            dump_document("#p a\n\n\n  b"),
            r#"[Element(p, ["a", "\n", "\n", "\n", "b"])]"#
        );
    }

    #[test]
    fn test_blank_lines_before_child_are_dropped() {
        assert_eq!(
            dump_document("#p a\n\n  #q b"),
            r#"[Element(p, ["a", Element(q, ["b"])])]"#
        );
    }

    #[test]
    fn test_stray_content_after_element() {
        let err = document_error("#p %em{x}}");
        assert_eq!(err.code(), ErrorCode::D101);
        assert_eq!(err.col(), 9);
        assert_eq!(err.message(), r#"unexpected } -- try escaping it as "%}""#);
    }

    #[test]
    fn test_stray_brace_on_continuation_line() {
        let err = document_error("#p a\n  b}");
        assert_eq!(err.code(), ErrorCode::D101);
        assert_eq!((err.line(), err.col()), (1, 3));
    }

    #[test]
    fn test_head_content_needs_a_space() {
        let err = document_error("#p[a]x");
        assert_eq!(err.code(), ErrorCode::D001);
        assert_eq!(err.col(), 5);
        assert_eq!(err.message(), r#"expected " ", but got "x""#);
    }
}
