//! Inline content: text runs, escapes, and `%name[attrs]{...}` elements.

use dmark_core::{ElementNode, Node};
use winnow::{
    Parser as _,
    combinator::{alt, dispatch, opt, peek, preceded, repeat},
    token::{any, take_till},
};

use crate::{
    attributes::attribute_list,
    cursor::{Cursor, Depth, PResult, expect_char, fail, identifier},
    error::ErrorCode,
};

/// Reads inline content up to a line break, a `}`, or the end of input.
///
/// The terminator is left unconsumed. Each escape becomes its own text node.
pub(crate) fn inline_content<'src>(input: &mut Cursor<'src>, depth: Depth) -> PResult<Vec<Node>> {
    repeat(
        0..,
        alt((
            |input: &mut Cursor<'src>| percent(input, depth),
            text_run.map(Node::text),
        )),
    )
    .parse_next(input)
}

fn text_run<'src>(input: &mut Cursor<'src>) -> PResult<&'src str> {
    take_till(1.., ['%', '}', '\n']).parse_next(input)
}

/// Reads an escape or an inline element starting at `%`.
fn percent<'src>(input: &mut Cursor<'src>, depth: Depth) -> PResult<Node> {
    dispatch! {peek(preceded('%', opt(any)));
        Some('%' | '}' | '#') => preceded('%', any).map(|ch: char| Node::text(ch.to_string())),
        None | Some('\n') => preceded('%', |input: &mut Cursor<'src>| -> PResult<Node> {
            fail(input, ErrorCode::D102, "expected something after %")
        }),
        Some(_) => |input: &mut Cursor<'src>| -> PResult<Node> {
            let depth = depth.descend(input)?;
            preceded('%', |input: &mut Cursor<'src>| inline_element(input, depth))
                .map(Node::Element)
                .parse_next(input)
        },
    }
    .parse_next(input)
}

fn inline_element(input: &mut Cursor<'_>, depth: Depth) -> PResult<ElementNode> {
    let name = identifier(input)?;
    let attributes = attribute_list(input)?;
    expect_char(input, '{', ErrorCode::D001)?;
    let children = inline_content(input, depth)?;
    expect_char(input, '}', ErrorCode::D103)?;

    Ok(ElementNode::new(name, attributes, children))
}
