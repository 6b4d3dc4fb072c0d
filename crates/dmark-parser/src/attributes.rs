//! Attribute lists: `[key, key=value, ...]`.
//!
//! A key without `=value` takes its own name as value. Values run until `,`
//! or `]` and may escape `%`, `,` and `]` with a leading `%`.

use dmark_core::{Attributes, Identifier};
use winnow::{
    Parser as _,
    combinator::{alt, cut_err, opt, peek, preceded, repeat, separated, terminated},
    token::{one_of, take_till},
};

use crate::{
    cursor::{Cursor, PResult, describe, fail, identifier, peek as peek_char},
    error::ErrorCode,
};

/// Reads an optional attribute list; absent brackets yield no attributes.
pub(crate) fn attribute_list(input: &mut Cursor<'_>) -> PResult<Attributes> {
    opt(preceded('[', cut_err(attribute_entries)))
        .map(|attributes| attributes.unwrap_or_default())
        .parse_next(input)
}

/// Reads the entries after `[` up to and including the closing `]`.
fn attribute_entries(input: &mut Cursor<'_>) -> PResult<Attributes> {
    alt((
        ']'.map(|_| Attributes::new()),
        terminated(separated(1.., attribute_pair, ','), list_end)
            .map(|pairs: Vec<(Identifier, String)>| pairs.into_iter().collect::<Attributes>()),
    ))
    .parse_next(input)
}

fn list_end<'src>(input: &mut Cursor<'src>) -> PResult<char> {
    alt((']', |input: &mut Cursor<'src>| -> PResult<char> {
        let found = describe(peek_char(input));
        fail(input, ErrorCode::D001, format!(r#"expected ",", but got {found}"#))
    }))
    .parse_next(input)
}

fn attribute_pair(input: &mut Cursor<'_>) -> PResult<(Identifier, String)> {
    (identifier, opt(preceded('=', attribute_value)))
        .map(|(key, value)| {
            let value = value.unwrap_or_else(|| key.to_string());
            (key, value)
        })
        .parse_next(input)
}

fn attribute_value(input: &mut Cursor<'_>) -> PResult<String> {
    terminated(
        repeat(0.., alt((literal_run, value_escape))).fold(String::new, |mut value, part: &str| {
            value.push_str(part);
            value
        }),
        value_end,
    )
    .parse_next(input)
}

fn literal_run<'src>(input: &mut Cursor<'src>) -> PResult<&'src str> {
    take_till(1.., [']', ',', '%', '\n']).parse_next(input)
}

fn value_escape<'src>(input: &mut Cursor<'src>) -> PResult<&'src str> {
    preceded('%', alt(("%", "]", ",", invalid_escape))).parse_next(input)
}

fn invalid_escape<'src>(input: &mut Cursor<'src>) -> PResult<&'src str> {
    match peek_char(input) {
        None | Some('\n') => unterminated(input),
        found => fail(
            input,
            ErrorCode::D202,
            format!(
                r#"expected "%", "," or "]" after "%", but got {}"#,
                describe(found)
            ),
        ),
    }
}

/// Leaves the `,` or `]` ending a value unconsumed.
fn value_end(input: &mut Cursor<'_>) -> PResult<()> {
    alt((peek(one_of([']', ','])).void(), unterminated)).parse_next(input)
}

fn unterminated<O>(input: &mut Cursor<'_>) -> PResult<O> {
    let message = match peek_char(input) {
        Some('\n') => "unexpected line break in attribute value",
        _ => "unexpected file end in attribute value",
    };
    fail(input, ErrorCode::D201, message)
}
