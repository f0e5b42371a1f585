use nom::{
    bytes::complete::take_while,
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{delimited, pair},
    IResult,
};

use crate::error::ShuffleError;

pub const DEFAULT_DELIMITER: char = ',';

fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// A single list element, with any surrounding (Unicode) whitespace.
fn element(input: &str) -> IResult<&str, &str> {
    delimited(whitespace, integer, whitespace)(input)
}

/// Parses a delimited list of integers such as `"3, -1,4"`. Either every
/// element parses or nothing is returned; empty elements are errors, so an
/// empty string is rejected too.
pub fn parse_sequence(input: &str, delimiter: char) -> Result<Vec<i64>, ShuffleError> {
    input
        .split(delimiter)
        .map(|token| {
            all_consuming(element)(token)
                .ok()
                .and_then(|(_, digits)| digits.parse::<i64>().ok())
                .ok_or_else(|| ShuffleError::InvalidElement(token.to_string()))
        })
        .collect()
}

pub fn render_sequence(values: &[i64], delimiter: char) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(delimiter.to_string().as_str())
}
