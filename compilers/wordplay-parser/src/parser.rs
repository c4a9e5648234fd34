use nom::{
    bytes::complete::{take_while, take_while1},
    IResult,
};
use crate::token::Span;

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Split on unicode whitespace, keeping the byte span of every run.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, &str)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match whitespace(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        match word(input) {
            Ok((next_input, text)) => {
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + text.len()), text));
                input = next_input;
            }
            Err(_) => {
                // Unreachable after the whitespace skip, but never loop forever.
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}
