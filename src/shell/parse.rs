//! Input line tokenizer.

/// A parsed input line: the action token plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub action: String,
    pub args: Vec<String>,
}

/// Split an input line on whitespace into an action and its arguments.
/// Returns `None` for blank lines.
pub fn parse_line(input: &str) -> Option<ParsedLine> {
    let mut tokens = input.split_whitespace().map(String::from);
    let action = tokens.next()?;
    Some(ParsedLine {
        action,
        args: tokens.collect(),
    })
}
