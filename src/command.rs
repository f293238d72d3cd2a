use crate::linked_list::LinkedList;

use std::fmt;
use std::str::FromStr;

/// The playground walkthrough: build, drain and rebuild a list with every operation.
pub const WALKTHROUGH: &str = "push 3; push 2; push 1; pop; pop; pop; \
    append 6; append 7; append 8; remove_last; remove_last; remove_last; \
    append 1; append 2; append 3; node 0; node 1; node 2; delete 1; delete 0; \
    append 6; append 7; insert 8 3; insert 2 0; reverse";

/// One step of a playground script, e.g. `push 3` or `insert 8 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Push(i64),
    Pop,
    Append(i64),
    RemoveLast,
    /// Look up the node at an index
    Node(isize),
    Delete(isize),
    /// Insert a value at an index
    Insert(i64, isize),
    Reverse,
    Print,
}

/// What running a command produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command hands back a value, or None when there was nothing to hand back
    Value(Option<i64>),
    /// Whether `insert` added a node
    Inserted(bool),
    Done,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Blank command
    Empty,
    UnknownCommand(String),
    /// The command needs more arguments than it was given
    MissingArgument(&'static str),
    InvalidNumber(String),
    TrailingArgument(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::UnknownCommand(word) => write!(f, "unknown command \"{}\"", word),
            ParseError::MissingArgument(what) => write!(f, "missing argument: {}", what),
            ParseError::InvalidNumber(word) => write!(f, "\"{}\" is not a number", word),
            ParseError::TrailingArgument(word) => write!(f, "unexpected argument \"{}\"", word),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_number<N: FromStr>(
    words: &mut std::str::SplitWhitespace<'_>,
    what: &'static str,
) -> Result<N, ParseError> {
    let word = words.next().ok_or(ParseError::MissingArgument(what))?;
    word.parse::<N>()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Command, ParseError> {
        let mut words = text.split_whitespace();
        let keyword = words.next().ok_or(ParseError::Empty)?;
        let command = match keyword.to_lowercase().as_str() {
            "push" => Command::Push(parse_number(&mut words, "value")?),
            "pop" => Command::Pop,
            "append" => Command::Append(parse_number(&mut words, "value")?),
            "remove_last" | "removelast" => Command::RemoveLast,
            "node" => Command::Node(parse_number(&mut words, "index")?),
            "delete" => Command::Delete(parse_number(&mut words, "index")?),
            "insert" => {
                let value = parse_number(&mut words, "value")?;
                let index = parse_number(&mut words, "index")?;
                Command::Insert(value, index)
            }
            "reverse" => Command::Reverse,
            "print" => Command::Print,
            _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
        };
        if let Some(extra) = words.next() {
            return Err(ParseError::TrailingArgument(extra.to_string()));
        }
        Ok(command)
    }
}

/// Parse a whole script. Commands are separated by `;` or newlines; blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ParseError> {
    script
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<Command>())
        .collect()
}

impl Command {
    pub fn apply(&self, list: &mut LinkedList<i64>) -> Outcome {
        match *self {
            Command::Push(value) => {
                list.push(value);
                Outcome::Done
            }
            Command::Pop => Outcome::Value(list.pop()),
            Command::Append(value) => {
                list.append(value);
                Outcome::Done
            }
            Command::RemoveLast => Outcome::Value(list.remove_last()),
            Command::Node(index) => Outcome::Value(list.node(index).map(|node| *node.value())),
            Command::Delete(index) => Outcome::Value(list.delete(index)),
            Command::Insert(value, index) => Outcome::Inserted(list.insert(value, index)),
            Command::Reverse => {
                list.reverse();
                Outcome::Done
            }
            Command::Print => Outcome::Done,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Push(value) => write!(f, "push {}", value),
            Command::Pop => write!(f, "pop"),
            Command::Append(value) => write!(f, "append {}", value),
            Command::RemoveLast => write!(f, "remove_last"),
            Command::Node(index) => write!(f, "node {}", index),
            Command::Delete(index) => write!(f, "delete {}", index),
            Command::Insert(value, index) => write!(f, "insert {} {}", value, index),
            Command::Reverse => write!(f, "reverse"),
            Command::Print => write!(f, "print"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(Some(value)) => write!(f, "{}", value),
            Outcome::Value(None) => write!(f, "none"),
            Outcome::Inserted(true) => write!(f, "inserted"),
            Outcome::Inserted(false) => write!(f, "skipped"),
            Outcome::Done => write!(f, "ok"),
        }
    }
}
