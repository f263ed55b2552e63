//! Parsing of one input line into a [Command].
//!
//! The command language is small:
//! - `:q`, `:quit`, `:exit` cancel the run (case-insensitive).
//! - `:sel <value>`, `:select <value>` mark the value as a selection request.
//! - `:: <name>` escapes a literal name, so names starting with `:` can be typed.
//! - anything else is a plain value: `.`, `..`, a 1-based index or a name.
//!
//! An unknown `:word` is not an error; the whole line is kept as a plain value.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    SelectIntent(String),
    Escape(String),
    Plain(String),
}

const ESCAPE_PREFIX: &str = ":: ";

pub fn parse(line: &str) -> Command {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(ESCAPE_PREFIX) {
        return Command::Escape(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix(':') {
        let rest = rest.trim_start();
        let (word, remainder) = match rest.split_once(char::is_whitespace) {
            Some((word, remainder)) => (word, remainder.trim()),
            None => (rest, ""),
        };

        match word.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "sel" | "select" => return Command::SelectIntent(remainder.to_string()),
            _ => {
                tracing::debug!(command = word, "unrecognized command, treating line as a value");
            }
        }
    }

    Command::Plain(line.to_string())
}

/// How a value (after command parsing) addresses the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// `.` or `..`
    Relative(&'a str),
    /// 1-based position in the rendered listing. `None` if the digits overflow.
    Index(Option<usize>),
    Name(&'a str),
}

impl<'a> Target<'a> {
    pub fn classify(value: &'a str) -> Self {
        match value {
            "." | ".." => Target::Relative(value),
            v if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) => {
                Target::Index(v.parse().ok())
            }
            v => Target::Name(v),
        }
    }
}
