/*!
 * Command Line Tokenizer
 * Splits an input line into argument words and a background flag
 */

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    pub argv: Vec<String>,
    /// The line ended with a standalone `&`
    pub background: bool,
}

impl ParsedLine {
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Program name, if any
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Tokenize one line
///
/// Words are separated by blanks. A word starting with `'` extends to the
/// next `'` and may contain blanks; an unterminated quote drops the rest of
/// the line. A final `&` word is removed and marks a background job.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut argv = Vec::new();
    let mut rest = line.trim_start_matches(is_separator);

    while !rest.is_empty() {
        let (word, remainder) = if let Some(quoted) = rest.strip_prefix('\'') {
            match quoted.split_once('\'') {
                Some(split) => split,
                None => break,
            }
        } else {
            rest.split_once(is_separator).unwrap_or((rest, ""))
        };
        argv.push(word.to_string());
        rest = remainder.trim_start_matches(is_separator);
    }

    let background = argv.last().is_some_and(|word| word == "&");
    if background {
        argv.pop();
    }

    ParsedLine { argv, background }
}
