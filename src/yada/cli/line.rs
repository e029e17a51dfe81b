use std::mem;
use yada::error::{Result, YadaError};

/// Splits a prompt line into words. Single or double quotes group words that
/// contain spaces; a quote only opens at the start of a word, so names like
/// `O'Brien` stay intact. The command word is lowercased.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if (c == '"' || c == '\'') && !in_word => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(YadaError::Api("Unclosed quote in command".into()));
    }
    if in_word {
        words.push(current);
    }
    if let Some(first) = words.first_mut() {
        *first = first.to_lowercase();
    }
    Ok(words)
}

/// `good bye` is the one two-word way to leave.
pub fn is_farewell(words: &[String]) -> bool {
    matches!(words, [good, bye] if good == "good" && bye.eq_ignore_ascii_case("bye"))
}
