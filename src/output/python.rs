//! Rendering a shell command as a Python `subprocess.call`.

use crate::error::{IbsubError, Result};

/// `subprocess.call([...])` running the words of `command`.
pub(super) fn subprocess_call(command: &str) -> Result<String> {
    let words = shell_words::split(command).map_err(|e| {
        IbsubError::UserError(format!(
            "failed to split command '{}' for python output: {}\n\
             Fix: check for unmatched quotes.",
            command, e
        ))
    })?;

    let literals: Vec<String> = words.iter().map(|word| string_literal(word)).collect();
    Ok(format!("subprocess.call([{}])", literals.join(", ")))
}

/// A Python string literal for `s`, quoted the way `repr()` quotes it.
pub(super) fn string_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut literal = String::with_capacity(s.len() + 2);
    literal.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c == quote => {
                literal.push('\\');
                literal.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                literal.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => literal.push(c),
        }
    }
    literal.push(quote);
    literal
}
