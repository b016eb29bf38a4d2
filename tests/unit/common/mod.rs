//! Test fixtures shared by unit tests

/// A distinct, well-formed 18-character code for each `n`
pub fn code(n: usize) -> String {
    format!("CODE{n:0>14}")
}

/// Join lines into one submitted text, numbering them `1.`, `2.`, ...
pub fn numbered(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| format!("{}. {l}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
