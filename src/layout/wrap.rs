//! Adaptive label wrapping
//!
//! Fits arbitrary-length labels into the character budget derived from a
//! slice's chord length. Greedy word packing into at most two lines:
//!
//! - `max_chars <= 3`: single hard-cut line, no ellipsis (extreme narrow
//!   slice fallback)
//! - a word longer than a whole line is truncated to `max_chars - 3` plus
//!   an ellipsis and forms its own line
//! - packing past two lines keeps the first two and force-fits the second
//!   with an ellipsis to signal the omitted content
//!
//! Lengths are counted in `char`s so multi-byte labels never split inside
//! a codepoint.

const ELLIPSIS: &str = "...";

/// Wrap `text` into at most two lines of at most `max_chars` characters.
///
/// Every returned line is within budget except under the degenerate
/// `max_chars <= 3` rule; an ellipsis appears iff content was dropped.
pub fn wrap_label(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_chars <= 3 {
        return vec![text.chars().take(max_chars).collect()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        // A single word wider than the whole line gets hard-truncated and
        // stands alone
        if word_len > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(truncate_ellipsis(word, max_chars));
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > 2 {
        // Clip to two lines; the second must signal the omission
        let second = if lines[1].chars().count() > max_chars - 3 {
            truncate_ellipsis(&lines[1], max_chars)
        } else if lines[1].ends_with(ELLIPSIS) {
            lines[1].clone()
        } else {
            format!("{}{ELLIPSIS}", lines[1])
        };
        lines.truncate(1);
        lines.push(second);
    }

    lines
}

/// First `max_chars - 3` characters plus an ellipsis; exactly `max_chars`
/// long when the input was longer.
fn truncate_ellipsis(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str(ELLIPSIS);
    out
}
