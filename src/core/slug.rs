/// Normalize an arbitrary string into a lowercase-hyphen token.
///
/// Every maximal run of characters outside `[a-z0-9]` collapses to a single
/// hyphen; leading and trailing hyphens are stripped. Total over all inputs
/// (an input with no alphanumeric content yields the empty string) and
/// idempotent.
pub fn to_kebab(value: &str) -> String {
    let trimmed = value.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut prev_was_dash = false;

    for ch in trimmed.chars() {
        match ch {
            'a'..='z' | '0'..='9' => {
                out.push(ch);
                prev_was_dash = false;
            }
            'A'..='Z' => {
                out.push(ch.to_ascii_lowercase());
                prev_was_dash = false;
            }
            _ => {
                // Separator run: emit at most one hyphen, never at the start
                if out.is_empty() || prev_was_dash {
                    continue;
                }
                out.push('-');
                prev_was_dash = true;
            }
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}
