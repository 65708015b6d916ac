/// Tidy raw page text before it goes into a model prompt: collapse
/// runs of spaces and tabs inside a line, drop trailing whitespace,
/// and squeeze consecutive blank lines down to one.
pub fn normalize_page_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_blank = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            prev_blank = true;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if prev_blank {
                out.push('\n');
            }
        }
        push_collapsed(trimmed, &mut out);
        prev_blank = false;
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut prev_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
}
