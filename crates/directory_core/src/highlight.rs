use regex::RegexBuilder;

/// Wraps every case-insensitive occurrence of `query` in `text` with
/// `<mark>` and returns the result as a `<p>` block.
///
/// The query is trimmed and matched literally. Text segments are HTML-escaped
/// before the marks are inserted, so the output is safe to assign as markup.
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str("<p>");

    if query.is_empty() {
        push_escaped(&mut out, text);
    } else {
        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => {
                let mut last = 0;
                for found in pattern.find_iter(text) {
                    push_escaped(&mut out, &text[last..found.start()]);
                    out.push_str("<mark>");
                    push_escaped(&mut out, found.as_str());
                    out.push_str("</mark>");
                    last = found.end();
                }
                push_escaped(&mut out, &text[last..]);
            }
            // Only reachable for queries beyond the regex size limit.
            Err(_) => push_escaped(&mut out, text),
        }
    }

    out.push_str("</p>");
    out
}

/// Escapes the five HTML-special characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
