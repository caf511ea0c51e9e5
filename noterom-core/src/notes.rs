/// Readable text for HTML notes, used by the detail preview.
///
/// Notes are stored verbatim; this only affects display.
pub fn notes_preview(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    match htmd::convert(html) {
        Ok(markdown) => markdown.trim().to_string(),
        Err(_) => strip_html(html),
    }
}

fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut inside_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => inside_tag = true,
            '>' => inside_tag = false,
            _ if !inside_tag => result.push(ch),
            _ => {}
        }
    }

    result
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_markup_keeps_text() {
        assert!(notes_preview("<b>hi</b>").contains("hi"));
    }

    #[test]
    fn blank_notes_preview_empty() {
        assert_eq!(notes_preview("   "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(notes_preview("read chapter 4"), "read chapter 4");
    }

    #[test]
    fn strip_html_decodes_entities() {
        assert_eq!(strip_html("<p>a &amp; b</p>"), "a & b");
    }
}
