/// Whether a `Content-Type` header value names an HTML document.
pub fn is_html(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "text/html" || essence.starts_with("application/xhtml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_content_types() {
        assert!(is_html(Some("text/html")));
        assert!(is_html(Some("Text/HTML; charset=UTF-8")));
        assert!(is_html(Some(" text/html ;charset=iso-8859-1")));
        assert!(is_html(Some("application/xhtml+xml")));
    }

    #[test]
    fn non_html_content_types() {
        assert!(!is_html(None));
        assert!(!is_html(Some("")));
        assert!(!is_html(Some("application/json")));
        assert!(!is_html(Some("text/htm")));
        assert!(!is_html(Some("text/plain; note=text/html")));
    }
}
