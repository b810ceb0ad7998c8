use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionError;

/// Fetch a page and reduce it to the visible text of its `<body>`.
///
/// A single GET with the client's default redirect handling; any non-2xx
/// status or transport failure surfaces as [`ExtractionError::Fetch`]. A page
/// without a `<body>` element yields an empty string rather than an error.
pub async fn fetch_page_text(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, ExtractionError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ExtractionError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ExtractionError::Fetch(format!(
            "request failed with status code {}",
            response.status().as_u16()
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| ExtractionError::Fetch(e.to_string()))?;

    Ok(extract_body_text(&html))
}

/// Concatenated text content of the document body, with `script` and `style`
/// subtrees removed. Whitespace inside the body is preserved as written;
/// only the final result is trimmed.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_sel = Selector::parse("body").unwrap();

    let Some(body) = document.select(&body_sel).next() else {
        return String::new();
    };

    collect_visible_text(body).trim().to_string()
}

fn collect_visible_text(el: ElementRef<'_>) -> String {
    use scraper::node::Node;

    if matches!(el.value().name(), "script" | "style") {
        return String::new();
    }

    let mut result = String::new();
    for child in el.children() {
        match child.value() {
            Node::Text(text) => result.push_str(&text.text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    result.push_str(&collect_visible_text(child_el));
                }
            }
            _ => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_and_style() {
        let html = "<html><head><script>x</script></head><body>Hi <b>there</b><style>.a{}</style></body></html>";
        assert_eq!(extract_body_text(html), "Hi there");
    }

    #[test]
    fn test_nested_script_inside_body() {
        let html = "<html><body><div>before<script>var a = 1;</script>after</div></body></html>";
        assert_eq!(extract_body_text(html), "beforeafter");
    }

    #[test]
    fn test_head_content_excluded() {
        let html = "<html><head><title>Page Title</title></head><body>content</body></html>";
        assert_eq!(extract_body_text(html), "content");
    }

    #[test]
    fn test_internal_whitespace_preserved() {
        let html = "<html><body>  one\n\ntwo   three  </body></html>";
        assert_eq!(extract_body_text(html), "one\n\ntwo   three");
    }

    #[test]
    fn test_no_body() {
        // The html5ever parser synthesizes a body for full documents, but a
        // fragment-only input may genuinely lack one.
        let text = extract_body_text("");
        assert_eq!(text, "");
    }

    #[test]
    fn test_deeply_nested_markup() {
        let html = "<html><body><div><p>a<span>b</span></p><p>c</p></div></body></html>";
        assert_eq!(extract_body_text(html), "abc");
    }
}
