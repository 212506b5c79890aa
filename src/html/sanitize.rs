//! Allow-list HTML sanitization using lol_html

use lol_html::{doc_comments, element, rewrite_str, RewriteStrSettings};

use crate::error::{EngineError, Result};

/// Block and inline tags the lesson editor may produce
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "s", "ul", "ol", "li", "h1", "h2", "h3",
];

/// Attributes kept on allow-listed tags
pub const ALLOWED_ATTRIBUTES: &[&str] = &["style"];

/// CSS properties kept inside a `style` attribute
pub const ALLOWED_STYLE_PROPERTIES: &[&str] = &["color", "background-color", "text-align"];

/// Sanitize lesson markup against the allow-list
///
/// Anything outside the allow-list is stripped, not escaped-and-shown:
/// disallowed elements lose their tags but keep their text content, except
/// `script` and `style` which are removed including content. Comments are
/// dropped. Malformed markup is never an error; the returned `Result`
/// surfaces only an internal rewriter failure.
pub fn sanitize(html: &str) -> Result<String> {
    let result = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("*", |el| {
                    let tag = el.tag_name().to_lowercase();

                    if tag == "script" || tag == "style" {
                        el.remove();
                        return Ok(());
                    }

                    if !ALLOWED_TAGS.contains(&tag.as_str()) {
                        el.remove_and_keep_content();
                        return Ok(());
                    }

                    let attribute_names: Vec<String> =
                        el.attributes().iter().map(|a| a.name()).collect();
                    for name in attribute_names {
                        if !ALLOWED_ATTRIBUTES.contains(&name.as_str()) {
                            el.remove_attribute(&name);
                        }
                    }

                    if let Some(style) = el.get_attribute("style") {
                        let filtered = filter_style(&style);
                        if filtered.is_empty() {
                            el.remove_attribute("style");
                        } else if filtered != style {
                            el.set_attribute("style", &filtered)?;
                        }
                    }

                    Ok(())
                }),
            ],
            document_content_handlers: vec![doc_comments!(|c| {
                c.remove();
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| EngineError::Rewrite(e.to_string()))?;

    Ok(result)
}

/// Keep only allow-listed declarations from a `style` attribute value
fn filter_style(style: &str) -> String {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim().to_lowercase();
            let value = value.trim();
            if value.is_empty() || !ALLOWED_STYLE_PROPERTIES.contains(&property.as_str()) {
                return None;
            }
            Some(format!("{}: {}", property, value))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_markup_passes_through() {
        let html = "<p>Hello <strong>world</strong></p>";
        assert_eq!(sanitize(html).unwrap(), html);
    }

    #[test]
    fn test_allowed_structure_preserved() {
        let html = "<h2>Title</h2><p>One</p><p>Two <em>words</em></p><ul><li>a</li></ul>";
        let result = sanitize(html).unwrap();

        assert_eq!(result.matches("<p>").count(), 2);
        assert!(result.contains("<h2>Title</h2>"));
        assert!(result.contains("<em>words</em>"));
        assert!(result.contains("<li>a</li>"));
    }

    #[test]
    fn test_disallowed_tag_stripped_content_kept() {
        let html = r#"<p>Click <a href="https://example.com">here</a></p>"#;
        let result = sanitize(html).unwrap();

        assert!(!result.contains("<a"));
        assert!(!result.contains("href"));
        assert!(result.contains("Click here"));
    }

    #[test]
    fn test_script_removed_with_content() {
        let html = "<p>Hello</p><script>alert('xss')</script><p>World</p>";
        let result = sanitize(html).unwrap();

        assert!(!result.contains("script"));
        assert!(!result.contains("alert"));
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }

    #[test]
    fn test_style_element_removed_with_content() {
        let html = "<style>p { display: none }</style><p>Visible</p>";
        let result = sanitize(html).unwrap();

        assert!(!result.contains("display"));
        assert!(result.contains("Visible"));
    }

    #[test]
    fn test_event_handlers_stripped() {
        let html = r#"<p onclick="alert('xss')" onmouseover="x()">Hello</p>"#;
        let result = sanitize(html).unwrap();

        assert!(!result.contains("onclick"));
        assert!(!result.contains("onmouseover"));
        assert!(result.contains("Hello"));
    }

    #[test]
    fn test_allowed_style_properties_kept() {
        let html = r#"<p style="color: red; background-color: yellow">Hi</p>"#;
        let result = sanitize(html).unwrap();

        assert!(result.contains("color: red"));
        assert!(result.contains("background-color: yellow"));
    }

    #[test]
    fn test_disallowed_style_properties_dropped() {
        let html = r#"<p style="position: fixed; color: red">Hi</p>"#;
        let result = sanitize(html).unwrap();

        assert!(!result.contains("position"));
        assert!(result.contains("color: red"));
    }

    #[test]
    fn test_style_attribute_removed_when_all_dropped() {
        let html = r#"<p style="position: fixed">Hi</p>"#;
        let result = sanitize(html).unwrap();

        assert!(!result.contains("style"));
        assert!(result.contains("<p>Hi</p>"));
    }

    #[test]
    fn test_comments_removed() {
        let html = "<p>Hello<!-- hidden --></p>";
        let result = sanitize(html).unwrap();

        assert!(!result.contains("hidden"));
        assert!(result.contains("Hello"));
    }

    #[test]
    fn test_top_level_comments_removed() {
        // Plain spans sliced mid-paragraph can carry comments outside any
        // element
        let result = sanitize("Hello<!-- hidden --> world").unwrap();

        assert!(!result.contains("hidden"));
        assert_eq!(result, "Hello world");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize("just words").unwrap(), "just words");
    }

    #[test]
    fn test_filter_style_normalizes_separators() {
        assert_eq!(filter_style("color:red;;"), "color: red");
        assert_eq!(
            filter_style("COLOR: red; text-align: center"),
            "color: red; text-align: center"
        );
        assert_eq!(filter_style("width: 10px"), "");
    }
}
