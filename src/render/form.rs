use axum::response::{Html, IntoResponse, Response};

/// The search form, optionally pre-filled with a name and a summary block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormPage {
    pub name: Option<String>,
    pub summary: Option<String>,
}

impl FormPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_summary(name: Option<String>, summary: impl Into<String>) -> Self {
        Self {
            name,
            summary: Some(summary.into()),
        }
    }

    pub fn render(&self) -> String {
        let name = self.name.as_deref().map(escape_html).unwrap_or_default();
        let summary = self
            .summary
            .as_deref()
            .map(|s| format!("    <p class=\"summary\">{}</p>\n", escape_html(s)))
            .unwrap_or_default();
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Search swimmer</title>
</head>
<body>
    <form method="post" action="/search_swimmer">
        <label for="name">Full name</label>
        <input type="text" id="name" name="name" value="{name}">
        <input type="submit" name="submit_button" value="Search">
        <input type="submit" name="submit_button" value="Add">
    </form>
{summary}</body>
</html>
"#
        )
    }
}

impl IntoResponse for FormPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_both_actions_and_no_summary() {
        let html = FormPage::empty().render();
        assert!(html.contains(r#"value="Search""#));
        assert!(html.contains(r#"value="Add""#));
        assert!(!html.contains("class=\"summary\""));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let page = FormPage::with_summary(
            Some("<b>Spitz</b>".into()),
            "Tom & \"Jerry\" swimmer",
        );
        let html = page.render();
        assert!(html.contains(r#"value="&lt;b&gt;Spitz&lt;/b&gt;""#));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot; swimmer"));
        assert!(!html.contains("<b>Spitz"));
    }
}
