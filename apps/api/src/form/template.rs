use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Render the form page with the two output boxes filled in.
pub fn render_index(status: &str, result: &str) -> Html<String> {
    let html = INDEX_HTML
        .replace("{{ status }}", &escape_html(status))
        .replace("{{ result }}", &escape_html(result));
    Html(html)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
