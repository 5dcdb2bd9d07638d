//! HTML rendering of metric samples

use crate::models::MetricSample;
use std::borrow::Cow;

/// Page title and heading
pub const PAGE_TITLE: &str = "Метрики производительности TaskManager";

/// Table header cells: service, metric, value
pub const COLUMN_HEADERS: [&str; 3] = ["Сервис", "Метрика", "Значение"];

const STYLE_RULES: &str = concat!(
    "        body { font-family: Arial, sans-serif; margin: 40px; }\n",
    "        h1 { color: #333; }\n",
    "        table { border-collapse: collapse; width: 100%; }\n",
    "        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n",
    "        th { background-color: #f2f2f2; }\n",
);

/// A complete HTML document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    html: String,
    rows: usize,
}

impl RenderedPage {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }

    /// Number of data rows, not counting the header
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Document size in bytes
    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

/// Render samples as a table, one row per sample in input order
pub fn render(samples: &[MetricSample]) -> RenderedPage {
    let mut html = String::with_capacity(1024 + samples.len() * 128);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"ru\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    push_element(&mut html, 1, "title", PAGE_TITLE);
    html.push_str("    <style>\n");
    html.push_str(STYLE_RULES);
    html.push_str("    </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    push_element(&mut html, 1, "h1", PAGE_TITLE);
    html.push_str("    <table>\n");

    html.push_str("        <tr>\n");
    for header in COLUMN_HEADERS {
        push_element(&mut html, 3, "th", header);
    }
    html.push_str("        </tr>\n");

    for sample in samples {
        html.push_str("        <tr>\n");
        push_element(&mut html, 3, "td", &sample.job);
        push_element(&mut html, 3, "td", &sample.metric_name);
        push_element(&mut html, 3, "td", &sample.value);
        html.push_str("        </tr>\n");
    }

    html.push_str("    </table>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    RenderedPage {
        html,
        rows: samples.len(),
    }
}

fn push_element(html: &mut String, depth: usize, tag: &str, text: &str) {
    for _ in 0..depth {
        html.push_str("    ");
    }
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(&escape_html(text));
    html.push_str("</");
    html.push_str(tag);
    html.push_str(">\n");
}

/// Escape text for use inside an HTML element
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
