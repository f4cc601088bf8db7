//! Interactive HTML page
//!
//! A single self-contained page reproducing the viewer: one selector button
//! per method, the chart (drawn by plotly.js from the embedded figures), the
//! active method's description and insights, and the static comparison and
//! dataset sections. Switching methods happens client-side by swapping the
//! embedded figure; no request is made after the page loads.

use super::figure::Figure;
use super::page::PageContent;
use crate::config::ViewConfig;
use crate::projection::{Method, MethodDescriptor, ProjectionError, Result};
use base64::Engine;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 24px 16px; }
header h1 { margin: 0; font-size: 1.9rem; }
header .credit, header .subtitle { color: #4b5563; margin: 6px 0 0; }
main { max-width: 1280px; margin: 0 auto; padding: 24px 16px; }
.selector { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 24px; }
.selector button { padding: 16px; border: 0; border-radius: 8px; background: #fff; color: #374151; font-size: 1rem; cursor: pointer; }
.selector button.active { background: #4f46e5; color: #fff; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 24px; margin-bottom: 24px; }
.hint { padding: 16px; }
"#;

const SCRIPT: &str = r#"
function showMethod(key) {
  const view = VIEWS[key];
  if (!view) { return; }
  Plotly.react('plot', view.figure.data, view.figure.layout, view.figure.config);
  document.getElementById('about-title').textContent = 'About ' + view.name;
  document.getElementById('about-text').textContent = view.description;
  const list = document.getElementById('insights');
  list.replaceChildren(...view.insights.map(function (text) {
    const item = document.createElement('li');
    item.textContent = text;
    return item;
  }));
  document.querySelectorAll('button[data-method]').forEach(function (button) {
    button.classList.toggle('active', button.dataset.method === key);
  });
}
document.querySelectorAll('button[data-method]').forEach(function (button) {
  button.addEventListener('click', function () { showMethod(button.dataset.method); });
});
showMethod(INITIAL);
"#;

/// One method as offered on the page
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub descriptor: &'a MethodDescriptor,
    pub figure: Figure,
}

#[derive(Serialize)]
struct ViewPayload<'a> {
    name: &'a str,
    description: &'a str,
    insights: &'a [String],
    figure: &'a Figure,
}

/// Render the page
///
/// # Arguments
/// * `content` - Static page prose
/// * `views` - Methods offered by the selector, in button order
/// * `active` - Method shown on load; the first view if not offered
/// * `config` - View configuration (charting library URL)
/// * `snapshot_svg` - Optional static image of the active method, shown when scripts are disabled
pub fn render_page(
    content: &PageContent,
    views: &[PageView<'_>],
    active: Method,
    config: &ViewConfig,
    snapshot_svg: Option<&[u8]>,
) -> Result<String> {
    let first = views
        .first()
        .ok_or_else(|| ProjectionError::Data("Page needs at least one method".to_string()))?;
    let active_view = views
        .iter()
        .find(|v| v.descriptor.key == active)
        .unwrap_or(first);

    let payload: BTreeMap<&str, ViewPayload<'_>> = views
        .iter()
        .map(|v| {
            (
                v.descriptor.key.key(),
                ViewPayload {
                    name: &v.descriptor.name,
                    description: &v.descriptor.description,
                    insights: &v.descriptor.insights,
                    figure: &v.figure,
                },
            )
        })
        .collect();
    let views_json = script_safe_json(&serde_json::to_string(&payload)?);
    let initial_json = script_safe_json(&serde_json::to_string(active_view.descriptor.key.key())?);

    let mut html = String::with_capacity(views_json.len() + 8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&content.title)));
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str(&format!(
        "<script src=\"{}\"></script>\n",
        escape_html(&config.plotly_src)
    ));
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&content.title)));
    for credit in &content.credits {
        html.push_str(&format!("<p class=\"credit\">{}</p>\n", escape_html(credit)));
    }
    html.push_str(&format!(
        "<p class=\"subtitle\">{}</p>\n",
        escape_html(&content.subtitle)
    ));
    html.push_str("</header>\n<main>\n");

    // Method selector
    html.push_str("<nav class=\"selector\">\n");
    for view in views {
        let class = if view.descriptor.key == active_view.descriptor.key {
            " class=\"active\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<button type=\"button\" data-method=\"{}\"{}>{}</button>\n",
            view.descriptor.key.key(),
            class,
            escape_html(&view.descriptor.name)
        ));
    }
    html.push_str("</nav>\n");

    html.push_str(&format!(
        "<div class=\"card hint\">{}</div>\n",
        escape_html(&content.hover_hint)
    ));

    // Chart
    html.push_str("<div class=\"card\">\n<div id=\"plot\"></div>\n");
    if let Some(svg) = snapshot_svg {
        let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
        html.push_str(&format!(
            "<noscript><img alt=\"{}\" src=\"data:image/svg+xml;base64,{}\"></noscript>\n",
            escape_html(&config.title_for(active_view.descriptor)),
            encoded
        ));
    }
    html.push_str("</div>\n");

    // Description and insights of the active method
    let descriptor = active_view.descriptor;
    html.push_str("<section class=\"card\">\n");
    html.push_str(&format!(
        "<h2 id=\"about-title\">About {}</h2>\n",
        escape_html(&descriptor.name)
    ));
    html.push_str(&format!(
        "<p id=\"about-text\">{}</p>\n",
        escape_html(&descriptor.description)
    ));
    html.push_str("<h3>Key Insights</h3>\n<ul id=\"insights\">\n");
    for insight in &descriptor.insights {
        html.push_str(&format!("<li>{}</li>\n", escape_html(insight)));
    }
    html.push_str("</ul>\n</section>\n");

    // Comparison
    let comparison = &content.comparison;
    html.push_str("<section class=\"card\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&comparison.title)));
    html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape_html(&comparison.heading)));
    for topic in &comparison.topics {
        html.push_str(&format!(
            "<li><strong>{}:</strong>\n<ul>\n",
            escape_html(&topic.label)
        ));
        for point in &topic.points {
            html.push_str(&format!("<li>{}</li>\n", escape_html(point)));
        }
        html.push_str("</ul>\n</li>\n");
    }
    html.push_str("</ul>\n</section>\n");

    // Dataset
    let dataset = &content.dataset;
    html.push_str("<section class=\"card\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&dataset.title)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&dataset.summary)));
    html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape_html(&dataset.heading)));
    for observation in &dataset.observations {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            escape_html(&observation.label),
            escape_html(&observation.text)
        ));
    }
    html.push_str("</ul>\n</section>\n</main>\n");

    html.push_str(&format!(
        "<script>\nconst VIEWS = {};\nconst INITIAL = {};\n{}</script>\n",
        views_json, initial_json, SCRIPT
    ));
    html.push_str("</body>\n</html>\n");

    debug!(
        "Page: {} methods, active {}, {} bytes",
        views.len(),
        active_view.descriptor.key,
        html.len()
    );
    Ok(html)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
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
    escaped
}

/// Make JSON safe to inline in a `<script>` element
///
/// `</` would close the element early; `<\/` is the same string to JSON.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
