use anyhow::{Context, Result};
use engine::RenderSink;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Page templates. `{query}` in any template is replaced with the submitted
/// query string (HTML-escaped) at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub title: String,
    pub results_heading: String,
    pub not_found: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            title: "Search results: {query}".into(),
            results_heading: "<h1>Search results for \u{201c}{query}\u{201d}</h1>".into(),
            not_found: "<h1>Nothing found for \u{201c}{query}\u{201d}</h1>".into(),
        }
    }
}

impl Templates {
    /// Load templates from a JSON file; absent keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading templates {}", path.display()))?;
        let templates = serde_json::from_str(&raw)
            .with_context(|| format!("parsing templates {}", path.display()))?;
        Ok(templates)
    }
}

fn swap(template: &str, query: &str) -> String {
    template.replace("{query}", query)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render sink that builds one HTML page per dispatched query. Article
/// fragments arrive pre-rendered from the index artifact and are emitted
/// as-is; only the query string is escaped.
pub struct HtmlSink {
    templates: Arc<Templates>,
    title: String,
    body: String,
}

impl HtmlSink {
    pub fn new(templates: Arc<Templates>) -> Self {
        Self {
            templates,
            title: String::new(),
            body: String::new(),
        }
    }

    /// Full page for the last dispatched query.
    pub fn into_page(self) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body><article>{}</article></body></html>\n",
            self.title, self.body
        )
    }
}

impl RenderSink for HtmlSink {
    fn update_title(&mut self, query: &str) {
        self.title = swap(&self.templates.title, &escape_html(query));
    }

    fn not_found(&mut self, query: &str) {
        self.body = swap(&self.templates.not_found, &escape_html(query));
    }

    fn results(&mut self, query: &str, articles: &[&str]) {
        let heading = swap(&self.templates.results_heading, &escape_html(query));
        self.body = format!("{}{}", heading, articles.join(" "));
    }
}
