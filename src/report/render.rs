//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::report::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        writer.write_all(output.as_bytes())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        // Group by kind
        let mut articles = Vec::new();
        let mut tokens = Vec::new();
        let mut decades = Vec::new();
        let mut clouds = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Article => articles.push(item),
                Kind::Tokens => tokens.push(item),
                Kind::Decade => decades.push(item),
                Kind::Cloud => clouds.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !articles.is_empty() {
            output.push_str("## Articles\n\n");
            for item in articles {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !tokens.is_empty() {
            output.push_str("## Tokens\n\n");
            for item in tokens {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !decades.is_empty() {
            output.push_str("## Decades\n\n");
            for item in decades {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !clouds.is_empty() {
            output.push_str("## Clouds\n\n");
            for item in clouds {
                if let (Some(path), Some(decade)) = (&item.path, item.decade) {
                    output.push_str(&format!("- `{}` ({}s)\n", path, decade));
                }
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        match (&item.title, item.decade) {
            (Some(title), Some(decade)) => {
                output.push_str(&format!("- **{}s** {}", decade, title))
            }
            (Some(title), None) => output.push_str(&format!("- {}", title)),
            (None, Some(decade)) => output.push_str(&format!("- **{}s**", decade)),
            (None, None) => output.push('-'),
        }

        if let Some(data) = &item.data {
            if let Some(tokens) = data.get("tokens").and_then(|t| t.as_array()) {
                let words: Vec<_> = tokens.iter().filter_map(|t| t.as_str()).collect();
                output.push_str(&format!(" `{}`", words.join(" ")));
            } else {
                output.push_str(&format!(" `{}`", data));
            }
        }

        output.push('\n');
    }

    /// Render as raw output (for debugging)
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| item.title.clone().or_else(|| item.path.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
