//! Console output formatter for the composed research context

use colored::Colorize;
use scope_domain::ResearchContext;

/// Formats the final research context for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format with section headers for a human at the terminal.
    pub fn format(context: &ResearchContext) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!("{}\n", "Research Context".cyan().bold()));
        output.push_str(&format!(
            "{}\n",
            "────────────────────────────────────────".dimmed()
        ));
        output.push_str(&context.composed());
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!("breadth={}, depth={}", context.breadth(), context.depth()).dimmed()
        ));

        output
    }

    /// Plain rendering: the composed block plus the parameter line, nothing
    /// else. Suitable for piping into the next stage.
    pub fn format_plain(context: &ResearchContext) -> String {
        format!(
            "{}\nbreadth={}, depth={}",
            context.composed(),
            context.breadth(),
            context.depth()
        )
    }

    /// JSON rendering of the full context, including the composed block.
    pub fn format_json(context: &ResearchContext) -> String {
        let mut value = serde_json::to_value(context).unwrap_or_default();
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "composed".to_string(),
                serde_json::Value::String(context.composed()),
            );
        }
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}
