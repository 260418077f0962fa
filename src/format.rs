//! Display formatting for analysis text.
//!
//! A lossy, cosmetic heuristic: blocks separated by blank lines that
//! contain a colon become `### Title` sections; everything else passes
//! through untouched. Nothing downstream parses this output.

/// Reshape raw analysis text into Markdown sections for display.
pub fn format_analysis(result: &str) -> String {
    result
        .split("\n\n")
        .map(|section| match section.split_once(':') {
            Some((title, content)) => {
                format!("### {}\n{}", title.trim(), content.trim())
            }
            None => section.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
