//! Formatting of the generated-URL report block.

use qurl_core::expand::GeneratedUrl;

const RULE_WIDTH: usize = 80;

/// Banner report printed after a generation: source line, one `[name]` + URL
/// paragraph per template, and a total count footer.
pub fn build(source_url: &str, results: &[GeneratedUrl]) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", "GENERATED URLs", width = RULE_WIDTH));
    out.push_str(&heavy);
    out.push_str("\n\n");
    out.push_str(&format!("Source URL: {source_url}\n\n"));
    out.push_str(&light);
    out.push_str("\n\n");
    for r in results {
        out.push_str(&format!("[{}]\n{}\n\n", r.name, r.url));
    }
    out.push_str(&light);
    out.push('\n');
    out.push_str(&format!("Total: {} URLs generated\n", results.len()));
    out.push_str(&heavy);
    out.push_str("\n\n");
    out
}

/// Plain `[name]` + URL paragraphs, the shape handed to the clipboard.
pub fn clipboard_block(results: &[GeneratedUrl]) -> String {
    results
        .iter()
        .map(|r| format!("[{}]\n{}\n", r.name, r.url))
        .collect::<Vec<_>>()
        .join("\n")
}
