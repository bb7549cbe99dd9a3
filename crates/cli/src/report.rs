use std::collections::BTreeMap;

use anyhow::Result;
use hacfg_parser::ConfigDocument;
use serde::Serialize;

/// Per-section line counts for the `sections` subcommand.
#[derive(Serialize)]
struct SectionSummary<'a> {
    global_lines: usize,
    defaults_lines: usize,
    frontends: BTreeMap<&'a str, usize>,
    backends: BTreeMap<&'a str, usize>,
}

pub fn render_lines(lines: &[String], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(lines)?);
    }
    Ok(lines.join("\n"))
}

pub fn render_blocks(
    keyword: &str,
    blocks: &BTreeMap<&str, &[String]>,
    json: bool,
    names_only: bool,
) -> Result<String> {
    if json {
        if names_only {
            let names: Vec<&str> = blocks.keys().copied().collect();
            return Ok(serde_json::to_string_pretty(&names)?);
        }
        return Ok(serde_json::to_string_pretty(blocks)?);
    }

    if names_only {
        return Ok(blocks.keys().copied().collect::<Vec<_>>().join("\n"));
    }

    let rendered: Vec<String> = blocks
        .iter()
        .map(|(name, lines)| {
            let mut block = format!("{keyword} {name}");
            for line in *lines {
                block.push_str("\n  ");
                block.push_str(line);
            }
            block
        })
        .collect();
    Ok(rendered.join("\n\n"))
}

pub fn render_summary(doc: &ConfigDocument, json: bool) -> Result<String> {
    let summary = SectionSummary {
        global_lines: doc.global.len(),
        defaults_lines: doc.defaults.len(),
        frontends: doc
            .frontends
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.len()))
            .collect(),
        backends: doc
            .backends
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.len()))
            .collect(),
    };

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut rows = Vec::new();
    rows.push(format!("{:>5} global", summary.global_lines));
    rows.push(format!("{:>5} defaults", summary.defaults_lines));
    for (name, count) in &summary.frontends {
        rows.push(format!("{count:>5} frontend {name}"));
    }
    for (name, count) in &summary.backends {
        rows.push(format!("{count:>5} backend {name}"));
    }
    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hacfg_parser::parse_str;

    fn sample() -> ConfigDocument {
        parse_str(
            "global\n  maxconn 256\ndefaults\n  mode http\nfrontend public\n  bind :80\nbackend be_app\n  server s1 10.0.0.1:8080\nbackend be_logs\n  server s2 10.0.0.2:8080\n",
        )
    }

    #[test]
    fn lines_render_one_per_row() {
        let doc = sample();
        let text = render_lines(&doc.global, false).expect("render");
        assert_eq!(text, "maxconn 256");
    }

    #[test]
    fn lines_render_as_json_array() {
        let doc = sample();
        let text = render_lines(&doc.defaults, true).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed, serde_json::json!(["mode http"]));
    }

    #[test]
    fn blocks_render_with_keyword_headers() {
        let doc = sample();
        let matched = doc.backends_matching("");
        let text = render_blocks("backend", &matched, false, false).expect("render");
        assert_eq!(
            text,
            "backend be_app\n  server s1 10.0.0.1:8080\n\nbackend be_logs\n  server s2 10.0.0.2:8080"
        );
    }

    #[test]
    fn blocks_render_names_only() {
        let doc = sample();
        let matched = doc.backends_matching("");
        let text = render_blocks("backend", &matched, false, true).expect("render");
        assert_eq!(text, "be_app\nbe_logs");
    }

    #[test]
    fn blocks_render_as_json_object() {
        let doc = sample();
        let matched = doc.backends_matching("be_app");
        let text = render_blocks("backend", &matched, true, false).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(
            parsed,
            serde_json::json!({"be_app": ["server s1 10.0.0.1:8080"]})
        );
    }

    #[test]
    fn blocks_render_nothing_on_no_match() {
        let doc = sample();
        let matched = doc.backends_matching("nomatch");
        let text = render_blocks("backend", &matched, false, false).expect("render");
        assert_eq!(text, "");
    }

    #[test]
    fn summary_counts_every_section() {
        let doc = sample();
        let text = render_summary(&doc, false).expect("render");
        assert!(text.contains("    1 global"));
        assert!(text.contains("    1 frontend public"));
        assert!(text.contains("    1 backend be_logs"));
    }

    #[test]
    fn summary_json_shape() {
        let doc = sample();
        let text = render_summary(&doc, true).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed["global_lines"], 1);
        assert_eq!(parsed["defaults_lines"], 1);
        assert_eq!(parsed["frontends"]["public"], 1);
        assert_eq!(parsed["backends"]["be_logs"], 1);
    }
}
