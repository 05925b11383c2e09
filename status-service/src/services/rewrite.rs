//! Theme presets and prompt assembly for the text rewrite endpoint.
//!
//! Each transform theme maps to a fixed directive and sampling temperature;
//! the user's stored free-text request rides along as a style directive.

use crate::services::providers::GenerationParams;

/// Upper bound on rewritten output. Inputs are page paragraphs, so this is
/// generous.
const MAX_OUTPUT_TOKENS: i32 = 1024;

#[derive(Debug, Clone, Copy)]
pub struct RewritePreset {
    pub theme: &'static str,
    pub directive: &'static str,
    pub temperature: f32,
}

static PRESETS: [RewritePreset; 3] = [
    RewritePreset {
        theme: "transform_01",
        directive: "with a light touch, changing only a few words so the edit is barely noticeable",
        temperature: 0.3,
    },
    RewritePreset {
        theme: "transform_02",
        directive: "noticeably, reworking the phrasing throughout while keeping it plausible",
        temperature: 0.6,
    },
    RewritePreset {
        theme: "transform_03",
        directive: "completely, fully committing to the requested style in every sentence",
        temperature: 0.9,
    },
];

/// Look up the preset for a transform theme label. Returns `None` for any
/// other label (including the duck themes, which never reach the model).
pub fn preset_for(theme: &str) -> Option<&'static RewritePreset> {
    PRESETS.iter().find(|preset| preset.theme == theme)
}

pub fn build_prompt(preset: &RewritePreset, style_request: Option<&str>, text: &str) -> String {
    let mut prompt = format!(
        "You rewrite text for a page-styling service. Rewrite the text below {}.",
        preset.directive
    );

    match style_request {
        Some(request) if !request.trim().is_empty() => {
            prompt.push_str(&format!(" Style request: {}.", request.trim()));
        }
        _ => {}
    }

    prompt.push_str(
        " Preserve the original meaning and approximate length. \
         Respond with only the rewritten text, no preamble or commentary.",
    );
    prompt.push_str(&format!("\n\nText:\n{}", text));
    prompt
}

pub fn generation_params(preset: &RewritePreset) -> GenerationParams {
    GenerationParams {
        temperature: Some(preset.temperature),
        max_tokens: Some(MAX_OUTPUT_TOKENS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_cover_the_three_transform_themes() {
        assert_eq!(preset_for("transform_01").unwrap().temperature, 0.3);
        assert_eq!(preset_for("transform_02").unwrap().temperature, 0.6);
        assert_eq!(preset_for("transform_03").unwrap().temperature, 0.9);
    }

    #[test]
    fn duck_and_unknown_themes_have_no_preset() {
        assert!(preset_for("duck_02").is_none());
        assert!(preset_for("duck").is_none());
        assert!(preset_for("").is_none());
    }

    #[test]
    fn prompt_includes_directive_request_and_text() {
        let preset = preset_for("transform_02").unwrap();
        let prompt = build_prompt(preset, Some("make it sound like a pirate"), "Hello world");

        assert!(prompt.contains("reworking the phrasing"));
        assert!(prompt.contains("Style request: make it sound like a pirate."));
        assert!(prompt.ends_with("Text:\nHello world"));
    }

    #[test]
    fn prompt_omits_style_clause_when_request_is_blank() {
        let preset = preset_for("transform_01").unwrap();
        let prompt = build_prompt(preset, Some("   "), "Hello world");
        assert!(!prompt.contains("Style request"));

        let prompt = build_prompt(preset, None, "Hello world");
        assert!(!prompt.contains("Style request"));
    }
}
