//! Landing-page instruction prompt.
//!
//! The template asks for a single self-contained HTML5 document styled with
//! CDN-hosted Tailwind CSS and Font Awesome, and forbids conversational text
//! and markdown fences so the sanitizer has as little as possible to strip.

/// Literal the backend is told to start its answer with.
pub const DOCTYPE_MARKER: &str = "<!DOCTYPE html>";

/// Build the generation prompt for `topic`.
///
/// The topic is embedded verbatim. An empty topic still yields a well-formed
/// prompt; the backend simply gets less to work with.
pub fn build(topic: &str) -> String {
    format!(
        r#"[INST] You are an expert web developer. Create a single-file responsive landing page.
Topic: {topic}
Tech Stack: HTML5, Tailwind CSS (CDN), FontAwesome (CDN). No build step, no local assets.
Rules:
1. Modern, clean design.
2. Return one complete, self-contained document that starts with {DOCTYPE_MARKER}.
3. RETURN ONLY the RAW HTML code. No explanations, no conversational text, no markdown code fences.
[/INST]"#
    )
}
