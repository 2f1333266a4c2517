use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    /// Lay out `result` exactly as [`Renderer::render`] would print it
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            for tip in &result.suggestions {
                writeln!(out, "  • {}: {}", tip.description, tip.command.cyan())?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        print!("{}", self.render_to_string(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, LocationViewModel, StatusBadge};

    fn location() -> CommandResultViewModel<LocationViewModel> {
        CommandResultViewModel::new(LocationViewModel {
            map_id: "m1".to_string(),
            latitude: 40.7,
            longitude: -74.0,
            direction: "5th Ave".to_string(),
            line: "Latitud: 40.7, Longitud: -74.0, Dirección: 5th Ave".to_string(),
        })
    }

    #[test]
    fn test_json_mode_wraps_content() {
        let out = ConsoleRenderer::new(true).render_to_string(&location()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["content"]["latitude"], 40.7);
        assert_eq!(json["content"]["direction"], "5th Ave");
        assert!(json.get("badge").is_none());
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_text_mode_prints_badge_content_and_tips() {
        let result = location()
            .with_badge(StatusBadge::info("Location"))
            .with_suggestion(Guidance::new("Try another spot", "goplanify location show"));

        let out = ConsoleRenderer::new(false).render_to_string(&result).unwrap();

        assert!(out.contains("Location"));
        assert!(out.contains("Latitud: 40.7, Longitud: -74.0, Dirección: 5th Ave\n"));
        assert!(out.contains("Try another spot"));
        assert!(out.contains("goplanify location show"));
    }
}
