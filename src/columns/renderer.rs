//! Item rendering collaborator
//!
//! The engine never assumes a template technology; it only consumes the
//! [`ItemRenderer`] contract. [`PlaceholderRenderer`] is a minimal bundled
//! implementation that substitutes item fields into the template text,
//! enough for the companion CLI and for tests.

use crate::config::Configuration;
use crate::error::Result;
use crate::item::Item;

/// Renders one item through a template reference
pub trait ItemRenderer: Send + Sync {
    /// Render the item; errors are renderer-specific and propagate unchanged
    ///
    /// # Errors
    ///
    /// Returns whatever error the rendering collaborator raises.
    fn render_item(&self, item: &Item, template: &str) -> Result<String>;
}

/// Renderer substituting `{id}`, `{name}`, `{value}` and `{parent_id}`
/// placeholders in the template text itself
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl ItemRenderer for PlaceholderRenderer {
    fn render_item(&self, item: &Item, template: &str) -> Result<String> {
        Ok(template
            .replace("{id}", &item.id)
            .replace("{name}", &item.name)
            .replace("{value}", &item.value)
            .replace("{parent_id}", item.parent_id.as_deref().unwrap_or("")))
    }
}

/// Render the preview markup for an item
///
/// Returns the rendered item template when the configuration carries one
/// and preview is enabled, and an empty string otherwise. Authorization is
/// the caller's responsibility.
///
/// # Errors
///
/// Propagates renderer errors unchanged.
pub fn render_preview(
    config: &Configuration,
    renderer: &dyn ItemRenderer,
    item: &Item,
) -> Result<String> {
    match config.template() {
        Some(template) if config.has_preview() => renderer.render_item(item, template),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;

    #[test]
    fn test_placeholder_renderer_substitutes_fields() {
        let item = Item::new("42", "Answer", "a-42").with_parent("7");
        let rendered = PlaceholderRenderer
            .render_item(&item, "{name} [{id}/{value}] under {parent_id}")
            .unwrap();
        assert_eq!(rendered, "Answer [42/a-42] under 7");
    }

    #[test]
    fn test_render_preview_with_template_and_preview_enabled() {
        let config = Configuration::new("pages", "Pages")
            .with_template("preview of {name}")
            .with_preview(true);
        let renderer = RecordingRenderer::returning("rendered item");
        let item = Item::new("1", "One", "1");

        let rendered = render_preview(&config, &renderer, &item).unwrap();
        assert_eq!(rendered, "rendered item");
        assert_eq!(renderer.calls(), vec![("1".to_string(), "preview of {name}".to_string())]);
    }

    #[test]
    fn test_render_preview_without_preview_flag_is_empty() {
        let config = Configuration::new("pages", "Pages").with_template("t");
        let renderer = RecordingRenderer::returning("rendered item");
        let item = Item::new("1", "One", "1");

        assert_eq!(render_preview(&config, &renderer, &item).unwrap(), "");
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_render_preview_without_template_is_empty() {
        let config = Configuration::new("pages", "Pages").with_preview(true);
        let renderer = RecordingRenderer::returning("rendered item");
        let item = Item::new("1", "One", "1");

        assert_eq!(render_preview(&config, &renderer, &item).unwrap(), "");
        assert!(renderer.calls().is_empty());
    }
}
