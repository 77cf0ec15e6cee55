//! Renderer producing the non-editable HTML widget an editor would show.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::warn;

use crate::rendering::{to_latex, Render};

static WIDGET: &'static str = r#"<span class="math" contenteditable="false"><span class="lapel-result">{formula}</span></span>"#;

#[derive(Serialize)]
struct Context {
    formula: String,
}

/// Wraps the formula, as `\(…\)` TeX for a math typesetter on the page, in
/// a span the editor treats as a single atomic widget.
pub struct Html;

impl Render for Html {
    fn formula(&self, display: &str) -> String {
        let context = Context {
            formula: format!("\\({}\\)", to_latex(display)),
        };

        let mut tt = TinyTemplate::new();
        let result = tt
            .add_template("widget", WIDGET)
            .and_then(|_| tt.render("widget", &context));

        match result {
            Ok(html) => html,
            Err(error) => {
                warn!("Unable to render widget: {}", error);
                display.to_string()
            }
        }
    }
}
