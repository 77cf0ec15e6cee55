//! Renderer for showing results in a terminal

use owo_colors::OwoColorize;

use crate::evaluator::ARROW;
use crate::rendering::Render;

/// Embellish display strings with ANSI escapes: the question in one colour,
/// the answer after the arrow in another.
pub struct Terminal;

impl Render for Terminal {
    fn formula(&self, display: &str) -> String {
        match display.split_once(ARROW) {
            Some((question, answer)) => format!(
                "{}{}{}",
                question // #729fcf (light blue)
                    .color(owo_colors::Rgb(0x72, 0x9f, 0xcf)),
                ARROW.bright_white(),
                answer // #4e9a06 (green) bold
                    .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                    .bold()
            ),
            None => display // #ad7fa8 (purple)
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .to_string(),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn answer_highlighted() {
        let result = Terminal.formula("pi ⇒ 3.14159");
        assert!(result.contains("pi "));
        assert!(result.contains("⇒"));
        assert!(result.contains(" 3.14159"));
        assert!(result.contains("\x1b["));
        assert_ne!(result, "pi ⇒ 3.14159");
    }

    #[test]
    fn declarations_coloured_whole() {
        let result = Terminal.formula("x := 5");
        assert!(result.contains("x := 5"));
        assert!(result.starts_with("\x1b["));
    }
}
