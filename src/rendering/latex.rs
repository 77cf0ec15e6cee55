use crate::evaluator::ARROW;
use crate::rendering::Render;

/// Rewrite a display string in TeX notation. Only the handful of symbols
/// the evaluator emits are translated; the rest passes through as is.
pub fn to_latex(display: &str) -> String {
    display
        .replace(ARROW, "\\Rightarrow")
        .replace(":=", "\\coloneqq")
        .replace('*', "\\cdot ")
}

/// Present display strings as inline TeX math, `$…$`.
pub struct Latex;

impl Render for Latex {
    fn formula(&self, display: &str) -> String {
        format!("${}$", to_latex(display))
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn symbols_translated() {
        assert_eq!(to_latex("pi ⇒ 3.14159"), "pi \\Rightarrow 3.14159");
        assert_eq!(to_latex("x := 5"), "x \\coloneqq 5");
        assert_eq!(to_latex("2*x ⇒ 10"), "2\\cdot x \\Rightarrow 10");
        assert_eq!(to_latex("f(x) = x^2"), "f(x) = x^2");
    }

    #[test]
    fn wrapped_as_inline_math() {
        assert_eq!(
            Latex.formula("x^2-4=0 ⇒ x = 2.00000"),
            "$x^2-4=0 \\Rightarrow x = 2.00000$"
        );
    }
}
