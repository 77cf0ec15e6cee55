//! SI magnitude prefixes, both for displaying results compactly and for
//! reading prefixed literals such as `5k` in user input.

use std::borrow::Cow;

/// Prefix, power of ten, and the magnitude at which it starts to apply,
/// largest first. The limits are literals so that comparisons against
/// parsed input like `0.001` are exact.
const PREFIXES: [(&str, i32, f64); 21] = [
    ("Q", 30, 1e30),
    ("R", 27, 1e27),
    ("Y", 24, 1e24),
    ("Z", 21, 1e21),
    ("E", 18, 1e18),
    ("P", 15, 1e15),
    ("T", 12, 1e12),
    ("G", 9, 1e9),
    ("M", 6, 1e6),
    ("k", 3, 1e3),
    ("", 0, 1.0),
    ("m", -3, 1e-3),
    ("μ", -6, 1e-6),
    ("n", -9, 1e-9),
    ("p", -12, 1e-12),
    ("f", -15, 1e-15),
    ("a", -18, 1e-18),
    ("z", -21, 1e-21),
    ("y", -24, 1e-24),
    ("r", -27, 1e-27),
    ("q", -30, 1e-30),
];

/// Scale a value by the largest SI prefix not exceeding it and append the
/// prefix letter, so 12500 becomes `12.5k`. Zero is `0`; values smaller than
/// the smallest prefix are printed as they are.
pub fn format_si(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    for (prefix, exponent, limit) in PREFIXES {
        if magnitude >= limit {
            let scaled = shift(magnitude, -exponent);
            return format!("{}{}{}", sign, trim_decimals(scaled, precision), prefix);
        }
    }

    format!("{}{}", sign, magnitude)
}

/// As [`format_si`], for text: anything that isn't a plain number is
/// returned unchanged.
pub fn format_si_text(text: &str, precision: usize) -> Cow<'_, str> {
    let re = regex!(r"^[-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$");

    if !re.is_match(text) {
        return Cow::Borrowed(text);
    }
    match text.parse::<f64>() {
        Ok(value) => Cow::Owned(format_si(value, precision)),
        Err(_) => Cow::Borrowed(text),
    }
}

/// Rewrite literals carrying an SI prefix into plain numbers, `5k` into
/// `5000` and `2.5m` into `0.0025`. `u` is accepted for `μ`. A prefix letter
/// followed by more letters is part of a word, not a prefix: `2min` is left
/// alone.
pub fn expand_prefixes(text: &str) -> Cow<'_, str> {
    let re = regex!(r"\b([0-9]+(?:\.[0-9]+)?)([QRYZEPTGMkmμunpfazyrq])\b");

    re.replace_all(text, |cap: &::regex::Captures| {
        let number = &cap[1];
        let prefix = match &cap[2] {
            "u" => "μ",
            other => other,
        };

        let exponent = PREFIXES
            .iter()
            .find(|(symbol, _, _)| *symbol == prefix)
            .map(|(_, exponent, _)| *exponent);

        match (number.parse::<f64>(), exponent) {
            (Ok(value), Some(exponent)) => shift(value, exponent).to_string(),
            _ => cap[0].to_string(),
        }
    })
}

// Multiply by 10^exponent, dividing for negative exponents so that results
// such as 2.5 / 1000 round to the nearest representable value.
fn shift(value: f64, exponent: i32) -> f64 {
    let power = 10f64.powi(exponent.abs());
    if exponent >= 0 {
        value * power
    } else {
        value / power
    }
}

fn trim_decimals(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if text.contains('.') {
        text.trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        text
    }
}
