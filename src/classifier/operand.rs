use std::fmt;

/// One side of a comparison, classified by its literal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// `True` or `False`.
    Boolean(bool),
    /// A signed 64-bit integer in decimal, octal (`0` prefix) or hex (`0x`), kept as written.
    Integer(String),
    /// A single-quoted string; holds the text between the quotes.
    Quoted(String),
    /// Any other token: a reference to a credentials attribute.
    Attribute(String),
}

impl Operand {
    /// Classify a raw token. Every token gets exactly one classification.
    pub fn classify(token: &str) -> Self {
        match token {
            "True" => return Operand::Boolean(true),
            "False" => return Operand::Boolean(false),
            _ => {}
        }
        if is_integer(token) {
            return Operand::Integer(token.to_string());
        }
        if let Some(inner) = strip_single_quotes(token) {
            return Operand::Quoted(inner.to_string());
        }
        Operand::Attribute(token.to_string())
    }

    /// Whether the token matched a literal type.
    pub fn is_literal(&self) -> bool {
        !matches!(self, Operand::Attribute(_))
    }

    /// The rendered form: a Rego literal, or the bare token when unclassified.
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Boolean(value) => write!(f, "{value}"),
            Operand::Integer(text) | Operand::Attribute(text) => f.write_str(text),
            Operand::Quoted(text) => f.write_str(&rego_string(text)),
        }
    }
}

/// Double-quoted Rego string literal. Rego strings share JSON escaping.
pub fn rego_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

fn strip_single_quotes(token: &str) -> Option<&str> {
    if token.len() < 2 {
        return None;
    }
    token.strip_prefix('\'')?.strip_suffix('\'')
}

fn is_integer(token: &str) -> bool {
    let (sign, unsigned) = match token.as_bytes().first() {
        Some(b'+' | b'-') => token.split_at(1),
        _ => ("", token),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix accepts its own sign; a second one must not slip through.
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return false;
    }
    i64::from_str_radix(&format!("{sign}{digits}"), radix).is_ok()
}
