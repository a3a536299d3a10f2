use std::fmt;

use crate::classifier::operand::{rego_string, Operand};
use crate::error::{ExpressionError, OperandSide};

/// A single `left:right` check, the leaf of every policy expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// `rule:<name>`: defer to the alias block called `name`.
    RuleReference(String),
    /// `role:<name>`: the caller holds the role `name`.
    Role(String),
    /// `<left>:%(<attribute>)s`: compare against an attribute of the target.
    TargetComparison {
        /// Literal or credentials attribute on the left.
        left: Operand,
        /// Attribute name inside the `%(...)s` placeholder.
        attribute: String,
    },
    /// `<left>:<right>` between constants and credentials attributes.
    Comparison {
        /// Left operand.
        left: Operand,
        /// Right operand.
        right: Operand,
    },
}

impl Leaf {
    /// Parse a leaf, splitting on the first colon.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let (left, right) = text.split_once(':').unwrap_or((text, ""));

        if left.is_empty() {
            return Err(malformed(text, OperandSide::Left));
        }
        if right.is_empty() {
            return Err(malformed(text, OperandSide::Right));
        }

        match left {
            "rule" => return Ok(Leaf::RuleReference(right.to_string())),
            "role" => return Ok(Leaf::Role(right.to_string())),
            _ => {}
        }

        if let Some(placeholder) = right.strip_prefix("%(") {
            let attribute = placeholder.strip_suffix(")s").ok_or_else(|| {
                ExpressionError::UnmatchedTargetReference {
                    expression: text.to_string(),
                }
            })?;
            return Ok(Leaf::TargetComparison {
                left: Operand::classify(left),
                attribute: attribute.to_string(),
            });
        }

        Ok(Leaf::Comparison {
            left: Operand::classify(left),
            right: Operand::classify(right),
        })
    }

    /// Name of the alias this leaf defers to, if it is a rule reference.
    pub fn referenced_rule(&self) -> Option<&str> {
        match self {
            Leaf::RuleReference(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::RuleReference(name) => f.write_str(name),
            Leaf::Role(role) => write!(f, "credentials.roles[_] = {}", rego_string(role)),
            Leaf::TargetComparison { left, attribute } => {
                if left.is_literal() {
                    write!(f, "{left} = target.{attribute}")
                } else {
                    write!(f, "credentials.{left} = target.{attribute}")
                }
            }
            Leaf::Comparison { left, right } => match (left.is_literal(), right.is_literal()) {
                (true, true) => write!(f, "{left} = {right}"),
                (false, true) => write!(f, "credentials.{left} = {right}"),
                (true, false) => write!(f, "credentials.{right} = {left}"),
                // Two bare words read as "attribute equals this tag".
                (false, false) => write!(f, "credentials.{left} = {}", rego_string(&right.rendered())),
            },
        }
    }
}

fn malformed(text: &str, missing: OperandSide) -> ExpressionError {
    ExpressionError::MalformedComparison {
        expression: text.to_string(),
        missing,
    }
}
