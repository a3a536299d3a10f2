use std::fmt;

use serde_json::Value;

use crate::classifier::comparison::Leaf;
use crate::error::ExpressionError;

/// Indentation used for every line inside a rule body.
pub const BODY_INDENT: &str = "    ";

/// A single boolean statement inside a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `true` (`""`, `"@"`, `[]`) or `false` (`"!"`).
    Constant(bool),
    /// A comparison leaf.
    Leaf(Leaf),
    /// `not <condition>`.
    Not(Box<Condition>),
}

impl Condition {
    /// Leaf at the bottom of any `not` chain.
    pub fn leaf(&self) -> Option<&Leaf> {
        match self {
            Condition::Constant(_) => None,
            Condition::Leaf(leaf) => Some(leaf),
            Condition::Not(inner) => inner.leaf(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Constant(value) => write!(f, "{value}"),
            Condition::Leaf(leaf) => write!(f, "{leaf}"),
            Condition::Not(inner) => write!(f, "not {inner}"),
        }
    }
}

/// One disjunctive alternative: conditions that must all hold in the same rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    conditions: Vec<Condition>,
}

impl Clause {
    fn single(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
        }
    }

    /// Conditions in body order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// One rendered statement per condition.
    pub fn lines(&self) -> Vec<String> {
        self.conditions.iter().map(ToString::to_string).collect()
    }

    /// Prefix the clause with `not`.
    ///
    /// Like a textual `not ` prefix, this binds to the first statement only.
    /// The grammar never negates a clause holding more than one condition:
    /// anything with `and` in it is split before `not` is considered.
    fn negate(mut self) -> Self {
        if let Some(first) = self.conditions.first_mut() {
            let inner = std::mem::replace(first, Condition::Constant(true));
            *first = Condition::Not(Box::new(inner));
        }
        self
    }

    /// Rule names referenced through `rule:<name>` leaves.
    pub fn referenced_rules(&self) -> impl Iterator<Item = &str> {
        self.conditions
            .iter()
            .filter_map(Condition::leaf)
            .filter_map(Leaf::referenced_rule)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                write!(f, "\n{BODY_INDENT}")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Parse a raw expression value into its disjunctive alternatives.
///
/// Strings go through the policy grammar. An empty sequence means "always
/// allowed"; every other shape is rejected.
pub fn parse_expression(value: &Value) -> Result<Vec<Clause>, ExpressionError> {
    match value {
        Value::String(text) => parse_text(text),
        Value::Array(items) if items.is_empty() => Ok(vec![Clause::single(Condition::Constant(true))]),
        Value::Array(_) => Err(ExpressionError::InvalidExpression {
            value: format!("non-empty lists are not supported: {value}"),
        }),
        other => Err(ExpressionError::InvalidExpression {
            value: other.to_string(),
        }),
    }
}

/// Parse an expression string.
///
/// Operators are found by substring search, in this order: `" and "`,
/// `" or "`, a leading `"not "`, then a `left:right` leaf. There is no
/// grouping; an expression mixing `and` with `or` is split on `and` first.
pub fn parse_text(text: &str) -> Result<Vec<Clause>, ExpressionError> {
    if text.contains(" and ") {
        let mut conditions = Vec::new();
        for operand in text.split(" and ") {
            for clause in parse_text(operand)? {
                conditions.extend(clause.conditions);
            }
        }
        return Ok(vec![Clause { conditions }]);
    }

    if text.contains(" or ") {
        let mut alternatives = Vec::new();
        for operand in text.split(" or ") {
            alternatives.extend(parse_text(operand)?);
        }
        return Ok(alternatives);
    }

    if let Some(rest) = text.strip_prefix("not ") {
        return Ok(parse_text(rest)?.into_iter().map(Clause::negate).collect());
    }

    if text.contains(':') {
        let leaf = Leaf::parse(text)?;
        return Ok(vec![Clause::single(Condition::Leaf(leaf))]);
    }

    match text {
        "!" => Ok(vec![Clause::single(Condition::Constant(false))]),
        "" | "@" => Ok(vec![Clause::single(Condition::Constant(true))]),
        _ => Err(ExpressionError::InvalidExpression {
            value: text.to_string(),
        }),
    }
}
