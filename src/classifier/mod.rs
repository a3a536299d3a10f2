/// `left:right` leaves: rule references, role checks, target and constant comparisons.
pub mod comparison;
/// Literal classification of comparison operands.
pub mod operand;
