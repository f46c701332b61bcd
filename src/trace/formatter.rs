use itertools::Itertools;

/// Formats a number the way the host UI shows it: whole values lose the
/// decimal part (`35`, not `35.0`).
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Joins an operand list for an operation step description.
pub(crate) fn fmt_operands(operands: &[f64]) -> String {
    operands.iter().map(|v| fmt_number(*v)).join(", ")
}
