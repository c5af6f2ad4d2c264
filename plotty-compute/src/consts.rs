//! Named constants. The symbols `pi` and `E` always refer to these values, and are never treated
//! as free parameters of an expression.

/// Names of the builtin constants, paired with their value as an `f64`.
pub const CONSTANTS: [(&str, f64); 2] = [
    ("pi", std::f64::consts::PI),
    ("E", std::f64::consts::E),
];

/// Returns true if the given symbol name refers to a builtin constant.
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

/// Returns the value of the builtin constant with the given name.
pub fn constant_value(name: &str) -> Option<f64> {
    CONSTANTS.iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert!(is_constant("pi"));
        assert!(!is_constant("e"));
        assert_eq!(constant_value("E"), Some(std::f64::consts::E));
        assert_eq!(constant_value("phi"), None);
    }
}
