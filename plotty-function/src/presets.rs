//! Named function templates that can be set by name instead of typing out the expression.

/// A table of `(name, expression)` pairs.
pub type PresetTable = &'static [(&'static str, &'static str)];

/// The preset functions available by default.
pub const PRESETS: PresetTable = &[
    ("sin", "a*sin(k*(x - phi)) + c"),
    ("cos", "a*cos(k*(x - phi)) + c"),
    ("tan", "a*tan(k*(x - phi)) + c"),
    ("arcsin", "a*arcsin(k*(x - phi)) + c"),
    ("arccos", "a*arccos(k*(x - phi)) + c"),
    ("arctan", "a*arctan(k*(x - phi)) + c"),
    ("sinh", "a*sinh(k*(x - b)) + c"),
    ("cosh", "a*cosh(k*(x - b)) + c"),
    ("tanh", "a*tanh(k*x) + c"),
    ("exp", "c1*exp(-x*k1) + c2*exp(x*k2) + c"),
    ("log", "a*log(k*(x - b)) + c"),
    ("power", "a**x + c"),
    ("quadratic", "a*x**2 + b*x + c"),
    ("gaussian", "a*exp(-((x-u)/sigma)**2/2)/(sqrt(pi*sigma**2))"),
    ("wavepacket", "a*sin(2*pi*k*x)*exp(-((x-mu)/sigma)**2/2)/(sqrt(pi*sigma**2))"),
];

/// Returns the expression of the preset with the given name.
pub fn find(table: PresetTable, name: &str) -> Option<&'static str> {
    table.iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, expr)| *expr)
}

#[cfg(test)]
mod tests {
    use crate::{function::SymbolicFunction, validator::is_defined_at};
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(find(PRESETS, "tanh"), Some("a*tanh(k*x) + c"));
        assert_eq!(find(PRESETS, "sine"), None);
    }

    #[test]
    fn every_preset_is_usable() {
        for (name, source) in PRESETS {
            let f = SymbolicFunction::new(source, "x")
                .unwrap_or_else(|err| panic!("preset `{}` failed: {}", name, err));
            let params = f.default_values()
                .into_iter()
                .map(|(_, value)| value)
                .collect::<Vec<_>>();
            assert!(is_defined_at(&f, PI, &params), "preset `{}` is undefined at the probe", name);
        }
    }
}
