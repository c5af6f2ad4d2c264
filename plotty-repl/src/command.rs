use std::fmt;

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// Set the active function from an expression.
    Set(&'a str),

    /// Set the active function from a preset.
    Preset(&'a str),

    /// List the available presets.
    Presets,

    /// Replace the active function with its derivative.
    Differentiate,

    /// Replace the active function with its antiderivative.
    Antidifferentiate,

    /// List the parameters and their values.
    Params,

    /// Set the value of a parameter.
    Param(&'a str, f64),

    /// Evaluate the active function at a point.
    Eval(f64),

    /// Sample the active function, optionally with a different number of samples.
    Sample(Option<usize>),

    /// Print the plot title.
    Title,

    /// Print the help message.
    Help,

    /// Exit.
    Quit,
}

/// The input could not be understood as a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The command name is not known.
    Unknown(String),

    /// The command was given the wrong arguments.
    Usage(&'static str),

    /// An argument is not a number.
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `:{}`, see `:help`", name),
            Self::Usage(usage) => write!(f, "usage: {}", usage),
            Self::InvalidNumber(input) => write!(f, "`{}` is not a number", input),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses a number, accepting `pi` and `-pi` as well.
fn number(input: &str) -> Result<f64, CommandError> {
    match input {
        "pi" => Ok(std::f64::consts::PI),
        "-pi" => Ok(-std::f64::consts::PI),
        _ => input.parse().map_err(|_| CommandError::InvalidNumber(input.to_string())),
    }
}

impl<'a> Command<'a> {
    /// Parses a line of input. A line that does not start with `:` sets the active function.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Set(line));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        let args = rest.split_whitespace().collect::<Vec<_>>();

        match (name, args.as_slice()) {
            ("set", _) => Ok(Self::Set(rest)),
            ("preset", [preset]) => Ok(Self::Preset(*preset)),
            ("preset", _) => Err(CommandError::Usage(":preset <name>")),
            ("presets", []) => Ok(Self::Presets),
            ("d", []) => Ok(Self::Differentiate),
            ("i", []) => Ok(Self::Antidifferentiate),
            ("params", []) => Ok(Self::Params),
            ("param", [param, value]) => Ok(Self::Param(*param, number(value)?)),
            ("param", _) => Err(CommandError::Usage(":param <name> <value>")),
            ("eval", [x]) => Ok(Self::Eval(number(x)?)),
            ("eval", _) => Err(CommandError::Usage(":eval <x>")),
            ("sample", []) => Ok(Self::Sample(None)),
            ("sample", [n]) => n.parse()
                .map(|n| Self::Sample(Some(n)))
                .map_err(|_| CommandError::InvalidNumber(n.to_string())),
            ("sample", _) => Err(CommandError::Usage(":sample [count]")),
            ("title", []) => Ok(Self::Title),
            ("help", []) => Ok(Self::Help),
            ("quit" | "q", []) => Ok(Self::Quit),
            ("presets" | "d" | "i" | "params" | "title" | "help" | "quit" | "q", _) => {
                Err(CommandError::Usage("this command takes no arguments"))
            },
            (name, _) => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn bare_expression() {
        assert_eq!(Command::parse("a*sin(k*x) + c"), Ok(Command::Set("a*sin(k*x) + c")));
        assert_eq!(Command::parse(":set  x^2 "), Ok(Command::Set("x^2")));
        assert_eq!(Command::parse(""), Ok(Command::Set("")));
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse(":preset gaussian"), Ok(Command::Preset("gaussian")));
        assert_eq!(Command::parse(":d"), Ok(Command::Differentiate));
        assert_eq!(Command::parse(" :i "), Ok(Command::Antidifferentiate));
        assert_eq!(Command::parse(":param k 2.5"), Ok(Command::Param("k", 2.5)));
        assert_eq!(Command::parse(":eval -pi"), Ok(Command::Eval(-std::f64::consts::PI)));
        assert_eq!(Command::parse(":sample"), Ok(Command::Sample(None)));
        assert_eq!(Command::parse(":sample 16"), Ok(Command::Sample(Some(16))));
        assert_eq!(Command::parse(":q"), Ok(Command::Quit));
    }

    #[test]
    fn errors() {
        assert_eq!(Command::parse(":plot"), Err(CommandError::Unknown("plot".to_string())));
        assert_eq!(Command::parse(":param k"), Err(CommandError::Usage(":param <name> <value>")));
        assert_eq!(Command::parse(":eval two"), Err(CommandError::InvalidNumber("two".to_string())));
        assert!(Command::parse(":d 2").is_err());
    }
}
