use plotty_attrs::ErrorKind;
use plotty_error::{Error, ErrorKind};

#[derive(Debug, ErrorKind)]
#[error(
    message = "missing closing parenthesis",
    labels = ["this parenthesis is never closed"],
    help = "add a `)` at the end of the expression"
)]
struct Unclosed;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["here"],
    help = format!("did you mean `{}`?", suggestion)
)]
struct Unknown {
    name: String,
    suggestion: String,
}

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown variable `{}`", name),
    labels = ["here"],
    note = format!("the variables are: {}", known.join(", ")),
)]
struct UnknownName {
    name: String,
    known: Vec<String>,
}

#[derive(Debug, ErrorKind)]
#[error(message = "no spans at all")]
struct Spanless;

fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn unit_struct_report() {
    let text = render(&Error::new(vec![3..4], Unclosed), "sin(x");
    assert!(text.contains("missing closing parenthesis"));
    assert!(text.contains("this parenthesis is never closed"));
    assert!(text.contains("add a `)` at the end of the expression"));
}

#[test]
fn named_fields_in_scope() {
    let err = Error::new(vec![0..3], Unknown {
        name: "sni".to_string(),
        suggestion: "sin".to_string(),
    });
    let text = render(&err, "sni(x)");
    assert!(text.contains("unknown function `sni`"));
    assert!(text.contains("did you mean `sin`?"));
}

#[test]
fn no_spans_does_not_panic() {
    let text = render(&Error::new(vec![], Spanless), "x");
    assert!(text.contains("no spans at all"));
}

#[test]
fn note_is_rendered() {
    let err = Error::new(vec![4..5], UnknownName {
        name: "y".to_string(),
        known: vec!["x".to_string(), "a".to_string()],
    });
    let text = render(&err, "a*x+y");
    assert!(text.contains("unknown variable `y`"));
    assert!(text.contains("the variables are: x, a"));
}
