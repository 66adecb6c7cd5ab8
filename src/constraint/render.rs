use alloc::string::{String, ToString};

use crate::constraint::ast::{Atom, Constraint};
use crate::constraint::parser::render_wildcard;

/// Render a parsed [`Constraint`] back into its canonical textual form.
///
/// The output may not byte-for-byte match whatever the caller originally parsed
/// (e.g. `=1.2.3` round-trips as `1.2.3`), but it always re-parses to an equal
/// [`Constraint`].
pub(crate) fn render(constraint: &Constraint) -> String {
    join(
        constraint.0.iter().map(|conjunction| render_conjunction(conjunction)),
        " || ",
    )
}

fn render_conjunction(conjunction: &[Atom]) -> String {
    join(conjunction.iter().map(render_atom), " ")
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.fold(String::new(), |mut joined, part| {
        if !joined.is_empty() {
            joined.push_str(separator);
        }

        joined.push_str(&part);
        joined
    })
}

fn render_atom(atom: &Atom) -> String {
    match atom {
        Atom::Lt(v) => alloc::format!("<{v}"),
        Atom::Le(v) => alloc::format!("<={v}"),
        Atom::Eq(v) => v.to_string(),
        Atom::Ge(v) => alloc::format!(">={v}"),
        Atom::Gt(v) => alloc::format!(">{v}"),
        Atom::Tilde(v) => alloc::format!("~{v}"),
        Atom::Caret(v) => alloc::format!("^{v}"),
        Atom::Hyphen(lower, upper) => alloc::format!("{lower} - {upper}"),
        Atom::Wildcard(spec) => render_wildcard(spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::parser::parse;

    #[test]
    fn renders_operator_atoms() {
        let constraint = parse(">=1.2.3 <2.0.0").unwrap();

        assert_eq!(render(&constraint), ">=1.2.3 <2.0.0");
    }

    #[test]
    fn bare_version_renders_without_eq_prefix() {
        let constraint = parse("=1.2.3").unwrap();

        assert_eq!(render(&constraint), "1.2.3");
    }

    #[test]
    fn renders_disjunction_with_spaced_pipes() {
        let constraint = parse("1.0.0||2.0.0").unwrap();

        assert_eq!(render(&constraint), "1.0.0 || 2.0.0");
    }

    #[test]
    fn renders_wildcard_canonically() {
        assert_eq!(render(&parse("1.2.X").unwrap()), "1.2.x");
        assert_eq!(render(&parse("1.2.*").unwrap()), "1.2.x");
    }

    #[test]
    fn renders_operator_with_space_flush_against_operand() {
        let constraint = parse("> 1.2.3").unwrap();

        assert_eq!(render(&constraint), ">1.2.3");
    }

    #[test]
    fn round_trips_through_parse() {
        let constraint = parse("^1.2.3 || ~2.0.0").unwrap();
        let rendered = render(&constraint);

        assert_eq!(parse(&rendered).unwrap(), constraint);
    }
}
