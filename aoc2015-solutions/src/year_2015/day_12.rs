use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::Value;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 12, tags = ["json", "recursion"])]
pub struct Solver;

/// Sum every number in the document, skipping objects `skip` rejects.
fn sum_numbers(value: &Value, skip: &impl Fn(&serde_json::Map<String, Value>) -> bool) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::Array(items) => items.iter().map(|item| sum_numbers(item, skip)).sum(),
        Value::Object(fields) if skip(fields) => 0,
        Value::Object(fields) => fields.values().map(|field| sum_numbers(field, skip)).sum(),
        Value::Null | Value::Bool(_) | Value::String(_) => 0,
    }
}

fn is_red(fields: &serde_json::Map<String, Value>) -> bool {
    fields.values().any(|value| value.as_str() == Some("red"))
}

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        serde_json::from_str(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &|_| false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &is_red).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "JSAbacusFramework.io";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The sum of all numbers in the document is {0}\n\
         The sum using the correct numbers in the document is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("[1,2,3]", &[Answer("6"), Answer("6")]),
        Fixture::new(r#"{"a":2,"b":4}"#, &[Answer("6"), Answer("6")]),
        Fixture::new("[[[3]]]", &[Answer("3"), Answer("3")]),
        Fixture::new(r#"{"a":{"b":4},"c":-1}"#, &[Answer("3"), Answer("3")]),
        Fixture::new(r#"{"a":[-1,1]}"#, &[Answer("0"), Answer("0")]),
        Fixture::new(r#"[-1,{"a":1}]"#, &[Answer("0"), Answer("0")]),
        Fixture::new("[]", &[Answer("0"), Answer("0")]),
        Fixture::new("{}", &[Answer("0"), Answer("0")]),
        Fixture::new(r#"[1,{"c":"red","b":2},3]"#, &[Answer("6"), Answer("4")]),
        Fixture::new(r#"{"d":"red","e":[1,2,3,4],"f":5}"#, &[Answer("15"), Answer("0")]),
        Fixture::new(r#"[1,"red",5]"#, &[Answer("6"), Answer("6")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc2015_solver::Solver as _;

    #[test]
    fn red_key_does_not_spoil_an_object() {
        let mut shared = Solver::parse(r#"{"red":1,"b":{"x":"red","y":5}}"#).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(Solver::parse("[1,2"), Err(ParseError::InvalidFormat(_))));
    }
}
