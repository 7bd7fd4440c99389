use aoc2015_solver::{
    AocParser, AocSolver, AutoRegisterSolver, Expected, Fixture, OutputTemplate, ParseError,
    PartSolver, Puzzle, RegistryBuilder, SolveError, SolverError, register_solver,
};

/// Sum and product of whitespace separated integers.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 4, tags = ["test", "arithmetic"])]
struct Arithmetic;

impl AocParser for Arithmetic {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
            .collect()
    }
}

impl PartSolver<1> for Arithmetic {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Arithmetic {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

impl Puzzle for Arithmetic {
    const TITLE: &'static str = "Arithmetic";
    const OUTPUT: OutputTemplate = OutputTemplate::new("sum {0}, product {1}");
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("2 3 4", &[Expected::Answer("9"), Expected::Answer("24")]),
        Fixture::new("1 1", &[Expected::Answer("2"), Expected::Answer("1")]),
    ];
}

/// Registered without tags.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(day = 9)]
struct Length;

impl AocParser for Length {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Length {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl Puzzle for Length {
    const TITLE: &'static str = "Length";
    const OUTPUT: OutputTemplate = OutputTemplate::new("{0} bytes");
}

#[test]
fn plugins_register_automatically() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins should not collide")
        .build();

    assert_eq!(registry.len(), 2);
    let solution = registry.solve(4, "5 6 7").unwrap();
    assert_eq!(solution.answers(), ["18", "210"]);
    assert_eq!(registry.solve(9, "abc").unwrap().answers(), ["3"]);
}

#[test]
fn plugin_metadata_comes_from_puzzle() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let info = registry.info(4).unwrap();
    assert_eq!(info.title, "Arithmetic");
    assert_eq!(info.parts, 2);
    assert_eq!(info.heading(), "Advent of Code 2015 Day 4: Arithmetic");
    assert_eq!(info.fixtures.len(), 2);
}

#[test]
fn tags_filter_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"arithmetic"))
        .unwrap()
        .build();

    assert!(registry.info(4).is_ok());
    assert!(matches!(registry.info(9), Err(SolverError::NotFound(9))));
}

#[test]
fn registered_fixtures_pass() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let reports = registry.run_fixtures(4).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.passed()), "{reports:?}");
    assert_eq!(reports[0].actual, "sum 9, product 24");
    assert_eq!(reports[1].actual, "sum 2, product 1");
}

#[test]
fn manual_registration_alongside_derive() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Arithmetic, 20);
    let registry = builder.build();

    let mut solver = registry.create_solver(20, "2 5").unwrap();
    assert_eq!(solver.day(), 20);
    assert_eq!(solver.solve(2).unwrap().answer, "10");
}
