use aoc2015_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

/// Walks a route of `^v<>` moves; part 2 reuses the visited count cached by part 1.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Route;

#[derive(Debug)]
struct SharedData {
    moves: Vec<(i32, i32)>,
    visited: Option<usize>,
}

impl AocParser for Route {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let moves = input
            .chars()
            .map(|c| match c {
                '^' => Ok((0, 1)),
                'v' => Ok((0, -1)),
                '<' => Ok((-1, 0)),
                '>' => Ok((1, 0)),
                other => Err(ParseError::InvalidFormat(format!("unexpected move {other:?}"))),
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            moves,
            visited: None,
        })
    }
}

fn visited(shared: &mut SharedData) -> usize {
    *shared.visited.get_or_insert_with(|| {
        let mut pos = (0, 0);
        let mut seen = std::collections::HashSet::from([pos]);
        for (dx, dy) in &shared.moves {
            pos = (pos.0 + dx, pos.1 + dy);
            seen.insert(pos);
        }
        seen.len()
    })
}

impl PartSolver<1> for Route {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared).to_string())
    }
}

impl PartSolver<2> for Route {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.moves.len() + 1 - visited(shared)).to_string())
    }
}

impl PartSolver<3> for Route {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.moves.is_empty() {
            return Err(SolveError::NoSolution("no moves to replay".into()));
        }
        Ok(shared.moves.len().to_string())
    }
}

#[test]
fn parts_dispatch_to_part_solvers() {
    let mut shared = Route::parse("^>v<").unwrap();
    assert_eq!(Route::solve_part(&mut shared, 1).unwrap(), "4");
    assert_eq!(Route::solve_part(&mut shared, 2).unwrap(), "1");
    assert_eq!(Route::solve_part(&mut shared, 3).unwrap(), "4");
}

#[test]
fn part_one_caches_for_part_two() {
    let mut shared = Route::parse("^v^v").unwrap();
    assert!(shared.visited.is_none());
    Route::solve_part(&mut shared, 1).unwrap();
    assert_eq!(shared.visited, Some(2));
}

#[test]
fn part_two_runs_alone() {
    let mut shared = Route::parse("^v^v").unwrap();
    assert_eq!(Route::solve_part(&mut shared, 2).unwrap(), "3");
}

#[test]
fn part_errors_pass_through() {
    let mut shared = Route::parse("").unwrap();
    assert!(matches!(
        Route::solve_part(&mut shared, 3),
        Err(SolveError::NoSolution(_))
    ));
}

#[test]
fn parts_constant_matches_max_parts() {
    assert_eq!(<Route as Solver>::PARTS, 3);
}

#[test]
fn parts_beyond_max_are_not_implemented() {
    let mut shared = Route::parse(">").unwrap();
    assert!(matches!(
        Route::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        Route::solve_part_checked_range(&mut shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn parse_errors_surface() {
    assert!(matches!(Route::parse("^x"), Err(ParseError::InvalidFormat(_))));
}
