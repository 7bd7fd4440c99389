use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{integers, lenient_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 15, tags = ["combinatorics"])]
pub struct Solver;

const TEASPOONS: i64 = 100;
const CALORIE_TARGET: i64 = 500;

/// Capacity, durability, flavor, texture, then calories.
type Ingredient = [i64; 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BestScores {
    any: i64,
    calorie_target: Option<i64>,
}

pub struct SharedData {
    ingredients: Vec<Ingredient>,
    best: Option<BestScores>,
}

fn parse_ingredient(line: &str) -> Option<Ingredient> {
    let (_, properties) = line.split_once(':')?;
    integers::<i64>(properties).try_into().ok()
}

/// Score of a recipe and its calorie count, or `None` if either overflows.
/// Negative property totals count as zero.
fn score(ingredients: &[Ingredient], amounts: &[i64]) -> Option<(i64, i64)> {
    let total = |property: usize| -> Option<i64> {
        ingredients
            .iter()
            .zip(amounts)
            .try_fold(0i64, |sum, (ingredient, &amount)| {
                sum.checked_add(ingredient[property].checked_mul(amount)?)
            })
    };
    let product = (0..4).try_fold(1i64, |product, property| product.checked_mul(total(property)?.max(0)))?;
    Some((product, total(4)?))
}

/// Visit every way to split `remaining` teaspoons over the unfilled slots.
fn for_each_recipe(amounts: &mut [i64], filled: usize, remaining: i64, visit: &mut impl FnMut(&[i64])) {
    if filled + 1 == amounts.len() {
        amounts[filled] = remaining;
        visit(amounts);
        return;
    }
    for spoons in 0..=remaining {
        amounts[filled] = spoons;
        for_each_recipe(amounts, filled + 1, remaining - spoons, visit);
    }
}

fn best_scores(shared: &mut SharedData) -> Result<BestScores, SolveError> {
    if let Some(best) = shared.best {
        return Ok(best);
    }
    if shared.ingredients.is_empty() {
        return Err(SolveError::NoSolution("no ingredients".to_string()));
    }

    let mut best = BestScores {
        any: 0,
        calorie_target: None,
    };
    let mut overflowed = false;
    let mut amounts = vec![0; shared.ingredients.len()];
    for_each_recipe(&mut amounts, 0, TEASPOONS, &mut |recipe| {
        let Some((points, calories)) = score(&shared.ingredients, recipe) else {
            overflowed = true;
            return;
        };
        best.any = best.any.max(points);
        if calories == CALORIE_TARGET {
            best.calorie_target = Some(best.calorie_target.map_or(points, |b| b.max(points)));
        }
    });
    if overflowed {
        return Err(SolveError::SolveFailed("recipe score does not fit in 64 bits".into()));
    }

    shared.best = Some(best);
    Ok(best)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            ingredients: lenient_lines(input, parse_ingredient),
            best: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_scores(shared).map(|best| best.any.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_scores(shared)?
            .calorie_target
            .map(|points| points.to_string())
            .ok_or_else(|| SolveError::NoSolution("no recipe has exactly 500 calories".to_string()))
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Science for Hungry People";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The highest-score with these cookie ingredients has {0} points.\n\
         The highest-score cookie with 500 calories has {1} points.",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        "Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8\n\
         Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3",
        &[Answer("62842880"), Answer("57600000")],
    )];
}
