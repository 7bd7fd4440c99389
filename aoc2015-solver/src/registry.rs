//! Day registry: maps a puzzle number to its solver factory

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::fixture::{Fixture, FixtureReport};
use crate::instance::{DynSolver, Solution, SolverInstance};
use crate::puzzle::Puzzle;
use crate::template::OutputTemplate;
use tracing::{debug, warn};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// The puzzle year every solver in this registry belongs to
pub const YEAR: u16 = 2015;
/// Days in the calendar (1-25)
pub const DAYS: usize = 25;

#[inline]
fn calc_index(day: u8) -> Option<usize> {
    (1..=DAYS as u8).contains(&day).then(|| usize::from(day - 1))
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Everything the registry knows about a day besides how to build it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub day: u8,
    pub title: &'static str,
    pub parts: u8,
    pub output: OutputTemplate,
    pub fixtures: &'static [Fixture],
}

impl PuzzleInfo {
    /// Metadata for puzzle type `P` on `day`
    pub fn of<P: Puzzle>(day: u8) -> Self {
        Self {
            day,
            title: P::TITLE,
            parts: P::PARTS,
            output: P::OUTPUT,
            fixtures: P::FIXTURES,
        }
    }

    /// `Advent of Code 2015 Day N: Title`
    pub fn heading(&self) -> String {
        format!("Advent of Code {YEAR} Day {}: {}", self.day, self.title)
    }
}

struct SolverEntry {
    factory: SolverFactory,
    info: PuzzleInfo,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// # Example
///
/// ```no_run
/// # use aoc2015_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with one slot per day
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a factory for `info.day`
    ///
    /// # Returns
    /// * `Err(RegistrationError::InvalidDay)` - day outside 1..=25
    /// * `Err(RegistrationError::DuplicateSolver)` - the day already has a solver
    pub fn register<F>(mut self, info: PuzzleInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(info.day).ok_or(RegistrationError::InvalidDay(info.day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(info.day));
        }

        debug!(day = info.day, title = info.title, "registered solver");
        self.entries[index] = Some(SolverEntry {
            factory: Box::new(factory),
            info,
        });
        Ok(self)
    }

    /// Register every solver submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the solver plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc2015_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from day to solver factory
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    fn entry(&self, day: u8) -> Result<&SolverEntry, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;
        self.entries[index].as_ref().ok_or(SolverError::NotFound(day))
    }

    /// Metadata for a registered day
    pub fn info(&self, day: u8) -> Result<&PuzzleInfo, SolverError> {
        self.entry(day).map(|entry| &entry.info)
    }

    /// Metadata for every registered day, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = &PuzzleInfo> + '_ {
        self.entries.iter().flatten().map(|entry| &entry.info)
    }

    /// Number of registered days
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver registered for `day`
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.entry(day)?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Parse once and solve every part of `day`
    pub fn solve(&self, day: u8, input: &str) -> Result<Solution, SolverError> {
        let mut solver = self.create_solver(day, input)?;
        Ok(Solution::from_solver(solver.as_mut()))
    }

    /// Run each built-in fixture of `day` and compare rendered output
    ///
    /// A failing fixture is reported, never propagated; remaining fixtures still run.
    pub fn run_fixtures(&self, day: u8) -> Result<Vec<FixtureReport>, SolverError> {
        let info = *self.info(day)?;

        let reports = info
            .fixtures
            .iter()
            .map(|fixture| {
                let actual = match self.create_solver(day, fixture.input) {
                    Ok(mut solver) => Solution::from_solver(solver.as_mut()).render(&info.output),
                    Err(e) => e.to_string(),
                };
                let report = FixtureReport {
                    input: fixture.input,
                    expected: fixture.expected_output(&info.output),
                    actual,
                };
                if report.passed() {
                    debug!(day, input = fixture.input, "fixture passed");
                } else {
                    warn!(day, input = fixture.input, "fixture failed");
                }
                report
            })
            .collect();

        Ok(reports)
    }
}

/// Type-erased self-registration, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Every [`Puzzle`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for `day`
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Puzzle + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(PuzzleInfo::of::<S>(day), move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        })
    }
}

/// A solver submitted for automatic registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form tags for filtering (e.g. "simulation", "search")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a [`Puzzle`] type by hand
///
/// Panics if the day is invalid or already taken.
///
/// ```
/// use aoc2015_solver::{
///     AocParser, OutputTemplate, ParseError, Puzzle, RegistryBuilder, SolveError, Solver,
///     register_solver,
/// };
///
/// struct Count;
///
/// impl AocParser for Count {
///     type SharedData<'a> = &'a str;
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Count {
///     const PARTS: u8 = 1;
///     fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(shared.lines().count().to_string())
///     }
/// }
///
/// impl Puzzle for Count {
///     const TITLE: &'static str = "Count";
///     const OUTPUT: OutputTemplate = OutputTemplate::new("{0} lines");
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Count, 3);
/// let registry = builder.build();
///
/// let solution = registry.solve(3, "a\nb").unwrap();
/// assert_eq!(solution.render(&Count::OUTPUT), "2 lines");
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $day:expr) => {
        $builder = $builder
            .register($crate::PuzzleInfo::of::<$solver>($day), |input: &str| {
                Ok(Box::new($crate::SolverInstance::<$solver>::new($day, input)?))
            })
            .expect("Failed to register solver");
    };
}
