//! Per-puzzle output templates

/// Text rendered in place of an answer when a part has no solution.
pub const NO_SOLUTION: &str = "none";

/// A fixed output template with positional `{0}`, `{1}`, ... placeholders.
///
/// ```
/// use aoc2015_solver::OutputTemplate;
///
/// const OUTPUT: OutputTemplate = OutputTemplate::new("Floor {0}, basement at {1}.");
/// assert_eq!(OUTPUT.render(&["3", "1"]), "Floor 3, basement at 1.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTemplate(&'static str);

impl OutputTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// The raw template text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute each `{i}` with `answers[i]`.
    ///
    /// Placeholders without a matching answer are left as written.
    pub fn render<S: AsRef<str>>(&self, answers: &[S]) -> String {
        let mut out = String::with_capacity(self.0.len() + 16);
        let mut rest = self.0;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                after[..close]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| answers.get(i))
                    .map(|answer| (answer.as_ref(), close))
            });

            match placeholder {
                Some((answer, close)) => {
                    out.push_str(answer);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
