//! Arithmetic problem generation.
//!
//! Every generated problem is solvable with an exact answer: divisions are only
//! produced when the divisor is non-zero and divides the dividend evenly, so the
//! floating point answer is always an integer and can be compared with `==`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::constants::{HARD_SCORE_THRESHOLD, MEDIUM_SCORE_THRESHOLD};
use crate::error::ArithmeticError;

/// The difficulty tiers selectable from the difficulty screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Addition and subtraction of operands in `0..=10`.
    Easy,
    /// All four operators, operands in `0..=10`.
    Medium,
    /// All four operators, operands in `-10..=10`.
    Hard,
    /// Open-ended runs whose problems get harder as the score grows.
    Infinite,
}

impl Difficulty {
    /// Parses a difficulty name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, ArithmeticError> {
        Difficulty::from_str(name).map_err(|_| ArithmeticError::InvalidDifficulty(name.to_string()))
    }

    pub fn is_infinite(self) -> bool {
        self == Difficulty::Infinite
    }

    /// The fixed tier used for the next problem at the given cumulative score.
    ///
    /// Fixed tiers always ask their own problems; the infinite tier steps up from easy
    /// to medium to hard as the score crosses the thresholds.
    pub fn problem_tier(self, score: u32) -> Difficulty {
        match self {
            Difficulty::Infinite if score >= HARD_SCORE_THRESHOLD => Difficulty::Hard,
            Difficulty::Infinite if score >= MEDIUM_SCORE_THRESHOLD => Difficulty::Medium,
            Difficulty::Infinite => Difficulty::Easy,
            fixed => fixed,
        }
    }

    pub fn operators(self) -> &'static [Operator] {
        match self.problem_tier(0) {
            Difficulty::Easy => &[Operator::Add, Operator::Sub],
            _ => &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
        }
    }

    pub fn operand_range(self) -> RangeInclusive<i32> {
        match self.problem_tier(0) {
            Difficulty::Hard => -10..=10,
            _ => 0..=10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    /// Evaluates `lhs op rhs`. Division by zero yields a non-finite value; the
    /// generator never constructs such a problem.
    pub fn apply(self, lhs: i32, rhs: i32) -> f64 {
        let (lhs, rhs) = (lhs as f64, rhs as f64);
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }
}

/// A generated problem and its exact answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub lhs: i32,
    pub op: Operator,
    pub rhs: i32,
    answer: f64,
}

impl Problem {
    pub fn new(lhs: i32, op: Operator, rhs: i32) -> Self {
        Self {
            lhs,
            op,
            rhs,
            answer: op.apply(lhs, rhs),
        }
    }

    pub fn answer(&self) -> f64 {
        self.answer
    }

    /// The display form, `"<lhs> <op> <rhs>"`.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Parses user input as a number. `None` means the input is not a number at all,
    /// which callers treat as "try again" rather than a wrong answer.
    pub fn parse_answer(input: &str) -> Option<f64> {
        input.trim().parse::<f64>().ok()
    }

    pub fn is_correct(&self, value: f64) -> bool {
        value == self.answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// Generates a random problem for `difficulty`.
///
/// The infinite tier passed directly generates at its starting (easy) tier; use
/// [`Difficulty::problem_tier`] to pick the tier for the current score first.
pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let tier = difficulty.problem_tier(0);
    let operators = tier.operators();
    let range = tier.operand_range();

    let op = operators[rng.random_range(0..operators.len())];
    let mut lhs = rng.random_range(range.clone());
    let mut rhs = rng.random_range(range.clone());

    if op == Operator::Div {
        loop {
            while rhs == 0 {
                rhs = rng.random_range(range.clone());
            }
            if lhs % rhs == 0 {
                break;
            }
            lhs = rng.random_range(range.clone());
            rhs = rng.random_range(range.clone());
        }
    }

    Problem::new(lhs, op, rhs)
}

/// Generates a problem for a difficulty given by name (case-insensitive).
pub fn generate_from_str<R: Rng>(rng: &mut R, difficulty: &str) -> Result<Problem, ArithmeticError> {
    Difficulty::parse(difficulty).map(|difficulty| generate(rng, difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_problem_display() {
        let problem = Problem::new(3, Operator::Add, 4);
        assert_eq!(problem.text(), "3 + 4");
        assert_eq!(problem.answer(), 7.0);

        let problem = Problem::new(-8, Operator::Div, -2);
        assert_eq!(problem.text(), "-8 / -2");
        assert_eq!(problem.answer(), 4.0);
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(Problem::parse_answer("7"), Some(7.0));
        assert_eq!(Problem::parse_answer(" -3.0 "), Some(-3.0));
        assert_eq!(Problem::parse_answer("seven"), None);
        assert_eq!(Problem::parse_answer(""), None);
    }

    #[test]
    fn test_problem_tier_thresholds() {
        assert_eq!(Difficulty::Infinite.problem_tier(0), Difficulty::Easy);
        assert_eq!(Difficulty::Infinite.problem_tier(4), Difficulty::Easy);
        assert_eq!(Difficulty::Infinite.problem_tier(5), Difficulty::Medium);
        assert_eq!(Difficulty::Infinite.problem_tier(9), Difficulty::Medium);
        assert_eq!(Difficulty::Infinite.problem_tier(10), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.problem_tier(50), Difficulty::Easy);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(generate(&mut a, Difficulty::Hard), generate(&mut b, Difficulty::Hard));
        }
    }
}
