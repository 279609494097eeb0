use crate::error::EvalError;

use std::fmt;
use std::str::FromStr;

/// Aggregate function applied to the values extracted for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Min,
    Max,
    Sum,
    Average,
}

type Reducer = fn(&[f64]) -> f64;

static REDUCERS: [(Function, &str, Reducer); 4] = [
    (Function::Min, "min", reduce_min),
    (Function::Max, "max", reduce_max),
    (Function::Sum, "sum", reduce_sum),
    (Function::Average, "average", reduce_average),
];

impl Function {
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Reduce `values` to a single number. Every function yields 0 for an
    /// empty slice.
    pub fn apply(self, values: &[f64]) -> f64 {
        (self.entry().2)(values)
    }

    fn entry(self) -> &'static (Function, &'static str, Reducer) {
        // REDUCERS is indexed by discriminant.
        &REDUCERS[self as usize]
    }
}

impl FromStr for Function {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REDUCERS
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|(f, _, _)| *f)
            .ok_or_else(|| EvalError::UnknownFunction(s.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn reduce_min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

fn reduce_max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

fn reduce_sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

fn reduce_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum = reduce_sum(values);
    if sum.is_finite() {
        return sum / n;
    }
    // The plain sum overflowed; scale first so the mean stays representable.
    values.iter().fold(0.0, |acc, v| acc + v / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Function; 4] = [Function::Min, Function::Max, Function::Sum, Function::Average];

    #[test]
    fn parses_known_names() {
        for f in ALL {
            assert_eq!(f.name().parse::<Function>().unwrap(), f);
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        for name in ["count", "avg", "Sum", ""] {
            let err = name.parse::<Function>().unwrap_err();
            assert!(matches!(err, EvalError::UnknownFunction(ref n) if n == name));
        }
    }

    #[test]
    fn empty_input_is_zero() {
        for f in ALL {
            assert_eq!(f.apply(&[]), 0.0, "{f}");
        }
    }

    #[test]
    fn reduces_values() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(Function::Min.apply(&values), 1.0);
        assert_eq!(Function::Max.apply(&values), 3.0);
        assert_eq!(Function::Sum.apply(&values), 6.0);
        assert_eq!(Function::Average.apply(&values), 2.0);
    }

    #[test]
    fn average_of_huge_values_does_not_overflow() {
        assert_eq!(Function::Average.apply(&[1e308, 1e308]), 1e308);
        assert_eq!(Function::Average.apply(&[-1e308, -1e308, -1e308]), -1e308);
        assert!(Function::Sum.apply(&[1e308, 1e308]).is_infinite());
    }

    #[test]
    fn handles_negative_values() {
        let values = [-4.5, 2.0, -0.5];
        assert_eq!(Function::Min.apply(&values), -4.5);
        assert_eq!(Function::Max.apply(&values), 2.0);
        assert_eq!(Function::Sum.apply(&values), -3.0);
        assert_eq!(Function::Average.apply(&values), -1.0);
    }
}
