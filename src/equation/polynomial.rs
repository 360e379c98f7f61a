//! the whole pipeline for one input string: split at `=`, reduce, render, classify, solve.
//!# Example
//! ```
//! use RustedPoly::equation::config::SolverConfig;
//! use RustedPoly::equation::polynomial::PolynomialEquation;
//! let equation = PolynomialEquation::parse("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0", SolverConfig::default()).unwrap();
//! assert_eq!(equation.reduced_form(), "4 * X^0 +4 * X^1 -9.3 * X^2 = 0");
//! assert_eq!(equation.degree(), 2);
//! let lines = equation.report();
//! assert_eq!(lines[0], "Reduced form: 4 * X^0 +4 * X^1 -9.3 * X^2 = 0");
//! assert_eq!(lines[1], "Polynomial degree: 2");
//! assert_eq!(lines[2], "Discriminant is strictly positive, the two solutions are:");
//! assert_eq!(lines[3], "-0.475131");
//! assert_eq!(lines[4], "0.905239");
//! ```
use crate::equation::coefficients::{CoefficientMap, accumulate};
use crate::equation::config::SolverConfig;
use crate::equation::errors::EquationError;
use crate::equation::reduced_form::{coefficient_table, reduced_form};
use crate::equation::solver::{Solution, solve};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialEquation {
    pub config: SolverConfig,
    pub coefficients: CoefficientMap,
}

/// left and right side of `left = right`; anything but exactly one `=` is rejected
pub fn split_sides(input: &str) -> Result<(&str, &str), EquationError> {
    let sides: Vec<&str> = input.split('=').collect();
    match sides.as_slice() {
        [left, right] => Ok((*left, *right)),
        _ => Err(EquationError::EquationFormat(sides.len() - 1)),
    }
}

impl PolynomialEquation {
    pub fn new(coefficients: CoefficientMap, config: SolverConfig) -> Self {
        PolynomialEquation {
            config,
            coefficients,
        }
    }

    pub fn parse(input: &str, config: SolverConfig) -> Result<Self, EquationError> {
        info!("parsing equation '{}'", input);
        let (left, right) = split_sides(input)?;
        let coefficients = accumulate(left, right, config.grammar)?;
        Ok(Self::new(coefficients, config))
    }

    pub fn reduced_form(&self) -> String {
        reduced_form(&self.coefficients, self.config.style, self.config.precision)
    }

    pub fn degree(&self) -> u64 {
        self.coefficients.degree()
    }

    pub fn solve(&self) -> Solution {
        solve(&self.coefficients, &self.config)
    }

    pub fn coefficient_table(&self) -> String {
        coefficient_table(&self.coefficients, self.config.precision)
    }

    /// `Reduced form: ...`, `Polynomial degree: ...` and the solver lines
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Reduced form: {}", self.reduced_form()),
            format!("Polynomial degree: {}", self.degree()),
        ];
        lines.extend(self.solve().lines(&self.config));
        debug!("report {:?}", lines);
        lines
    }
}

/// parse and solve in one call; errors carry the message that is printed instead of the report
pub fn solve_equation(input: &str, config: &SolverConfig) -> Result<Vec<String>, EquationError> {
    Ok(PolynomialEquation::parse(input, config.clone())?.report())
}
