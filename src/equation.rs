/// # Polynomial equations
/// a module
/// 1) turns a String equation like `5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0` into a map exponent -> coefficient
/// 2) turns that map into the reduced form `4 * X^0 +4 * X^1 -9.3 * X^2 = 0`
/// 3) solves the reduced equation for degree 0, 1 and 2 (real and complex roots)
///# Example
/// ```
/// use RustedPoly::equation::config::SolverConfig;
/// use RustedPoly::equation::polynomial::solve_equation;
/// let lines = solve_equation("1 * X^2 + 2 * X^1 + 5 = 0", &SolverConfig::default()).unwrap();
/// assert_eq!(lines, vec![
///     "Reduced form: 5 * X^0 +2 * X^1 +1 * X^2 = 0",
///     "Polynomial degree: 2",
///     "Discriminant is strictly negative, the two complex solutions are:",
///     "-1 + 2i",
///     "-1 - 2i",
/// ]);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod polynomial;
/// policies (term grammar, discriminant zero test, spacing) and their TOML loading
pub mod config;
/// error types of the pipeline
pub mod errors;
/// one side of an equation -> signed term strings
pub mod tokenizer;
/// one term string -> (coefficient, exponent)
pub mod term_parser;
/// both sides -> exponent/coefficient map of `left - right = 0`
pub mod coefficients;
/// map -> `... = 0` string, `%g` number formatting
pub mod reduced_form;
/// degree dispatch and closed-form roots
pub mod solver;
///______________________________________________________________________________________________________________________________________________
mod equation_tests;
