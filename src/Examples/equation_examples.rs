use crate::equation::config::{DiscriminantPolicy, RenderStyle, SolverConfig, TermGrammar};
use crate::equation::polynomial::{PolynomialEquation, solve_equation};

/// run example number `example` and return what the binary would print for it
pub fn equation_examples(example: usize) -> Vec<String> {
    let outcome = match example {
        0 => {
            // the classic: two real roots
            let input = "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0";
            solve_equation(input, &SolverConfig::default())
        }
        1 => {
            // linear, the natural form with bare constants
            let input = "5 + 4 * X^1 = 4";
            solve_equation(input, &SolverConfig::default())
        }
        2 => {
            // complex conjugate roots
            solve_equation("1 * X^2 + 2 * X^1 + 5 = 0", &SolverConfig::default())
        }
        3 => {
            // every real number / no real number
            let mut lines = solve_equation("42 * X^0 = 42 * X^0", &SolverConfig::default());
            if let (Ok(first), Ok(second)) = (
                &mut lines,
                solve_equation("1 * X^0 = 2 * X^0", &SolverConfig::default()),
            ) {
                first.extend(second);
            }
            lines
        }
        4 => {
            // degree 3 is reported, not solved
            let input = "8 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 * X^3 = 3 * X^0";
            solve_equation(input, &SolverConfig::default())
        }
        5 => {
            // strict grammar, spaced output, exact discriminant test
            let config = SolverConfig::new()
                .with_grammar(TermGrammar::Strict)
                .with_discriminant(DiscriminantPolicy::Exact)
                .with_style(RenderStyle::Spaced);
            solve_equation("1 * X^2 - 2 * X^1 + 1 * X^0 = 0 * X^0", &config)
        }
        6 => {
            // reduced form, reparsed
            PolynomialEquation::parse("3 * X^2 + 2 * X^1 - 5 = 1 * X^2", SolverConfig::default())
                .and_then(|equation| {
                    let mut lines = vec![equation.coefficient_table()];
                    let again = PolynomialEquation::parse(
                        &equation.reduced_form(),
                        equation.config.clone(),
                    )?;
                    lines.extend(again.report());
                    Ok(lines)
                })
        }
        _ => Ok(Vec::new()),
    };
    match outcome {
        Ok(lines) => lines,
        Err(e) => vec![e.to_string()],
    }
}
