/////////////////////////////TESTS////////////////////////////////////////////////////
/*
whole-pipeline tests:
reduction of both sides
degree 0 (all reals / no solution)
linear, two real, double and complex roots
unsolvable degree
malformed equations and terms
reparsing of the reduced form
grammar, discriminant and spacing policies
*/

#[cfg(test)]
mod tests {
    use crate::equation::coefficients::CoefficientMap;
    use crate::equation::config::{DiscriminantPolicy, RenderStyle, SolverConfig, TermGrammar};
    use crate::equation::errors::{EquationError, TermFault};
    use crate::equation::polynomial::{PolynomialEquation, solve_equation};
    use crate::equation::solver::Solution;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn lines_of(input: &str) -> Vec<String> {
        solve_equation(input, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_reduction() {
        let equation =
            PolynomialEquation::parse("3*X^2 + 2*X^1 - 5 = 1*X^2", SolverConfig::default())
                .unwrap();
        let expected: CoefficientMap = vec![(2, 2.0), (1, 2.0), (0, -6.0)].into_iter().collect();
        assert_eq!(equation.coefficients, expected);
        assert_eq!(equation.degree(), 2);
        assert_eq!(equation.reduced_form(), "-6 * X^0 +2 * X^1 +2 * X^2 = 0");
    }

    #[test]
    fn test_infinite_solutions() {
        assert_eq!(
            lines_of("5 = 5"),
            vec![
                "Reduced form: 0 * X^0 = 0",
                "Polynomial degree: 0",
                "Any real number is a solution."
            ]
        );
        assert_eq!(
            lines_of("4 * X^0 + 1 * X^1 = 4 * X^0 + 1 * X^1"),
            vec![
                "Reduced form: 0 * X^0 +0 * X^1 = 0",
                "Polynomial degree: 0",
                "Any real number is a solution."
            ]
        );
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(
            lines_of("5 = 4"),
            vec!["Reduced form: 1 * X^0 = 0", "Polynomial degree: 0", "No solution."]
        );
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(
            lines_of(" = "),
            vec![
                "Reduced form: 0 * X^0 = 0",
                "Polynomial degree: 0",
                "Any real number is a solution."
            ]
        );
    }

    #[test]
    fn test_linear() {
        assert_eq!(
            lines_of("2*X^1 + 3 = 0"),
            vec![
                "Reduced form: 3 * X^0 +2 * X^1 = 0",
                "Polynomial degree: 1",
                "The solution is:",
                "-1.5"
            ]
        );
        assert_eq!(lines_of("5 * X^0 + 4 * X^1 = 4 * X^0")[3], "-0.25");
    }

    #[test]
    fn test_two_real_roots() {
        let lines = lines_of("1*X^2 - 5*X^1 + 6 = 0");
        assert_eq!(lines[1], "Polynomial degree: 2");
        assert_eq!(
            lines[2..],
            [
                "Discriminant is strictly positive, the two solutions are:",
                "3",
                "2"
            ]
        );
    }

    #[test]
    fn test_complex_roots() {
        assert_eq!(
            lines_of("1*X^2 + 2*X^1 + 5 = 0")[2..],
            [
                "Discriminant is strictly negative, the two complex solutions are:",
                "-1 + 2i",
                "-1 - 2i"
            ]
        );
        assert_eq!(lines_of("1*X^2 + 1 = 0")[3..], ["1i", "-1i"]);
    }

    #[test]
    fn test_double_root() {
        assert_eq!(
            lines_of("1 * X^2 + 2 * X^1 = -1")[2..],
            ["Discriminant is zero, the solution is:", "-1"]
        );
    }

    #[test]
    fn test_unsolvable_degree() {
        assert_eq!(
            lines_of("1*X^3 = 0"),
            vec![
                "Reduced form: 1 * X^3 = 0",
                "Polynomial degree: 3",
                "The polynomial degree is strictly greater than 2, I can't solve."
            ]
        );
        // a cancelled cubic term does not raise the degree
        let lines = lines_of("1 * X^3 + 2 * X^1 = 1 * X^3 + 4");
        assert_eq!(lines[1], "Polynomial degree: 1");
        assert_eq!(lines[3], "2");
    }

    #[test]
    fn test_malformed_equation() {
        let config = SolverConfig::default();
        assert_eq!(
            solve_equation("3*X^2 = 0 = 1", &config),
            Err(EquationError::EquationFormat(2))
        );
        assert_eq!(
            solve_equation("3*X^2", &config),
            Err(EquationError::EquationFormat(0))
        );
        // the equation format is checked before any term
        assert_eq!(
            solve_equation("abc = 0 = 1", &config),
            Err(EquationError::EquationFormat(2))
        );
    }

    #[test]
    fn test_malformed_terms() {
        let config = SolverConfig::default();
        let error = solve_equation("abc*X^2=0", &config).unwrap_err();
        assert_eq!(
            error,
            EquationError::TermFormat {
                fault: TermFault::InvalidTerm,
                fragment: "abc*X^2".to_string()
            }
        );
        assert_eq!(error.to_string(), "Error parsing terms: Invalid term: abc*X^2");

        let error = solve_equation("3 * Y^2 = 0", &config).unwrap_err();
        assert_eq!(error.to_string(), "Error parsing terms: Invalid X part: Y^2");
        // an error on the right side aborts as well
        assert!(solve_equation("1 * X^1 = 2 * X^1 * X^1", &config).is_err());
    }

    #[test]
    fn test_negative_exponent_rejected() {
        // the tokenizer cuts `X^-2` at the minus, leaving `X^` without digits
        let error = solve_equation("3 * X^-2 = 0", &SolverConfig::default()).unwrap_err();
        assert_eq!(error.to_string(), "Error parsing terms: Invalid X part: X^");
    }

    #[test]
    fn test_reduced_form_reparses_to_same_map() {
        for style in RenderStyle::iter() {
            let config = SolverConfig::default().with_style(style);
            for input in [
                "3*X^2 + 2*X^1 - 5 = 1*X^2",
                "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0",
                "-2 * X^0 + 0.00001 * X^1 = 2500000 * X^3",
                "1 * X^1 = 1 * X^1",
                "-7 = 0",
            ] {
                let first = PolynomialEquation::parse(input, config.clone()).unwrap();
                let reduced = first.reduced_form();
                let second = PolynomialEquation::parse(&reduced, config.clone()).unwrap();
                assert!(
                    second.coefficients.equivalent(&first.coefficients),
                    "{} -> {}",
                    input,
                    reduced
                );
                // one pass reaches the fixpoint
                let third = PolynomialEquation::parse(&second.reduced_form(), config.clone()).unwrap();
                assert_eq!(third.coefficients, second.coefficients);
                assert_eq!(third.reduced_form(), second.reduced_form());
            }
        }
    }

    #[test]
    fn test_reparse_adds_constant_key_only() {
        // the `= 0` of the reduced form brings an explicit X^0 entry
        let config = SolverConfig::default();
        let first = PolynomialEquation::parse("1 * X^1 = 1 * X^1", config.clone()).unwrap();
        assert_eq!(first.reduced_form(), "0 * X^1 = 0");
        let second = PolynomialEquation::parse(&first.reduced_form(), config).unwrap();
        assert_eq!(second.reduced_form(), "0 * X^0 +0 * X^1 = 0");
        assert!(second.coefficients.equivalent(&first.coefficients));
    }

    #[test]
    fn test_strict_grammar() {
        let strict = SolverConfig::default().with_grammar(TermGrammar::Strict);
        assert_eq!(
            solve_equation("5 * X^0 = 3", &strict),
            Err(EquationError::invalid_term("3"))
        );
        let lines = solve_equation("5 * X^0 + 4 * X^1 = 4 * X^0", &strict).unwrap();
        assert_eq!(lines[3], "-0.25");
        // both grammars agree on fully written terms
        for grammar in TermGrammar::iter() {
            let config = SolverConfig::default().with_grammar(grammar);
            let lines = solve_equation("1 * X^2 - 5 * X^1 + 6 * X^0 = 0 * X^0", &config).unwrap();
            assert_eq!(lines[3..], ["3", "2"]);
        }
    }

    #[test]
    fn test_discriminant_policy_near_zero() {
        // D = 4e-12
        let input = "1 * X^2 + 0.000002 * X^1 = 0";
        let tolerant = solve_equation(input, &SolverConfig::default()).unwrap();
        assert_eq!(tolerant[2], "Discriminant is zero, the solution is:");
        assert_eq!(tolerant[3], "-1e-06");

        let exact_config = SolverConfig::default().with_discriminant(DiscriminantPolicy::Exact);
        let exact = solve_equation(input, &exact_config).unwrap();
        assert_eq!(
            exact[2],
            "Discriminant is strictly positive, the two solutions are:"
        );
        assert_eq!(exact[3..], ["0", "-2e-06"]);
    }

    #[test]
    fn test_spaced_style() {
        let config = SolverConfig::default().with_style(RenderStyle::Spaced);
        let lines = solve_equation("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0", &config).unwrap();
        assert_eq!(lines[0], "Reduced form: 4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0");
    }

    #[test]
    fn test_scientific_coefficients() {
        let equation =
            PolynomialEquation::parse("1e-05 * X^1 + 2.5E+3 = 0", SolverConfig::default())
                .unwrap();
        assert_relative_eq!(equation.coefficients.get(1), 1e-5);
        assert_relative_eq!(equation.coefficients.get(0), 2500.0);
        assert_eq!(equation.reduced_form(), "2500 * X^0 +1e-05 * X^1 = 0");
        match equation.solve() {
            Solution::Linear(x) => assert_relative_eq!(x, -2.5e8, max_relative = 1e-12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_conjugate_pair_keeps_signs() {
        // 2a overflows to inf, so the imaginary part is inf / inf
        let lines = lines_of("1e308 * X^2 + 1e308 = 0");
        assert_eq!(lines[1], "Polynomial degree: 2");
        assert_eq!(
            lines[2],
            "Discriminant is strictly negative, the two complex solutions are:"
        );
        assert_eq!(lines[3..], ["nani", "-nani"]);

        let lines = lines_of("nan * X^2 = 0");
        assert_eq!(lines[3..], ["nan + nani", "nan - nani"]);
    }

    #[test]
    fn test_exponent_beyond_u32() {
        let equation =
            PolynomialEquation::parse("1 * X^4294967296 = 0", SolverConfig::default()).unwrap();
        assert_eq!(equation.degree(), 4_294_967_296);
        assert_eq!(
            equation.report(),
            vec![
                "Reduced form: 0 * X^0 +1 * X^4294967296 = 0",
                "Polynomial degree: 4294967296",
                "The polynomial degree is strictly greater than 2, I can't solve."
            ]
        );
    }
}
