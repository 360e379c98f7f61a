use crate::equation::config::TermGrammar;
use crate::equation::errors::EquationError;
use crate::equation::term_parser::{Term, parse_term};
use crate::equation::tokenizer::split_terms;
use log::debug;
use std::collections::BTreeMap;

/// exponent -> accumulated coefficient of `left - right = 0`.
/// Every exponent that appeared on either side is a key, even when its coefficient cancelled to 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientMap {
    coefficients: BTreeMap<u64, f64>,
}

impl CoefficientMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, term: Term) {
        *self.coefficients.entry(term.exponent).or_insert(0.0) += term.coefficient;
    }

    pub fn subtract_term(&mut self, term: Term) {
        *self.coefficients.entry(term.exponent).or_insert(0.0) -= term.coefficient;
    }

    /// coefficient of X^exponent, 0.0 when the exponent never appeared
    pub fn get(&self, exponent: u64) -> f64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, exponent: u64) -> bool {
        self.coefficients.contains_key(&exponent)
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// (exponent, coefficient) in ascending exponent order
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.coefficients.iter().map(|(e, c)| (*e, *c))
    }

    /// same polynomial: equal coefficients for every exponent, absent exponents read as 0.0
    pub fn equivalent(&self, other: &CoefficientMap) -> bool {
        self.coefficients
            .keys()
            .chain(other.coefficients.keys())
            .all(|e| self.get(*e) == other.get(*e))
    }

    /// true when every coefficient is exactly 0.0 (and for the empty map)
    pub fn all_zero(&self) -> bool {
        self.coefficients.values().all(|c| *c == 0.0)
    }

    /// highest exponent with a coefficient different from exactly 0.0, or 0
    pub fn degree(&self) -> u64 {
        self.coefficients
            .iter()
            .rev()
            .find(|(_, c)| **c != 0.0)
            .map(|(e, _)| *e)
            .unwrap_or(0)
    }
}

impl FromIterator<(u64, f64)> for CoefficientMap {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut map = CoefficientMap::new();
        for (exponent, coefficient) in iter {
            map.add_term(Term::new(coefficient, exponent));
        }
        map
    }
}

/// parse both sides and move everything to the left: terms of the left side are added,
/// terms of the right side subtracted. The first bad term aborts the whole reduction.
pub fn accumulate(
    left: &str,
    right: &str,
    grammar: TermGrammar,
) -> Result<CoefficientMap, EquationError> {
    let left_terms = split_terms(left);
    let right_terms = split_terms(right);
    debug!("left terms {:?}, right terms {:?}", left_terms, right_terms);

    let mut map = CoefficientMap::new();
    for term in left_terms.iter() {
        map.add_term(parse_term(term, grammar)?);
    }
    for term in right_terms.iter() {
        map.subtract_term(parse_term(term, grammar)?);
    }
    debug!("coefficients {:?}", map);
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulate() {
        let map = accumulate("3*X^2 + 2*X^1 - 5", "1*X^2", TermGrammar::Lenient).unwrap();
        assert_eq!(map.len(), 3);
        assert_relative_eq!(map.get(2), 2.0);
        assert_relative_eq!(map.get(1), 2.0);
        assert_relative_eq!(map.get(0), -6.0);
        assert_eq!(map.degree(), 2);
        assert!(!map.all_zero());
    }

    #[test]
    fn test_cancelled_exponent_stays() {
        let map = accumulate("1 * X^2 + 4 * X^0", "1 * X^2", TermGrammar::Strict).unwrap();
        assert!(map.contains(2));
        assert_eq!(map.get(2), 0.0);
        assert_eq!(map.degree(), 0);
        assert!(!map.all_zero());
    }

    #[test]
    fn test_all_zero() {
        let map = accumulate("5", "5", TermGrammar::Lenient).unwrap();
        assert!(map.all_zero());
        assert_eq!(map.degree(), 0);

        let empty = accumulate(" ", "", TermGrammar::Lenient).unwrap();
        assert!(empty.is_empty());
        assert!(empty.all_zero());
        assert_eq!(empty.degree(), 0);
    }

    #[test]
    fn test_missing_exponent_reads_zero() {
        let map = accumulate("2 * X^3", "0", TermGrammar::Lenient).unwrap();
        assert!(!map.contains(1));
        assert_eq!(map.get(1), 0.0);
        assert_eq!(map.degree(), 3);
    }

    #[test]
    fn test_error_aborts() {
        assert_eq!(
            accumulate("1 * X^1", "abc*X^2", TermGrammar::Lenient),
            Err(EquationError::invalid_term("abc*X^2"))
        );
    }

    #[test]
    fn test_exact_zero_for_degree() {
        // 0.1 + 0.2 - 0.3 is not exactly 0, the degree test does not use a tolerance
        let map = accumulate("0.1 * X^1 + 0.2 * X^1", "0.3 * X^1", TermGrammar::Lenient).unwrap();
        assert!(map.get(1) != 0.0);
        assert_eq!(map.degree(), 1);
    }

    #[test]
    fn test_equivalent() {
        let a: CoefficientMap = vec![(1, 0.0), (2, 3.0)].into_iter().collect();
        let b: CoefficientMap = vec![(0, 0.0), (2, 3.0)].into_iter().collect();
        let c: CoefficientMap = vec![(2, 3.5)].into_iter().collect();
        assert!(a.equivalent(&b));
        assert!(b.equivalent(&a));
        assert!(!a.equivalent(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_iter() {
        let map: CoefficientMap = vec![(0, 1.0), (2, 3.0), (0, 1.0)].into_iter().collect();
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(0, 2.0), (2, 3.0)]);
    }
}
