/// splitting one side of an equation into signed terms.
///
/// Every `-` starts a new term and keeps its sign (as if it was rewritten to `+-`), then the side
/// is split on `+`. A sign right after the exponent marker of a number (`1e-05`, `2.5E+3`) belongs
/// to that number.
///# Example
/// ```
/// use RustedPoly::equation::tokenizer::split_terms;
/// let terms = split_terms("5 * X^0 - 6 * X^1 + 1e-05 * X^2");
/// assert_eq!(terms, vec!["5 * X^0", "- 6 * X^1", "1e-05 * X^2"]);
/// ```
pub fn split_terms(side: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;

    for c in side.chars() {
        let is_sign = c == '+' || c == '-';
        if is_sign && !is_exponent_sign(before_prev, prev) {
            push_term(&mut terms, &current);
            current.clear();
            if c == '-' {
                current.push('-');
            }
        } else {
            current.push(c);
        }
        if !c.is_whitespace() {
            before_prev = prev;
            prev = Some(c);
        }
    }
    push_term(&mut terms, &current);
    terms
}

// `e`/`E` directly after a digit or a decimal point is the exponent marker of a float literal
fn is_exponent_sign(before_prev: Option<char>, prev: Option<char>) -> bool {
    matches!(prev, Some('e') | Some('E'))
        && matches!(before_prev, Some(d) if d.is_ascii_digit() || d == '.')
}

fn push_term(terms: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        terms.push(fragment.to_string());
    }
}
