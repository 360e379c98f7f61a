use crate::equation::coefficients::CoefficientMap;
use crate::equation::config::{DiscriminantPolicy, SolverConfig};
use crate::equation::reduced_form::format_g;
use log::info;
use num_complex::Complex64;

/// outcome of the degree dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// degree above 2
    Unsolvable { degree: u64 },
    /// 0 = 0
    AllReals,
    /// non-zero constant = 0
    NoSolution,
    /// b + a*x = 0
    Linear(f64),
    TwoReal { discriminant: f64, x1: f64, x2: f64 },
    DoubleRoot { discriminant: f64, x: f64 },
    /// conjugate pair, `z1` has the positive imaginary part
    TwoComplex {
        discriminant: f64,
        z1: Complex64,
        z2: Complex64,
    },
}

/// classify the reduced equation by degree and solve it in closed form.
/// Degree and `all_zero` use exact zero tests, only the discriminant is compared with a tolerance.
pub fn solve(map: &CoefficientMap, config: &SolverConfig) -> Solution {
    let degree = map.degree();
    let solution = match degree {
        0 if map.all_zero() => Solution::AllReals,
        0 => Solution::NoSolution,
        1 => Solution::Linear(-map.get(0) / map.get(1)),
        2 => solve_quadratic(map.get(2), map.get(1), map.get(0), config),
        _ => Solution::Unsolvable { degree },
    };
    info!("degree {} -> {:?}", degree, solution);
    solution
}

/// roots of a*x^2 + b*x + c with a != 0
pub fn solve_quadratic(a: f64, b: f64, c: f64, config: &SolverConfig) -> Solution {
    let discriminant = b * b - 4.0 * a * c;
    let (positive, zero) = match config.discriminant {
        DiscriminantPolicy::Tolerant => (
            discriminant > config.epsilon,
            discriminant.abs() <= config.epsilon,
        ),
        DiscriminantPolicy::Exact => (discriminant > 0.0, discriminant == 0.0),
    };

    if positive {
        let sqrt_d = discriminant.sqrt();
        Solution::TwoReal {
            discriminant,
            x1: (-b + sqrt_d) / (2.0 * a),
            x2: (-b - sqrt_d) / (2.0 * a),
        }
    } else if zero {
        Solution::DoubleRoot {
            discriminant,
            x: -b / (2.0 * a),
        }
    } else {
        let re = -b / (2.0 * a);
        let im = ((-discriminant).sqrt() / (2.0 * a)).abs();
        Solution::TwoComplex {
            discriminant,
            z1: Complex64::new(re, im),
            z2: Complex64::new(re, -im),
        }
    }
}

// a real solution of -0 prints as 0
fn format_real(x: f64, precision: usize) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format_g(x, precision)
}

/// `re + imi` / `re - imi`; the real part and its connective disappear when |re| < epsilon.
/// The connective follows the sign bit, so the second root of a pair keeps its `-` even for NaN.
fn format_complex(z: Complex64, precision: usize, epsilon: f64) -> String {
    let im = format_g(z.im.abs(), precision);
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    if z.re.abs() < epsilon {
        match sign {
            '-' => format!("-{}i", im),
            _ => format!("{}i", im),
        }
    } else {
        format!("{} {} {}i", format_real(z.re, precision), sign, im)
    }
}

impl Solution {
    /// the lines printed after the degree line
    pub fn lines(&self, config: &SolverConfig) -> Vec<String> {
        let p = config.precision;
        match self {
            Solution::Unsolvable { .. } => vec![
                "The polynomial degree is strictly greater than 2, I can't solve.".to_string(),
            ],
            Solution::AllReals => vec!["Any real number is a solution.".to_string()],
            Solution::NoSolution => vec!["No solution.".to_string()],
            Solution::Linear(x) => vec!["The solution is:".to_string(), format_real(*x, p)],
            Solution::TwoReal { x1, x2, .. } => vec![
                "Discriminant is strictly positive, the two solutions are:".to_string(),
                format_real(*x1, p),
                format_real(*x2, p),
            ],
            Solution::DoubleRoot { x, .. } => vec![
                "Discriminant is zero, the solution is:".to_string(),
                format_real(*x, p),
            ],
            Solution::TwoComplex { z1, z2, .. } => vec![
                "Discriminant is strictly negative, the two complex solutions are:".to_string(),
                format_complex(*z1, p, config.epsilon),
                format_complex(*z2, p, config.epsilon),
            ],
        }
    }

    /// numeric solutions as complex numbers (empty for the degenerate and unsolvable cases)
    pub fn roots(&self) -> Vec<Complex64> {
        match self {
            Solution::Linear(x) | Solution::DoubleRoot { x, .. } => vec![Complex64::new(*x, 0.0)],
            Solution::TwoReal { x1, x2, .. } => {
                vec![Complex64::new(*x1, 0.0), Complex64::new(*x2, 0.0)]
            }
            Solution::TwoComplex { z1, z2, .. } => vec![*z1, *z2],
            _ => Vec::new(),
        }
    }
}
