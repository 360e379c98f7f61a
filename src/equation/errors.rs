//! errors of the parse -> reduce pipeline. Both kinds are terminal: the caller prints the message
//! and no solving is attempted.
use std::error::Error;
use std::fmt;
use strum_macros::Display;

/// what exactly is wrong with a term
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TermFault {
    /// wrong number of `*`, unparsable coefficient or (strict grammar) a bare number
    #[strum(to_string = "Invalid term")]
    InvalidTerm,
    /// the part after `*` is not `X^<non-negative integer>`
    #[strum(to_string = "Invalid X part")]
    InvalidXPart,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EquationError {
    /// the input does not contain exactly one `=`; carries the number of `=` found
    EquationFormat(usize),
    /// a term failed the grammar; carries the reason and the offending substring
    TermFormat { fault: TermFault, fragment: String },
}

impl EquationError {
    pub fn invalid_term(fragment: &str) -> Self {
        EquationError::TermFormat {
            fault: TermFault::InvalidTerm,
            fragment: fragment.to_string(),
        }
    }

    pub fn invalid_x_part(fragment: &str) -> Self {
        EquationError::TermFormat {
            fault: TermFault::InvalidXPart,
            fragment: fragment.to_string(),
        }
    }
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::EquationFormat(_) => write!(f, "Invalid equation format"),
            EquationError::TermFormat { fault, fragment } => {
                write!(f, "Error parsing terms: {}: {}", fault, fragment)
            }
        }
    }
}

impl Error for EquationError {}
