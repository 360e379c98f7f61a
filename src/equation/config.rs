//! policies of the pipeline and their defaults. The two behaviours the pipeline can be switched
//! between (bare constants allowed or not, tolerant or exact zero discriminant) and the spacing of
//! the reduced form are explicit values here, so every combination can be tested.
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// tolerance used to treat the discriminant as zero (and to drop a vanishing real part of a complex root)
pub const DEFAULT_EPSILON: f64 = 1e-10;
/// significant digits of every printed number
pub const DEFAULT_PRECISION: usize = 6;

/// which term shapes the parser accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TermGrammar {
    /// `c * X^n` and bare numbers
    Lenient,
    /// only `c * X^n`
    Strict,
}

/// how a discriminant close to zero is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DiscriminantPolicy {
    /// |D| <= epsilon is zero
    Tolerant,
    /// only D == 0.0 is zero
    Exact,
}

/// spacing of the reduced form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RenderStyle {
    /// `3 * X^0 -2 * X^1 = 0`
    Compact,
    /// `3 * X^0 - 2 * X^1 = 0`
    Spaced,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub grammar: TermGrammar,
    pub discriminant: DiscriminantPolicy,
    pub style: RenderStyle,
    pub epsilon: f64,
    pub precision: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            grammar: TermGrammar::Lenient,
            discriminant: DiscriminantPolicy::Tolerant,
            style: RenderStyle::Compact,
            epsilon: DEFAULT_EPSILON,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    pub fn with_grammar(mut self, grammar: TermGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_discriminant(mut self, discriminant: DiscriminantPolicy) -> Self {
        self.discriminant = discriminant;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// check values that can come from a file or the command line
    pub fn validate(&self) -> Result<(), String> {
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(format!(
                "epsilon must be a finite non-negative number, got {}",
                self.epsilon
            ));
        }
        if self.precision == 0 || self.precision > 17 {
            return Err(format!(
                "precision must be between 1 and 17, got {}",
                self.precision
            ));
        }
        Ok(())
    }
    ///////////////////////////////TOML/////////////////////////////////////////////////////////////////
    /// read a flat TOML document, e.g.
    /// ```toml
    /// grammar = "strict"
    /// discriminant = "exact"
    /// style = "spaced"
    /// epsilon = 1e-12
    /// precision = 8
    /// ```
    /// missing keys keep the value already in `self`, unknown keys are ignored with a warning
    pub fn merge_toml_str(mut self, text: &str) -> Result<Self, Box<dyn Error>> {
        let table: toml::Table = text.parse()?;
        for (key, value) in table.iter() {
            match key.as_str() {
                "grammar" => self.grammar = parse_enum_value(key, value)?,
                "discriminant" => self.discriminant = parse_enum_value(key, value)?,
                "style" => self.style = parse_enum_value(key, value)?,
                "epsilon" => {
                    self.epsilon = match value {
                        toml::Value::Float(f) => *f,
                        toml::Value::Integer(i) => *i as f64,
                        _ => return Err(format!("key '{}' must be a number", key).into()),
                    }
                }
                "precision" => {
                    self.precision = match value {
                        toml::Value::Integer(i) if *i > 0 => *i as usize,
                        _ => {
                            return Err(format!("key '{}' must be a positive integer", key).into());
                        }
                    }
                }
                _ => warn!("unknown configuration key '{}' ignored", key),
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn Error>> {
        Self::default().merge_toml_str(text)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file {}: {}", path.display(), e))?;
        info!("configuration loaded from {}", path.display());
        Self::from_toml_str(&text)
    }
}

fn parse_enum_value<T: FromStr>(key: &str, value: &toml::Value) -> Result<T, Box<dyn Error>> {
    let s = value
        .as_str()
        .ok_or_else(|| format!("key '{}' must be a string", key))?;
    s.parse::<T>()
        .map_err(|_| format!("unknown value '{}' for key '{}'", s, key).into())
}
