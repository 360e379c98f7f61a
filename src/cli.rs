//! command line front end: one positional equation plus optional policy/logging switches.
//! Everything here returns the lines to print so the binary only writes them to stdout.
use crate::equation::config::{DiscriminantPolicy, RenderStyle, SolverConfig, TermGrammar};
use crate::equation::polynomial::PolynomialEquation;
use clap::Parser;
use clap::error::ErrorKind;
use log::{error, warn};
use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: rusted_poly \"equation\"";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "rusted_poly",
    version,
    about = "Reduce a polynomial equation and solve it for degree up to 2"
)]
pub struct Cli {
    /// the equation, e.g. "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
    #[arg(allow_hyphen_values = true)]
    pub equation: String,
    /// TOML file with grammar, discriminant, style, epsilon and precision
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// lenient (bare numbers allowed) or strict
    #[arg(long)]
    pub grammar: Option<TermGrammar>,
    /// tolerant (|D| <= epsilon is zero) or exact
    #[arg(long)]
    pub discriminant: Option<DiscriminantPolicy>,
    /// compact or spaced reduced form
    #[arg(long)]
    pub style: Option<RenderStyle>,
    /// tolerance for a zero discriminant and a vanishing real part
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// significant digits of printed numbers
    #[arg(long)]
    pub precision: Option<usize>,
    /// print the reduced coefficients as a table
    #[arg(long)]
    pub table: bool,
    /// trace, debug, info, warn, error or off
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    /// also write the log to log_<date>_<time>.txt
    #[arg(long)]
    pub log_file: bool,
}

/// defaults, then the config file, then the command line flags
pub fn build_config(cli: &Cli) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(grammar) = cli.grammar {
        config = config.with_grammar(grammar);
    }
    if let Some(discriminant) = cli.discriminant {
        config = config.with_discriminant(discriminant);
    }
    if let Some(style) = cli.style {
        config = config.with_style(style);
    }
    if let Some(epsilon) = cli.epsilon {
        config = config.with_epsilon(epsilon);
    }
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }
    config.validate()?;
    Ok(config)
}

/// the printed lines for an already parsed command line. Errors end the run with one message line.
pub fn run(cli: &Cli) -> Vec<String> {
    let config = match build_config(cli) {
        Ok(config) => config,
        Err(e) => {
            error!("configuration rejected: {}", e);
            return vec![format!("Invalid configuration: {}", e)];
        }
    };
    match PolynomialEquation::parse(&cli.equation, config) {
        Ok(equation) => {
            let mut lines = Vec::new();
            if cli.table {
                lines.extend(equation.coefficient_table().lines().map(String::from));
            }
            lines.extend(equation.report());
            lines
        }
        Err(e) => {
            warn!("'{}' rejected: {:?}", cli.equation, e);
            vec![e.to_string()]
        }
    }
}

/// help and version go through as clap renders them, any other argument problem prints the usage line
pub fn usage_lines(e: &clap::Error) -> Vec<String> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            vec![e.to_string().trim_end().to_string()]
        }
        _ => vec![USAGE.to_string()],
    }
}

/// parse `args` (program name first) and run
pub fn execute<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => run(&cli),
        Err(e) => usage_lines(&e),
    }
}
