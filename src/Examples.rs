//! examples of usage of RustedPoly
/// equations of every degree class, solved with the default and the alternative policies
pub mod equation_examples;
