//! different utility modules used throughout the project
/// logger setup (terminal and file) shared by the binary
pub mod logger;
