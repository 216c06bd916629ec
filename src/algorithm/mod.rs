/// Memoization of finished tilings keyed by their parameters
pub mod cache;
/// Duplicate elimination strategies applied after each generation
pub mod dedup;
/// Kite and dart substitution rules and the generation loop
pub mod deflation;
/// Initial sun configuration
pub mod seeding;
