//! Typed representation of the five mutation verbs and their outcomes.
//!
//! The CLI lexer produces a [`Command`] instead of string-matching the
//! verb inline at each call site.

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEnt { name: String },
    DelEnt { name: String },
    AddRel { origin: String, dest: String, relation: String },
    DelRel { origin: String, dest: String, relation: String },
    Report,
    /// Terminates the read loop.
    End,
}

/// Outcome of dispatching a [`Command`] against a
/// [`crate::store::GraphStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// `report`'s formatted line, including the trailing newline.
    Report(String),
    /// Every other successful mutation produces nothing observable.
    Noop,
}
