//! Domain entities - the core business objects.

mod formula;

pub use formula::{Formula, FormulaChanges, NewFormula};
