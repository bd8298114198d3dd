//! SeaORM entities.

pub mod formula;
