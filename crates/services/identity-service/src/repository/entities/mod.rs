//! SeaORM entity definitions.

pub mod identity;
