//! Locally-known content identifiers.
//!
//! The audit never reaches into renderer internals; it reads identifiers
//! through the narrow [`ContentRegistry`] trait. Block identifiers are
//! stored qualified (`minecraft:stone`) and biome identifiers bare
//! (`plains`), mirroring how the renderer keys each table.

use std::collections::HashSet;

mod builtin;

pub use builtin::BuiltinRegistry;

/// Read-only access to the identifiers the renderer implements.
///
/// Both accessors return already-populated snapshots; the audit never
/// mutates them.
pub trait ContentRegistry {
    /// Qualified block identifiers, e.g. `minecraft:stone`.
    fn known_block_ids(&self) -> &HashSet<String>;

    /// Bare biome identifiers, e.g. `plains`.
    fn known_biome_ids(&self) -> &HashSet<String>;
}
