//! MapAudit - content-coverage auditing for the map renderer
//!
//! Compares the renderer's built-in block and biome tables against the
//! authoritative upstream game data (PrismarineJS/minecraft-data) for a
//! chosen client version, and reports every identifier the renderer does
//! not implement yet together with a coverage percentage per category.

pub mod audit;
pub mod coverage;
pub mod fetch;
pub mod index;
pub mod registry;
