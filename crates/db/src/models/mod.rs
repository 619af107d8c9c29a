//! Database row structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row.

pub mod story;
