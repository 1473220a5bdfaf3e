//! Core value types shared by the command framework and its host: world
//! coordinates, permission levels and actor records.

/// Actor records and identifiers.
pub mod actor;
/// World and block coordinates.
pub mod geometry;
/// Command permission levels.
pub mod permission;

pub use actor::{Actor, ActorId, PLAYER_IDENTIFIER};
pub use geometry::{BlockPos, Vec3};
pub use permission::{PermissionLevel, PermissionLevelError};
