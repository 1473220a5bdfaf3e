//! Typed command registration, overload resolution and dispatch.
//!
//! Commands are registered once in a [`CommandRegistry`] with one or more
//! [`CommandOverload`]s. At execution time a [`Resolver`] picks the first
//! overload whose parameters accept the raw tokens, coercing each into a
//! typed [`Value`], and a [`Dispatcher`] runs its handler.

pub mod coerce;
mod definition;
mod dispatch;
mod error;
mod kind;
mod origin;
mod registry;
mod resolve;
mod soft_enum;
mod value;
mod world;

pub use definition::{CommandContext, CommandDefinition, CommandHandler, CommandOverload};
pub use dispatch::{Dispatcher, MAX_DEPTH};
pub use error::{CoercionError, DispatchError, HandlerError, HandlerResult, OverloadMismatch, RegistryError, ResolutionError, SoftEnumError};
pub use kind::{ArgumentKind, ArgumentSpec, TokenCount};
pub use origin::CommandOrigin;
pub use registry::{CommandRegistry, CommandSnapshot};
pub use resolve::{Resolution, Resolver};
pub use soft_enum::{DEFAULT_CASE_SENSITIVE, SoftEnum, SoftEnumRegistry, SoftEnumSnapshot};
pub use value::{BlockState, ResolvedArgs, Value};
pub use world::{StaticWorld, World};
