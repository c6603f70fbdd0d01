//! # Actor / Component Composition
//!
//! An object-style component model: each [`Actor`] owns a small, ordered list
//! of reference-counted components and drives them itself. There is no central
//! world and no archetype storage; lookup is a linear scan over a handful of
//! components, which is all an actor ever carries.
//!
//! ## Module Overview
//!
//! - [`component`] — the [`Component`] trait, [`ComponentKind`] tags, and the
//!   shared, type-recoverable [`Components`] store
//! - [`entity`] — the [`Entity`] trait (component owner + frame hooks)
//! - [`transform`] — [`Transform`] and the seek/arrival motion law
//! - [`shape`] — [`Shape`], a component owning one drawable primitive
//! - [`actor`] — [`Actor`], the named entity tying them together

pub mod actor;
pub mod component;
pub mod entity;
pub mod shape;
pub mod transform;

pub use actor::Actor;
pub use component::{Component, ComponentKind, Components, Shared, shared};
pub use entity::{Entity, EntityId};
pub use shape::Shape;
pub use transform::{SeekOutcome, Transform};
