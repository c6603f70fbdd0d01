//! # Entity — Owner of a Component Collection
//!
//! [`Entity`] is the abstract composite: anything that owns a [`Components`]
//! store and knows how to update and draw itself once per frame. The
//! component helpers (`add_component`, `get_component`, …) are provided
//! methods, so an implementor only has to expose its store.
//!
//! The `T: Component` bound on every helper is the compile-time gate: handing
//! a non-component to `add_component` is a type error, not a runtime failure.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use super::component::{Component, ComponentKind, Components, Shared};
use crate::render2d::Surface;

static NEXT_ENTITY_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique entity identifier. Never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Allocate the next identifier.
    pub fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw index. Useful for diagnostics.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that owns components and takes part in the frame loop.
pub trait Entity {
    fn components(&self) -> &Components;

    fn components_mut(&mut self) -> &mut Components;

    /// Per-frame logic.
    fn update(&mut self, delta_time: f32);

    /// Per-frame drawing.
    fn render(&self, surface: &mut dyn Surface);

    /// Attach a component. Duplicates are not rejected; see
    /// [`get_component`](Entity::get_component).
    fn add_component<T: Component>(&mut self, component: Shared<T>)
    where
        Self: Sized,
    {
        self.components_mut().add(component);
    }

    /// The first attached component of type `T`, or `None`.
    ///
    /// If several components of type `T` were added, only the first one is
    /// ever returned here.
    fn get_component<T: Component>(&self) -> Option<Shared<T>>
    where
        Self: Sized,
    {
        self.components().get::<T>()
    }

    /// Every attached component of type `T`, in insertion order.
    fn components_of<T: Component>(&self) -> Vec<Shared<T>>
    where
        Self: Sized,
    {
        self.components().all_of::<T>()
    }

    fn has_component<T: Component>(&self) -> bool
    where
        Self: Sized,
    {
        self.components().has::<T>()
    }

    fn component_count(&self) -> usize {
        self.components().len()
    }

    /// Kinds of the attached components, in insertion order.
    fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components().kinds()
    }
}
