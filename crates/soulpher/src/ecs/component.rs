//! # Component — Shared, Type-Recoverable Behavior Units
//!
//! A component is a small unit of state and behavior (a [`Transform`], a
//! [`Shape`], …) attached to an entity. Entities store components behind the
//! [`Component`] trait so they can update and draw them without knowing the
//! concrete type, yet callers still need the concrete type back:
//! `actor.get_component::<Transform>()`.
//!
//! ## Storage
//!
//! Every component lives in an `Rc<RefCell<T>>` ([`Shared<T>`]). The entity
//! keeps *two* views of that one allocation:
//!
//! ```text
//! Slot {
//!     kind:      ComponentKind            fixed at insertion
//!     component: Rc<RefCell<dyn Component>>   ──┐
//!     any:       Rc<dyn Any>                  ──┴─► same RefCell<T>
//! }
//! ```
//!
//! `component` is used for dynamic dispatch (`update`, `render`). `any` is used
//! for type recovery: `Rc::<dyn Any>::downcast::<RefCell<T>>()` either hands
//! back the original `Rc` (same pointer, bumped refcount) or fails cleanly. No
//! unchecked casts, no `unsafe`.
//!
//! ## Ownership
//!
//! Components are reference counted. The caller may keep a clone of the handle
//! it added and keep mutating the component; the component is dropped when the
//! last holder (entity or caller) lets go. Components never point back at
//! their entity, so there are no cycles to leak.
//!
//! [`Transform`]: super::Transform
//! [`Shape`]: super::Shape

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::render2d::Surface;

/// Shared-ownership handle to a component.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a fresh [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Behavior category of a component.
///
/// The set is closed. Only `Transform` and `Shape` have implementations in
/// this crate; the rest are reserved for future component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ComponentKind {
    #[default]
    None = 0,
    Transform = 1,
    Sprite = 3,
    Physics = 4,
    AudioSource = 5,
    Shape = 6,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::None => "None",
            ComponentKind::Transform => "Transform",
            ComponentKind::Sprite => "Sprite",
            ComponentKind::Physics => "Physics",
            ComponentKind::AudioSource => "AudioSource",
            ComponentKind::Shape => "Shape",
        };
        f.write_str(name)
    }
}

/// A unit of behavior attached to an entity.
///
/// The `Any` supertrait is what makes lookup by concrete type possible; it
/// also means components must be `'static`.
pub trait Component: Any {
    /// The component's category. Must not change over the component's life.
    fn kind(&self) -> ComponentKind;

    /// Per-frame logic hook.
    fn update(&mut self, _delta_time: f32) {}

    /// Per-frame draw hook.
    fn render(&self, _surface: &mut dyn Surface) {}
}

struct Slot {
    kind: ComponentKind,
    component: Rc<RefCell<dyn Component>>,
    any: Rc<dyn Any>,
}

/// Insertion-ordered collection of shared components.
///
/// Duplicates are allowed. Lookup returns the *first* component of the
/// requested type, so a second component of the same type is only reachable
/// through [`all_of`](Components::all_of).
#[derive(Default)]
pub struct Components {
    slots: Vec<Slot>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component. Does not check for duplicates.
    ///
    /// The handle is stored as-is; clones held elsewhere keep pointing at the
    /// same component.
    pub fn add<T: Component>(&mut self, component: Shared<T>) {
        let kind = component.borrow().kind();
        let any: Rc<dyn Any> = component.clone();
        log::trace!(
            "adding {} component `{}` (slot {})",
            kind,
            short_type_name(std::any::type_name::<T>()),
            self.slots.len()
        );
        self.slots.push(Slot { kind, component, any });
    }

    /// First component of type `T` in insertion order, or `None`.
    pub fn get<T: Component>(&self) -> Option<Shared<T>> {
        self.slots
            .iter()
            .find_map(|slot| slot.any.clone().downcast::<RefCell<T>>().ok())
    }

    /// Every component of type `T`, in insertion order.
    pub fn all_of<T: Component>(&self) -> Vec<Shared<T>> {
        self.slots
            .iter()
            .filter_map(|slot| slot.any.clone().downcast::<RefCell<T>>().ok())
            .collect()
    }

    /// Returns `true` if at least one component of type `T` is stored.
    pub fn has<T: Component>(&self) -> bool {
        self.slots.iter().any(|slot| slot.any.is::<RefCell<T>>())
    }

    /// Kinds of all stored components, in insertion order.
    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.slots.iter().map(|slot| slot.kind).collect()
    }

    /// Type-erased handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<RefCell<dyn Component>>> {
        self.slots.iter().map(|slot| &slot.component)
    }

    /// Run every component's `update` hook in insertion order.
    pub fn update_all(&self, delta_time: f32) {
        for component in self.iter() {
            component.borrow_mut().update(delta_time);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter().map(|slot| slot.kind)).finish()
    }
}

/// Strip the module path: `soulpher::ecs::transform::Transform` → `Transform`.
fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
