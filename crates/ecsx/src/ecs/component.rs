//! Component trait and component type lists

use super::storage::ComponentStorage;
use std::any::type_name;

/// Marker trait for components
///
/// Any `'static` type can be a component once it opts in:
///
/// ```rust
/// use ecsx::ecs::Component;
///
/// struct Health(u32);
/// impl Component for Health {}
/// ```
pub trait Component: 'static {}

/// A list of component types, written as a tuple: `(Position,)`, `(Position, Name)`, ...
///
/// Used by [`Entity::has`](super::Entity::has) and the query methods on
/// [`Entities`](super::Entities). The empty tuple matches every entity.
pub trait ComponentSet {
    /// True if `storage` holds every listed type. Checks run left to right and stop at the
    /// first missing type.
    fn is_present_in(storage: &ComponentStorage) -> bool;

    /// Names of the listed types, in order
    fn type_names() -> Vec<&'static str>;
}

impl ComponentSet for () {
    fn is_present_in(_storage: &ComponentStorage) -> bool {
        true
    }

    fn type_names() -> Vec<&'static str> {
        Vec::new()
    }
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentSet for ($($name,)+) {
            fn is_present_in(storage: &ComponentStorage) -> bool {
                $(storage.contains::<$name>())&&+
            }

            fn type_names() -> Vec<&'static str> {
                vec![$(type_name::<$name>()),+]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
