//! Components used by the demos

use ecsx::ecs::Component;

/// A display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// The name itself
    pub name: String,
}

impl Name {
    /// Create a name component
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("unnamed")
    }
}

impl Component for Name {}

/// A point on the integer grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Position {
    /// Create a position component
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Component for Position {}

/// A single integer the `inheriting_world` demo keeps adding to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicComponent {
    /// Current value
    pub variable: i32,
}

impl Component for BasicComponent {}
