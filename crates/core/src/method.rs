//! Containment method selector.

/// Which point-in-triangle test [`crate::Triangle::intersects`] runs.
///
/// - **Heron**: compares the triangle's area against the areas of the three
///   sub-triangles formed with the point. Four area evaluations per test.
/// - **Projection**: half-plane test, dot product of each edge's inward normal
///   with the vector to the point. No square roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainmentMethod {
    #[default]
    Heron,
    Projection,
}

impl ContainmentMethod {
    pub const ALL: [ContainmentMethod; 2] = [ContainmentMethod::Heron, ContainmentMethod::Projection];

    /// Parse a method name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_triangle_core::ContainmentMethod;
    ///
    /// assert_eq!(ContainmentMethod::from_str("heron"), Some(ContainmentMethod::Heron));
    /// assert_eq!(ContainmentMethod::from_str("Projection"), Some(ContainmentMethod::Projection));
    /// assert_eq!(ContainmentMethod::from_str("barycentric"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "heron" => Some(ContainmentMethod::Heron),
            "projection" => Some(ContainmentMethod::Projection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainmentMethod::Heron => "heron",
            ContainmentMethod::Projection => "projection",
        }
    }

    /// The other method.
    pub fn toggle(&self) -> Self {
        match self {
            ContainmentMethod::Heron => ContainmentMethod::Projection,
            ContainmentMethod::Projection => ContainmentMethod::Heron,
        }
    }
}
