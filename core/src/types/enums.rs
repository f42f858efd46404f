use std::fmt;

/// Anatomical side of the head a slide was taken from
///
/// Absence of a side is a valid state for a slide record, so extraction
/// yields `Option<SideOfHead>` rather than carrying an `Unknown` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SideOfHead {
    Left,
    Right,
}

impl SideOfHead {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            SideOfHead::Left => SideOfHead::Right,
            SideOfHead::Right => SideOfHead::Left,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SideOfHead::Left => "left",
            SideOfHead::Right => "right",
        }
    }
}

impl fmt::Display for SideOfHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(SideOfHead::Left.opposite(), SideOfHead::Right);
        assert_eq!(SideOfHead::Right.opposite(), SideOfHead::Left);
    }

    #[test]
    fn test_display() {
        assert_eq!(SideOfHead::Left.to_string(), "left");
        assert_eq!(SideOfHead::Right.to_string(), "right");
    }
}
