/// Tri-state classification of a seat's parsed holding.
///
/// - `Visible`: all four suit markers found and at least one rank
/// - `Placeholder`: all four suit markers found but no ranks: an
///   intentionally empty slot in the teaching position
/// - `Absent`: the markers were not found at all
///
/// Only `Visible` seats take part in diffing. The other two are kept apart
/// so diagnostics can tell an authored empty hand from a parse miss.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Placeholder,
    #[default]
    Absent,
}

impl Visibility {
    /// Pure function of what the suit scan found.
    pub fn classify(markers: bool, ranks: usize) -> Self {
        match (markers, ranks) {
            (false, _) => Self::Absent,
            (true, 0) => Self::Placeholder,
            (true, _) => Self::Visible,
        }
    }
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Visible => write!(f, "visible"),
            Self::Placeholder => write!(f, "placeholder"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(Visibility::classify(true, 13), Visibility::Visible);
        assert_eq!(Visibility::classify(true, 1), Visibility::Visible);
        assert_eq!(Visibility::classify(true, 0), Visibility::Placeholder);
        assert_eq!(Visibility::classify(false, 0), Visibility::Absent);
        assert_eq!(Visibility::classify(false, 5), Visibility::Absent);
    }
}
