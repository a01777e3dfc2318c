use super::visibility::Visibility;
use crate::cards::Holding;

/// One seat's parsed holding and its classification.
///
/// The classification is derived from the scan when the state is built and
/// cannot be overridden afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HandState {
    visibility: Visibility,
    holding: Holding,
}

impl HandState {
    /// Result of a suit scan: whether all four markers were found, and the
    /// ranks collected after them.
    pub fn scanned(markers: bool, holding: Holding) -> Self {
        let holding = match markers {
            true => holding,
            false => Holding::empty(),
        };
        Self {
            visibility: Visibility::classify(markers, holding.size()),
            holding,
        }
    }
    pub fn absent() -> Self {
        Self::default()
    }
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
    /// Cards that take part in diffing. Only visible seats contribute.
    pub fn cards(&self) -> Option<Holding> {
        self.is_visible().then_some(self.holding)
    }
    pub fn holding(&self) -> Holding {
        self.holding
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.visibility {
            Visibility::Visible => write!(f, "{}", self.holding),
            other => write!(f, "({})", other),
        }
    }
}
