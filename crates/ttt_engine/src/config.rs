use ttt_core::Mark;

/// Which mark the engine plays for.
///
/// The maximizer is the side the engine recommends moves for; its opponent
/// minimizes. Scores are always reported from the maximizer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roles {
    maximizer: Mark,
}

impl Roles {
    pub fn new(maximizer: Mark) -> Self {
        Self { maximizer }
    }

    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    pub fn minimizer(&self) -> Mark {
        self.maximizer.opponent()
    }

    /// The mark placed by the side to move.
    pub fn mark_for(&self, maximizing: bool) -> Mark {
        if maximizing {
            self.maximizer()
        } else {
            self.minimizer()
        }
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.minimizer())
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub roles: Roles,
    /// When set, boards where this mark trails its opponent are rejected.
    pub first_mover: Option<Mark>,
    /// Use alpha-beta pruning. Scores are identical either way.
    pub pruning: bool,
}

impl EngineConfig {
    pub fn new(roles: Roles) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    pub fn with_first_mover(mut self, first_mover: Mark) -> Self {
        self.first_mover = Some(first_mover);
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
