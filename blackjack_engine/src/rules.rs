use serde::{Deserialize, Serialize};

/// The named table-rule toggles, fixed for the life of a game.
///
/// Dealer play reads only the soft-17 pair; the remaining flags describe
/// options (splitting, doubling, surrender, tips) that are surfaced to the
/// player but resolved outside the engine.
///
/// When `dealer_hits_soft_17` and `dealer_stands_soft_17` are both set the
/// hit rule wins on a soft 17, matching the precedence this configuration
/// has always had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRules {
    /// Doubling down allowed after a split.
    pub double_after_split: bool,
    /// Doubling down restricted to totals of ten or more.
    pub double_only_ten_plus: bool,
    /// Dealer hits a soft 17.
    pub dealer_hits_soft_17: bool,
    /// Late surrender offered.
    pub late_surrender: bool,
    /// Split aces may be resplit.
    pub resplit_aces: bool,
    /// Dealer stands on a soft 17.
    pub dealer_stands_soft_17: bool,
    /// Dealer keeps tips rather than pooling them.
    pub dealer_keeps_tips: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        TableRules {
            double_after_split: false,
            double_only_ten_plus: false,
            dealer_hits_soft_17: false,
            late_surrender: false,
            resplit_aces: false,
            dealer_stands_soft_17: true,
            dealer_keeps_tips: false,
        }
    }
}

impl TableRules {
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    #[must_use]
    pub const fn with_double_only_ten_plus(mut self, restricted: bool) -> Self {
        self.double_only_ten_plus = restricted;
        self
    }

    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    #[must_use]
    pub const fn with_late_surrender(mut self, offered: bool) -> Self {
        self.late_surrender = offered;
        self
    }

    #[must_use]
    pub const fn with_resplit_aces(mut self, allowed: bool) -> Self {
        self.resplit_aces = allowed;
        self
    }

    #[must_use]
    pub const fn with_dealer_stands_soft_17(mut self, stands: bool) -> Self {
        self.dealer_stands_soft_17 = stands;
        self
    }

    #[must_use]
    pub const fn with_dealer_keeps_tips(mut self, keeps: bool) -> Self {
        self.dealer_keeps_tips = keeps;
        self
    }
}
