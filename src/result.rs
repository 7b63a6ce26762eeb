//! Round outcome types.

/// Final outcome of a round.
///
/// Derived deterministically from the final hand values: a busted player
/// loses regardless of the dealer's hand, a busted dealer loses to any
/// standing player, otherwise the strictly higher value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player wins.
    PlayerWin,
    /// The dealer wins.
    DealerWin,
    /// Equal values; nobody wins.
    Draw,
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value (hole card included).
    pub dealer_value: u8,
    /// Points credited for this round (zero unless the player won).
    pub reward: u64,
}
