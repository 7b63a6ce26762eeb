//! Round phase and ticket types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No cards dealt; waiting for the deal action.
    Betting,
    /// Player may hit or stand.
    Playing,
    /// Dealer plays out their hand.
    Dealer,
    /// Round finished; waiting for replay.
    Result,
}

/// Identifies the round a deferred action was issued for.
///
/// UI layers often schedule engine calls behind animation delays. A ticket
/// taken during one round is rejected by every mutating method once the
/// table has been reset, so a stale callback can never touch the next
/// round's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket(pub(crate) u64);
