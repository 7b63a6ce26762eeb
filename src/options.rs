//! Round configuration options.

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pocket21::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_dealer_stands_on_soft_17(false)
///     .with_win_reward(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Whether the dealer stands on soft 17.
    pub dealer_stands_on_soft_17: bool,
    /// Points credited to the player for a won round.
    pub win_reward: u64,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on_soft_17: true,
            win_reward: 1,
        }
    }
}

impl RoundOptions {
    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use pocket21::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on_soft_17(false);
    /// assert_eq!(options.dealer_stands_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on_soft_17(mut self, stand: bool) -> Self {
        self.dealer_stands_on_soft_17 = stand;
        self
    }

    /// Sets the points credited for a won round.
    ///
    /// # Example
    ///
    /// ```
    /// use pocket21::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_win_reward(5);
    /// assert_eq!(options.win_reward, 5);
    /// ```
    #[must_use]
    pub const fn with_win_reward(mut self, reward: u64) -> Self {
        self.win_reward = reward;
        self
    }
}
