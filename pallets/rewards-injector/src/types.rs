use polkadot_sdk::frame_support::pallet_prelude::*;

// Re-export AssetKind from primitives as the single source of truth
pub use primitives::{AssetKind, Balance};

/// Configuration and progress for one watched recipient.
///
/// `periods_executed` only ever grows while the record lives; re-registration
/// through `set_recipient_list` is the single way to reset it.
#[derive(
  Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct RecipientConfig {
  /// True iff the recipient is currently on the watchlist
  pub is_active: bool,
  /// Disbursement size per eligible round, fixed at registration
  pub amount_per_period: Balance,
  /// Hard cap on rounds ever executed for this recipient
  pub max_periods: u32,
  /// Rounds executed so far
  pub periods_executed: u32,
  /// Unix time of the last successful injection, 0 if none yet
  pub last_injection_time: u64,
}

/// Capability interface onto a recipient's own reward accounting.
///
/// The injector never special-cases recipient implementations: anything that
/// reports when its current reward period ends, accepts deposit
/// notifications and lets its distributor role be reassigned can be watched.
pub trait RewardStream<AccountId> {
  /// Unix time at which the recipient's current reward period for `asset`
  /// ends, or `None` when the stream does not track the pair.
  fn period_finished(recipient: &AccountId, asset: AssetKind) -> Option<u64>;

  /// Tell the recipient that `amount` of `asset` has been deposited for it.
  fn notify_deposit(recipient: &AccountId, asset: AssetKind, amount: Balance) -> DispatchResult;

  /// Reassign the identity authorised to deposit rewards for the pair.
  fn set_distributor(
    recipient: &AccountId,
    asset: AssetKind,
    new_distributor: AccountId,
  ) -> DispatchResult;
}
