//! Ecosystem Constants for the Rewards Injector Workspace
//!
//! This module centralizes system-level constants: the pallet ID used to
//! derive the injector's fund-holding account and the fundamental balance
//! units shared by pallets and test fixtures.
//!
//! These constants are the single source of truth and are re-used across all
//! runtime configurations via the primitives crate.

/// Balance type alias for consistency across the workspace
pub type Balance = u128;

/// One whole unit of the 18-decimal reward tokens this system disburses
pub const UNITS: Balance = 1_000_000_000_000_000_000;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Rewards Injector pallet ID (periodic disbursement controller)
  pub const REWARDS_INJECTOR_PALLET_ID: &[u8; 8] = b"rwinject";
}
