//! Rewards Injector Pallet
//!
//! Periodic disbursement controller: holds a reward budget in a pallet-owned
//! account and, when polled by an untrusted keeper, pushes a fixed amount per
//! period to each watched recipient, enforcing a minimum inter-injection
//! interval, a per-recipient round cap and a global pause switch.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod types;
pub use types::{RecipientConfig, RewardStream};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn fund(
    who: &AccountId,
    asset: primitives::AssetKind,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn prepare_stream(
    recipient: &AccountId,
    asset: primitives::AssetKind,
    period_finished: u64,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn set_time(now: u64);
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use alloc::vec::Vec;
  use frame::deps::frame_support::{
    PalletId,
    storage::with_storage_layer,
    traits::{
      UnixTime,
      fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
      tokens::Preservation,
    },
  };
  use frame::deps::sp_runtime::traits::{AccountIdConversion, Zero};
  use frame::prelude::*;

  use crate::types::{AssetKind, Balance, RecipientConfig, RewardStream};

  /// Configuration trait for the rewards injector pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets pallet for disbursing and sweeping local fungible tokens
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// The currency trait for the native token
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Reward accounting of the watched recipients
    type RewardStream: RewardStream<Self::AccountId>;

    /// Trusted unix clock the eligibility window is measured against
    type TimeProvider: UnixTime;

    /// The pallet ID deriving the injector's fund-holding account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Upper bound on the watchlist length
    #[pallet::constant]
    type MaxRecipients: Get<u32>;

    /// Upper bound on candidates encoded per upkeep round
    #[pallet::constant]
    type MaxUpkeepBatch: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  /// The pallet struct
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Account whose signature gates the admin surface
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Pending two-phase ownership transfer slot, cleared on acceptance
  #[pallet::storage]
  #[pallet::getter(fn pending_owner)]
  pub type PendingOwner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Global pause switch gating both the eligibility scan and the executor
  #[pallet::storage]
  #[pallet::getter(fn paused)]
  pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Minimum seconds between two injections for the same recipient
  #[pallet::storage]
  #[pallet::getter(fn min_wait_period)]
  pub type MinWaitPeriod<T: Config> = StorageValue<_, u64, ValueQuery>;

  /// The asset pushed to recipients on each round
  #[pallet::storage]
  #[pallet::getter(fn injected_asset)]
  pub type InjectedAsset<T: Config> = StorageValue<_, AssetKind, ValueQuery>;

  /// Active recipients in registration order
  #[pallet::storage]
  pub type WatchList<T: Config> =
    StorageValue<_, BoundedVec<T::AccountId, T::MaxRecipients>, ValueQuery>;

  /// Per-recipient configuration and progress
  #[pallet::storage]
  pub type Recipients<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, RecipientConfig>;

  /// Total amount ever pushed through the executor
  #[pallet::storage]
  #[pallet::getter(fn total_injected)]
  pub type TotalInjected<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Events for the rewards injector pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// The watchlist was replaced wholesale
    RecipientListSet { count: u32 },
    /// A reward round was executed for a recipient
    InjectionPerformed {
      recipient: T::AccountId,
      amount: Balance,
      periods_executed: u32,
    },
    /// Operator-driven deposit outside the eligibility engine
    ManualDepositPerformed {
      recipient: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    },
    /// Injections halted
    InjectionsPaused,
    /// Injections resumed
    InjectionsUnpaused,
    /// Ownership handover offered to a new account
    OwnershipTransferStarted { from: T::AccountId, to: T::AccountId },
    /// Ownership handover completed by the pending owner
    OwnershipTransferred {
      previous: T::AccountId,
      new: T::AccountId,
    },
    /// Full balance of an asset recovered to a target account
    Swept {
      asset: AssetKind,
      to: T::AccountId,
      amount: Balance,
    },
    /// Reward stream distributor role handed back to the owner
    DistributorReassigned {
      recipient: T::AccountId,
      asset: AssetKind,
      new_distributor: T::AccountId,
    },
    /// Minimum inter-injection interval updated
    MinWaitPeriodUpdated { old_period: u64, new_period: u64 },
    /// Disbursed asset updated
    InjectedAssetUpdated {
      old_asset: AssetKind,
      new_asset: AssetKind,
    },
  }

  /// Errors for the rewards injector pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Caller lacks the required role
    Unauthorized,
    /// Operation blocked by the global pause switch
    Paused,
    /// Malformed registration arrays or candidate set
    InvalidInput,
    /// The reward stream does not track this (recipient, asset) pair
    NotFound,
    /// Watchlist would exceed the configured bound
    TooManyRecipients,
    /// Pause requested while already paused
    AlreadyPaused,
    /// Unpause requested while active
    NotPaused,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Replace the watchlist wholesale.
    ///
    /// Every named recipient gets a fresh record with zeroed progress;
    /// recipients previously active but omitted here drop off the list.
    /// The three arrays are positional and must have equal length.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::set_recipient_list())]
    pub fn set_recipient_list(
      origin: OriginFor<T>,
      recipients: Vec<T::AccountId>,
      amounts: Vec<Balance>,
      max_periods: Vec<u32>,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        recipients.len() == amounts.len() && recipients.len() == max_periods.len(),
        Error::<T>::InvalidInput
      );
      // A duplicate would break the watchlist <-> record bijection.
      for (i, recipient) in recipients.iter().enumerate() {
        ensure!(
          !recipients[i + 1..].contains(recipient),
          Error::<T>::InvalidInput
        );
      }
      let watch_list: BoundedVec<T::AccountId, T::MaxRecipients> =
        BoundedVec::try_from(recipients.clone()).map_err(|_| Error::<T>::TooManyRecipients)?;

      for previous in WatchList::<T>::get() {
        Recipients::<T>::remove(&previous);
      }
      for ((recipient, amount), cap) in recipients.iter().zip(amounts).zip(max_periods) {
        Recipients::<T>::insert(
          recipient,
          RecipientConfig {
            is_active: true,
            amount_per_period: amount,
            max_periods: cap,
            periods_executed: 0,
            last_injection_time: 0,
          },
        );
      }
      let count = watch_list.len() as u32;
      WatchList::<T>::put(watch_list);

      Self::deposit_event(Event::RecipientListSet { count });
      Ok(())
    }

    /// Execute injections for the given candidate set.
    ///
    /// Callable by anyone; the intended caller is an automated keeper. The
    /// candidate set is an untrusted hint (typically relayed from
    /// [`Pallet::check_upkeep`]): every entry is re-validated against current
    /// state, and entries that no longer qualify are skipped silently so a
    /// stale or adversarial set can never double-pay a round or poison the
    /// rest of the batch.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::perform_upkeep())]
    pub fn perform_upkeep(
      origin: OriginFor<T>,
      candidates: Vec<T::AccountId>,
    ) -> DispatchResult {
      ensure_signed(origin)?;
      ensure!(!Paused::<T>::get(), Error::<T>::Paused);
      ensure!(
        candidates.len() <= T::MaxUpkeepBatch::get() as usize,
        Error::<T>::InvalidInput
      );

      let now = T::TimeProvider::now().as_secs();
      let asset = InjectedAsset::<T>::get();
      let source = Self::account_id();

      for recipient in candidates {
        let Some(mut config) = Recipients::<T>::get(&recipient) else {
          continue;
        };
        if !Self::is_due(&recipient, &config, asset, now) {
          continue;
        }
        let amount = config.amount_per_period;
        if Self::asset_balance(asset, &source) < amount {
          continue;
        }
        // Transfer, notification and bookkeeping commit or roll back as one
        // unit per candidate.
        let _: DispatchResult = with_storage_layer(|| {
          Self::transfer_asset(asset, &source, &recipient, amount)?;
          T::RewardStream::notify_deposit(&recipient, asset, amount)?;
          config.periods_executed = config.periods_executed.saturating_add(1);
          config.last_injection_time = now;
          Recipients::<T>::insert(&recipient, config);
          TotalInjected::<T>::mutate(|total| *total = total.saturating_add(amount));
          Self::deposit_event(Event::InjectionPerformed {
            recipient: recipient.clone(),
            amount,
            periods_executed: config.periods_executed,
          });
          Ok(())
        });
      }
      Ok(())
    }

    /// Halt the eligibility scan and the executor (owner only)
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);
      Paused::<T>::put(true);
      Self::deposit_event(Event::InjectionsPaused);
      Ok(())
    }

    /// Resume the eligibility scan and the executor (owner only)
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
      Paused::<T>::put(false);
      Self::deposit_event(Event::InjectionsUnpaused);
      Ok(())
    }

    /// Offer ownership to `to`; nothing changes until `to` accepts
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, to: T::AccountId) -> DispatchResult {
      let from = Self::ensure_owner(origin)?;
      ensure!(from != to, Error::<T>::InvalidInput);
      PendingOwner::<T>::put(&to);
      Self::deposit_event(Event::OwnershipTransferStarted { from, to });
      Ok(())
    }

    /// Complete a pending ownership transfer (pending owner only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::accept_ownership())]
    pub fn accept_ownership(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(
        PendingOwner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      let previous = Owner::<T>::get().ok_or(Error::<T>::Unauthorized)?;
      Owner::<T>::put(&who);
      PendingOwner::<T>::kill();
      Self::deposit_event(Event::OwnershipTransferred { previous, new: who });
      Ok(())
    }

    /// Recover the injector's entire balance of `asset` to `to` (owner only).
    ///
    /// Round bookkeeping is left untouched.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::sweep())]
    pub fn sweep(origin: OriginFor<T>, asset: AssetKind, to: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let source = Self::account_id();
      let amount = Self::asset_balance(asset, &source);
      if !amount.is_zero() {
        Self::transfer_asset(asset, &source, &to, amount)?;
      }
      Self::deposit_event(Event::Swept { asset, to, amount });
      Ok(())
    }

    /// Hand the reward stream's distributor role for the pair back to the
    /// owner (owner only). Emergency escape hatch for when the injector
    /// should stop being the authorised depositor.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_distributor_to_owner())]
    pub fn set_distributor_to_owner(
      origin: OriginFor<T>,
      recipient: T::AccountId,
      asset: AssetKind,
    ) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      ensure!(
        T::RewardStream::period_finished(&recipient, asset).is_some(),
        Error::<T>::NotFound
      );
      T::RewardStream::set_distributor(&recipient, asset, owner.clone())?;
      Self::deposit_event(Event::DistributorReassigned {
        recipient,
        asset,
        new_distributor: owner,
      });
      Ok(())
    }

    /// Deposit `amount` of `asset` to `recipient` immediately, bypassing
    /// every eligibility check (owner only). Stamps the last injection time
    /// when a record exists but never consumes a round.
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::manual_deposit())]
    pub fn manual_deposit(
      origin: OriginFor<T>,
      recipient: T::AccountId,
      asset: AssetKind,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let source = Self::account_id();
      Self::transfer_asset(asset, &source, &recipient, amount)?;
      T::RewardStream::notify_deposit(&recipient, asset, amount)?;
      let now = T::TimeProvider::now().as_secs();
      Recipients::<T>::mutate_exists(&recipient, |record| {
        if let Some(config) = record {
          config.last_injection_time = now;
        }
      });
      Self::deposit_event(Event::ManualDepositPerformed {
        recipient,
        asset,
        amount,
      });
      Ok(())
    }

    /// Update the minimum inter-injection interval (owner only)
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::set_min_wait_period())]
    pub fn set_min_wait_period(origin: OriginFor<T>, new_period: u64) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_period = MinWaitPeriod::<T>::get();
      MinWaitPeriod::<T>::put(new_period);
      Self::deposit_event(Event::MinWaitPeriodUpdated {
        old_period,
        new_period,
      });
      Ok(())
    }

    /// Update the disbursed asset (owner only)
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::set_injected_asset())]
    pub fn set_injected_asset(origin: OriginFor<T>, new_asset: AssetKind) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_asset = InjectedAsset::<T>::get();
      InjectedAsset::<T>::put(new_asset);
      Self::deposit_event(Event::InjectedAssetUpdated {
        old_asset,
        new_asset,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account that holds the injector's reward budget
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Active recipients in registration order
    pub fn get_watch_list() -> Vec<T::AccountId> {
      WatchList::<T>::get().into_inner()
    }

    /// Snapshot of a recipient's configuration and progress. Unknown
    /// identities read as the zeroed, inactive record.
    pub fn get_account_info(recipient: &T::AccountId) -> RecipientConfig {
      Recipients::<T>::get(recipient).unwrap_or_default()
    }

    /// Read-only eligibility scan.
    ///
    /// Fails with [`Error::Paused`] while the pause switch is on; otherwise
    /// walks the watchlist in registration order and collects up to
    /// `MaxUpkeepBatch` recipients whose round is due and still covered by
    /// the running balance. Never mutates state, so any number of keepers
    /// may evaluate it concurrently and speculatively; the returned set is
    /// a hint for [`Pallet::perform_upkeep`], not a commitment.
    pub fn check_upkeep(
    ) -> Result<(bool, BoundedVec<T::AccountId, T::MaxUpkeepBatch>), DispatchError> {
      ensure!(!Paused::<T>::get(), Error::<T>::Paused);
      let now = T::TimeProvider::now().as_secs();
      let asset = InjectedAsset::<T>::get();
      let mut available = Self::asset_balance(asset, &Self::account_id());
      let mut candidates: BoundedVec<T::AccountId, T::MaxUpkeepBatch> = BoundedVec::new();
      for recipient in WatchList::<T>::get() {
        let Some(config) = Recipients::<T>::get(&recipient) else {
          continue;
        };
        if !Self::is_due(&recipient, &config, asset, now) {
          continue;
        }
        // Deplete the shared balance virtually: an underfunded recipient is
        // skipped for this scan, never blocking the ones after it.
        if available < config.amount_per_period {
          continue;
        }
        available = available.saturating_sub(config.amount_per_period);
        if candidates.try_push(recipient).is_err() {
          break;
        }
      }
      Ok((!candidates.is_empty(), candidates))
    }

    /// Per-recipient eligibility predicate, shared verbatim by the scan and
    /// the executor's re-validation. Balance is checked by the callers.
    fn is_due(recipient: &T::AccountId, config: &RecipientConfig, asset: AssetKind, now: u64) -> bool {
      if !config.is_active || config.periods_executed >= config.max_periods {
        return false;
      }
      if config.last_injection_time != 0
        && now < config.last_injection_time.saturating_add(MinWaitPeriod::<T>::get())
      {
        return false;
      }
      matches!(
        T::RewardStream::period_finished(recipient, asset),
        Some(end) if now > end
      )
    }

    fn asset_balance(asset: AssetKind, who: &T::AccountId) -> Balance {
      match asset {
        AssetKind::Native => T::Currency::balance(who),
        AssetKind::Local(id) => T::Assets::balance(id, who),
      }
    }

    fn transfer_asset(
      asset: AssetKind,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      match asset {
        AssetKind::Native => {
          T::Currency::transfer(from, to, amount, Preservation::Expendable)?;
        }
        AssetKind::Local(id) => {
          T::Assets::transfer(id, from, to, amount, Preservation::Expendable)?;
        }
      }
      Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(
        Owner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Ok(who)
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Initial admin; the admin surface is inert until an owner is set
    pub owner: Option<T::AccountId>,
    /// Minimum seconds between injections per recipient
    pub min_wait_period: u64,
    /// Asset disbursed on each round
    pub injected_asset: AssetKind,
    #[serde(skip)]
    pub _marker: PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      MinWaitPeriod::<T>::put(self.min_wait_period);
      InjectedAsset::<T>::put(self.injected_asset);
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
