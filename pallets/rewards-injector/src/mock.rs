extern crate alloc;

use crate as pallet_rewards_injector;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{AssetKind, Balance, UNITS};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub const ADMIN: u64 = 1;
pub const KEEPER: u64 = 2;
pub const STRANGER: u64 = 3;
pub const GAUGE_A: u64 = 10;
pub const GAUGE_B: u64 = 11;
pub const GAUGE_C: u64 = 12;

pub const REWARD_ASSET_ID: u32 = 1;
pub const REWARD_ASSET: AssetKind = AssetKind::Local(REWARD_ASSET_ID);
pub const WEEKLY_AMOUNT: Balance = 200 * UNITS;
pub const MIN_WAIT: u64 = 300;

/// Period length the mock streams restart with on every deposit
pub const STREAM_PERIOD: u64 = 7 * 24 * 60 * 60;

// State containers for stateful mocks
thread_local! {
    // Reward streams: (recipient, asset) -> (distributor, period_finished)
    pub static STREAMS: RefCell<BTreeMap<(u64, AssetKind), (u64, u64)>> = const { RefCell::new(BTreeMap::new()) };

    // Every notify_deposit the mock observed, in call order
    pub static NOTIFIED: RefCell<Vec<(u64, AssetKind, Balance)>> = const { RefCell::new(Vec::new()) };
}

// Helper methods to setup state
pub fn add_reward_stream(recipient: u64, asset: AssetKind, distributor: u64, period_finished: u64) {
  STREAMS.with(|s| {
    s.borrow_mut()
      .insert((recipient, asset), (distributor, period_finished))
  });
}

pub fn set_period_finished(recipient: u64, asset: AssetKind, when: u64) {
  STREAMS.with(|s| {
    if let Some(entry) = s.borrow_mut().get_mut(&(recipient, asset)) {
      entry.1 = when;
    }
  });
}

pub fn stream_distributor(recipient: u64, asset: AssetKind) -> Option<u64> {
  STREAMS.with(|s| s.borrow().get(&(recipient, asset)).map(|entry| entry.0))
}

pub fn stream_period_finished(recipient: u64, asset: AssetKind) -> Option<u64> {
  STREAMS.with(|s| s.borrow().get(&(recipient, asset)).map(|entry| entry.1))
}

pub fn notified_deposits() -> Vec<(u64, AssetKind, Balance)> {
  NOTIFIED.with(|n| n.borrow().clone())
}

/// Move the mock unix clock (pallet-timestamp stores milliseconds)
pub fn set_now(now_secs: u64) {
  Timestamp::set_timestamp(now_secs * 1_000);
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Timestamp: polkadot_sdk::pallet_timestamp,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    RewardsInjector: pallet_rewards_injector,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

/// Stateful stand-in for the recipients' reward accounting. Behaves like a
/// live gauge: deposits are only accepted from the registered distributor and
/// restart the reward period from the current time.
pub struct MockRewardStream;
impl pallet_rewards_injector::RewardStream<u64> for MockRewardStream {
  fn period_finished(recipient: &u64, asset: AssetKind) -> Option<u64> {
    stream_period_finished(*recipient, asset)
  }

  fn notify_deposit(recipient: &u64, asset: AssetKind, amount: Balance) -> DispatchResult {
    STREAMS.with(|s| {
      let mut streams = s.borrow_mut();
      let entry = streams
        .get_mut(&(*recipient, asset))
        .ok_or(DispatchError::Other("no reward stream for pair"))?;
      if entry.0 != RewardsInjector::account_id() {
        return Err(DispatchError::Other("depositor is not the distributor"));
      }
      let now = Timestamp::get() / 1_000;
      entry.1 = now + STREAM_PERIOD;
      Ok(())
    })?;
    NOTIFIED.with(|n| n.borrow_mut().push((*recipient, asset, amount)));
    Ok(())
  }

  fn set_distributor(recipient: &u64, asset: AssetKind, new_distributor: u64) -> DispatchResult {
    STREAMS.with(|s| {
      s.borrow_mut()
        .get_mut(&(*recipient, asset))
        .map(|entry| entry.0 = new_distributor)
        .ok_or(DispatchError::Other("no reward stream for pair"))
    })
  }
}

pub struct InjectorPalletId;
impl Get<PalletId> for InjectorPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::REWARDS_INJECTOR_PALLET_ID)
  }
}

impl pallet_rewards_injector::Config for Test {
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = InjectorBenchmarkHelper;
  type Assets = Assets;
  type Currency = Balances;
  type RewardStream = MockRewardStream;
  type TimeProvider = Timestamp;
  type PalletId = InjectorPalletId;
  type MaxRecipients = ConstU32<8>;
  type MaxUpkeepBatch = ConstU32<4>;
  type WeightInfo = ();
}

#[cfg(feature = "runtime-benchmarks")]
pub struct InjectorBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_rewards_injector::BenchmarkHelper<u64> for InjectorBenchmarkHelper {
  fn fund(who: &u64, asset: AssetKind, amount: Balance) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::Currency;
    use polkadot_sdk::frame_support::traits::fungibles::Mutate;
    match asset {
      AssetKind::Native => {
        let _ = Balances::deposit_creating(who, amount);
      }
      AssetKind::Local(id) => {
        let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), id, 1, true, 1);
        Assets::mint_into(id, who, amount)?;
      }
    }
    Ok(())
  }

  fn prepare_stream(
    recipient: &u64,
    asset: AssetKind,
    period_finished: u64,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    add_reward_stream(
      *recipient,
      asset,
      RewardsInjector::account_id(),
      period_finished,
    );
    Ok(())
  }

  fn set_time(now: u64) {
    set_now(now);
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![
      (REWARD_ASSET_ID, ADMIN, true, 1),
      (2, ADMIN, true, 1),
      (3, ADMIN, true, 1),
    ],
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Injector genesis: owner + wait period + disbursed asset, and a provider
  // ref for the fund-holding account
  pallet_rewards_injector::GenesisConfig::<Test> {
    owner: Some(ADMIN),
    min_wait_period: MIN_WAIT,
    injected_asset: REWARD_ASSET,
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Reset State
  STREAMS.with(|s| s.borrow_mut().clear());
  NOTIFIED.with(|n| n.borrow_mut().clear());

  t.into()
}
