#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::{vec, vec::Vec};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{AssetKind, Balance};

fn setup_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = whitelisted_caller();
  Owner::<T>::put(&owner);
  owner
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn set_recipient_list() {
    let owner = setup_owner::<T>();
    let n = T::MaxRecipients::get();
    let recipients: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, 0)).collect();
    let amounts: Vec<Balance> = vec![1_000; n as usize];
    let max_periods: Vec<u32> = vec![2; n as usize];

    #[extrinsic_call]
    set_recipient_list(RawOrigin::Signed(owner), recipients, amounts, max_periods);

    assert_eq!(WatchList::<T>::get().len() as u32, n);
  }

  #[benchmark]
  fn perform_upkeep() {
    let owner = setup_owner::<T>();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let asset = InjectedAsset::<T>::get();
    Pallet::<T>::set_recipient_list(
      RawOrigin::Signed(owner).into(),
      vec![recipient.clone()],
      vec![1_000],
      vec![1],
    )
    .unwrap();
    T::BenchmarkHelper::fund(&Pallet::<T>::account_id(), asset, 1_000_000).unwrap();
    T::BenchmarkHelper::prepare_stream(&recipient, asset, 1).unwrap();
    T::BenchmarkHelper::set_time(1_000);
    let keeper: T::AccountId = account("keeper", 0, 0);

    #[extrinsic_call]
    perform_upkeep(RawOrigin::Signed(keeper), vec![recipient.clone()]);

    assert_eq!(Pallet::<T>::get_account_info(&recipient).periods_executed, 1);
  }

  #[benchmark]
  fn pause() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    pause(RawOrigin::Signed(owner));

    assert!(Paused::<T>::get());
  }

  #[benchmark]
  fn unpause() {
    let owner = setup_owner::<T>();
    Pallet::<T>::pause(RawOrigin::Signed(owner.clone()).into()).unwrap();

    #[extrinsic_call]
    unpause(RawOrigin::Signed(owner));

    assert!(!Paused::<T>::get());
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = setup_owner::<T>();
    let new_owner: T::AccountId = account("new_owner", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), new_owner.clone());

    assert_eq!(PendingOwner::<T>::get(), Some(new_owner));
  }

  #[benchmark]
  fn accept_ownership() {
    let owner = setup_owner::<T>();
    let new_owner: T::AccountId = account("new_owner", 0, 0);
    Pallet::<T>::transfer_ownership(RawOrigin::Signed(owner).into(), new_owner.clone()).unwrap();

    #[extrinsic_call]
    accept_ownership(RawOrigin::Signed(new_owner.clone()));

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  #[benchmark]
  fn sweep() {
    let owner = setup_owner::<T>();
    let asset = InjectedAsset::<T>::get();
    T::BenchmarkHelper::fund(&Pallet::<T>::account_id(), asset, 1_000_000).unwrap();
    let sink: T::AccountId = account("sink", 0, 0);

    #[extrinsic_call]
    sweep(RawOrigin::Signed(owner), asset, sink.clone());

    polkadot_sdk::frame_system::Pallet::<T>::assert_last_event(
      Event::Swept {
        asset,
        to: sink,
        amount: 1_000_000,
      }
      .into(),
    );
  }

  #[benchmark]
  fn set_distributor_to_owner() {
    let owner = setup_owner::<T>();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let asset = InjectedAsset::<T>::get();
    T::BenchmarkHelper::prepare_stream(&recipient, asset, 1).unwrap();

    #[extrinsic_call]
    set_distributor_to_owner(RawOrigin::Signed(owner), recipient, asset);
  }

  #[benchmark]
  fn manual_deposit() {
    let owner = setup_owner::<T>();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let asset = InjectedAsset::<T>::get();
    Pallet::<T>::set_recipient_list(
      RawOrigin::Signed(owner.clone()).into(),
      vec![recipient.clone()],
      vec![1_000],
      vec![1],
    )
    .unwrap();
    T::BenchmarkHelper::fund(&Pallet::<T>::account_id(), asset, 1_000_000).unwrap();
    T::BenchmarkHelper::prepare_stream(&recipient, asset, 1).unwrap();
    T::BenchmarkHelper::set_time(1_000);

    #[extrinsic_call]
    manual_deposit(RawOrigin::Signed(owner), recipient.clone(), asset, 1_000);

    assert_eq!(Pallet::<T>::get_account_info(&recipient).last_injection_time, 1_000);
  }

  #[benchmark]
  fn set_min_wait_period() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    set_min_wait_period(RawOrigin::Signed(owner), 600);

    assert_eq!(MinWaitPeriod::<T>::get(), 600);
  }

  #[benchmark]
  fn set_injected_asset() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    set_injected_asset(RawOrigin::Signed(owner), AssetKind::Native);

    assert_eq!(InjectedAsset::<T>::get(), AssetKind::Native);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
