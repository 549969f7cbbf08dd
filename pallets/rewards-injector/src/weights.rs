#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn set_recipient_list() -> Weight;
	fn perform_upkeep() -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn transfer_ownership() -> Weight;
	fn accept_ownership() -> Weight;
	fn sweep() -> Weight;
	fn set_distributor_to_owner() -> Weight;
	fn manual_deposit() -> Weight;
	fn set_min_wait_period() -> Weight;
	fn set_injected_asset() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn set_recipient_list() -> Weight {
		Weight::from_parts(50_000_000, 4000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	// Worst case: a full MaxUpkeepBatch of candidates, all still eligible
	fn perform_upkeep() -> Weight {
		Weight::from_parts(150_000_000, 8000)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn pause() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn unpause() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn accept_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn sweep() -> Weight {
		Weight::from_parts(40_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_distributor_to_owner() -> Weight {
		Weight::from_parts(25_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn manual_deposit() -> Weight {
		Weight::from_parts(45_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn set_min_wait_period() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_injected_asset() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn set_recipient_list() -> Weight {
		Weight::from_parts(50_000_000, 4000)
	}
	fn perform_upkeep() -> Weight {
		Weight::from_parts(150_000_000, 8000)
	}
	fn pause() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn unpause() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn accept_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn sweep() -> Weight {
		Weight::from_parts(40_000_000, 3000)
	}
	fn set_distributor_to_owner() -> Weight {
		Weight::from_parts(25_000_000, 2000)
	}
	fn manual_deposit() -> Weight {
		Weight::from_parts(45_000_000, 3000)
	}
	fn set_min_wait_period() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_injected_asset() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
}
