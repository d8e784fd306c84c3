pub mod mock_carrier_lookup;

#[allow(unused_imports)]
pub use mock_carrier_lookup::{sample_info, MockCarrierLookup};
