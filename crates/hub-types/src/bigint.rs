#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, the numeric domain of ledger amounts and EVM values.
    pub struct U256(4);
}
