//! Bank-specific table layouts, one module per supported bank.

pub mod axis;
pub mod bandhan;
pub mod bob;
pub mod canara;
pub mod cbi;
pub mod federal;
pub mod hdfc;
pub mod hsbc;
pub mod idbi;
pub mod indian;
pub mod indusind;
pub mod iob;
pub mod karnataka;
pub mod kotak;
pub mod pnb;
pub mod sbi;
pub mod union;
pub mod yes;

use crate::strategy::ColumnLayout;

/// Every bank with a known transaction-table layout. Jammu and Kashmir Bank
/// is identified by the catalog but has no layout, so it parses as unknown.
pub fn layouts() -> Vec<ColumnLayout> {
    vec![
        axis::layout(),
        idbi::layout(),
        iob::layout(),
        indian::layout(),
        sbi::layout(),
        federal::layout(),
        union::layout(),
        hsbc::layout(),
        bandhan::layout(),
        yes::layout(),
        bob::layout(),
        hdfc::layout(),
        pnb::layout(),
        cbi::layout(),
        karnataka::layout(),
        kotak::layout(),
        canara::layout(),
        indusind::layout(),
    ]
}
