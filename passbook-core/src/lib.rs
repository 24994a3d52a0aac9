//! passbook-core: canonical statement types, amount/date normalizers, and the
//! bank signature catalog

pub mod catalog;
pub mod identify;
pub mod normalize;
pub mod transaction;

pub use catalog::{BankSignature, IFSC_PRIORITY, signature, signatures};
pub use identify::identify;
pub use normalize::{
    Amount, AmountDialect, Direction, direction_marker, fold_whitespace, normalize_amount,
    normalize_balance, normalize_date,
};
pub use transaction::{BankTag, ParseResult, StatementMetadata, Transaction, UNKNOWN_BANK};
