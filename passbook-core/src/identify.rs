//! Resolve raw document text to the issuing bank.

use crate::catalog::{IFSC_PRIORITY, signature, signatures};
use crate::transaction::BankTag;

/// Identify the issuing bank from the whole document's extracted text.
///
/// IFSC fragments are tried first in [`IFSC_PRIORITY`] order, then the
/// keyword fragments of each signature in catalog order. `None` means
/// `UNKNOWN`: callers must not substitute a default bank.
pub fn identify(text: &str) -> Option<BankTag> {
    let lowered = text.to_lowercase();

    let by_ifsc = IFSC_PRIORITY.iter().copied().find(|tag| {
        signature(*tag)
            .ifsc_prefix
            .is_some_and(|prefix| lowered.contains(prefix))
    });
    if by_ifsc.is_some() {
        return by_ifsc;
    }

    signatures()
        .iter()
        .find(|sig| sig.matches_keywords(&lowered))
        .map(|sig| sig.tag)
}
