//! Static bank signature catalog.
//!
//! Each entry carries the fragments used to recognise the issuing bank
//! (IFSC prefix, name keywords), the account-number pattern used for
//! metadata, and the header vocabulary its transaction tables print.
//! Built once, never mutated; shared freely across threads.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::normalize::{AmountDialect, normalize_amount};
use crate::transaction::BankTag;

#[derive(Debug)]
pub struct BankSignature {
    pub tag: BankTag,
    pub name: &'static str,
    /// Lower-case fragments matched against lower-cased document text
    pub keywords: &'static [&'static str],
    /// Lower-case IFSC prefix plus the leading zero, e.g. `sbin0`
    pub ifsc_prefix: Option<&'static str>,
    pub account_pattern: Option<&'static str>,
    pub opening_balance_pattern: Option<&'static str>,
    /// Header vocabulary of the transaction table (table detection only)
    pub headers: &'static [&'static str],
}

static CATALOG: [BankSignature; 19] = [
    BankSignature {
        tag: BankTag::Axis,
        name: "Axis Bank",
        keywords: &["statement of axis bank", "axis bank"],
        ifsc_prefix: Some("utib0"),
        account_pattern: Some(r"Account No[.:]?\s*(\d+)"),
        opening_balance_pattern: Some(r"Opening Balance:\s*INR\s*([\d,]+\.?\d{0,2})"),
        headers: &["S.No", "Transaction Date", "Particulars", "Amount", "Debit/Credit", "Balance"],
    },
    BankSignature {
        tag: BankTag::Idbi,
        name: "IDBI Bank",
        keywords: &["idbi bank", "idbi", "ibkl"],
        ifsc_prefix: Some("ibkl0"),
        account_pattern: Some(r"\d{16}"),
        opening_balance_pattern: None,
        headers: &["Date", "Particulars", "Chq. no", "Withdrawals", "Deposits", "Balance"],
    },
    BankSignature {
        tag: BankTag::Iob,
        name: "Indian Overseas Bank",
        keywords: &["indian overseas bank", "iob"],
        ifsc_prefix: Some("ioba0"),
        account_pattern: Some(r"Account No[.:]?\s*(\d+)"),
        opening_balance_pattern: None,
        headers: &[
            "Date",
            "Value Date",
            "Particulars",
            "Ref No",
            "Cheque No",
            "Transaction Type",
            "Debit",
            "Credit",
            "Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Indian,
        name: "Indian Bank",
        keywords: &["indian bank", "idib"],
        ifsc_prefix: Some("idib0"),
        account_pattern: Some(r"\d{10}"),
        opening_balance_pattern: None,
        headers: &["Post Date", "Value Date", "Details", "Chq.No.", "Debit", "Credit", "Balance"],
    },
    BankSignature {
        tag: BankTag::Sbi,
        name: "State Bank of India",
        keywords: &["sbi", "sbin", "state bank of india"],
        ifsc_prefix: Some("sbin0"),
        account_pattern: Some(r"\d{11,17}"),
        opening_balance_pattern: None,
        headers: &[
            "Txn Date",
            "Value Date",
            "Description",
            "Ref No./Cheque No.",
            "Branch Code",
            "Debit",
            "Credit",
            "Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Jk,
        name: "Jammu and Kashmir Bank",
        keywords: &["jammu and kashmir bank", "jaka"],
        ifsc_prefix: Some("jaka0"),
        account_pattern: Some(r"\d{16}"),
        opening_balance_pattern: None,
        headers: &[],
    },
    BankSignature {
        tag: BankTag::Federal,
        name: "Federal Bank",
        keywords: &["federal bank", "fdrl"],
        ifsc_prefix: Some("fdrl0"),
        account_pattern: Some(r"\d{14}"),
        opening_balance_pattern: None,
        headers: &[
            "Date",
            "Value Date",
            "Particulars",
            "Tran Type",
            "Tran ID",
            "Withdrawals",
            "Deposits",
            "Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Union,
        name: "Union Bank of India",
        keywords: &["union bank", "ubin"],
        ifsc_prefix: Some("ubin0"),
        account_pattern: Some(r"\d{15}"),
        opening_balance_pattern: None,
        headers: &["S.No", "Date", "Transaction Id", "Remarks", "Amount(Rs.)", "Balance(Rs.)"],
    },
    BankSignature {
        tag: BankTag::Hsbc,
        name: "HSBC",
        keywords: &["hsbc", "ifsc code: hsbc"],
        ifsc_prefix: Some("hsbc0"),
        account_pattern: Some(r"\d{3}-\d{6}-\d{3}"),
        opening_balance_pattern: None,
        headers: &["Date Transaction Details", "Deposits", "Withdrawals", "Balance"],
    },
    BankSignature {
        tag: BankTag::Bandhan,
        name: "Bandhan Bank",
        keywords: &["bandhan bank", "bandhan", "bdbl", "ifsc bdbl"],
        ifsc_prefix: Some("bdbl0"),
        account_pattern: Some(r"Account Number\s*(\d+)"),
        opening_balance_pattern: None,
        headers: &["Transaction Date", "Value Date", "Description", "Amount", "Dr / Cr", "Balance"],
    },
    BankSignature {
        tag: BankTag::Yes,
        name: "Yes Bank",
        keywords: &["branch name: yes bank ltd", "yes bank"],
        ifsc_prefix: Some("yesb0"),
        account_pattern: Some(r"Account No[.:]?\s*(\d+)"),
        opening_balance_pattern: None,
        headers: &[
            "Transaction Date",
            "Value Date",
            "Description",
            "Reference Number",
            "Withdrawals",
            "Deposits",
            "Running Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Bob,
        name: "Bank of Baroda",
        keywords: &["bank of baroda", "barb"],
        ifsc_prefix: Some("barb0"),
        account_pattern: Some(r"\d{14}"),
        opening_balance_pattern: None,
        headers: &[
            "Serial No",
            "Transaction Date",
            "Value Date",
            "Description",
            "Cheque Number",
            "Debit",
            "Credit",
            "Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Hdfc,
        name: "HDFC Bank",
        keywords: &["hdfc bank", "hdfc"],
        ifsc_prefix: Some("hdfc0"),
        account_pattern: Some(r"\d{14}"),
        opening_balance_pattern: None,
        headers: &[
            "Date",
            "Narration",
            "Chq./Ref.No.",
            "Value Dt",
            "Withdrawal Amt.",
            "Deposit Amt.",
            "Closing Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Pnb,
        name: "Punjab National Bank",
        keywords: &["punjab national bank", "punb"],
        ifsc_prefix: Some("punb0"),
        account_pattern: Some(r"\d{16}"),
        opening_balance_pattern: None,
        headers: &["Date", "Instrument ID", "Amount", "Type", "Balance", "Remarks"],
    },
    BankSignature {
        tag: BankTag::Cbi,
        name: "Central Bank of India",
        keywords: &["central bank of india", "cbin"],
        ifsc_prefix: Some("cbin0"),
        account_pattern: Some(r"\d{16}"),
        opening_balance_pattern: None,
        headers: &[
            "Post Date",
            "Value Date",
            "Branch Code",
            "Cheque Number",
            "Account Description",
            "Debit",
            "Credit",
            "Balance",
        ],
    },
    BankSignature {
        tag: BankTag::Karnataka,
        name: "Karnataka Bank",
        keywords: &["karnataka bank ltd", "karb"],
        ifsc_prefix: Some("karb0"),
        account_pattern: Some(r"\d{16}"),
        opening_balance_pattern: None,
        headers: &["Date", "Particulars", "Withdrawals", "Deposits", "Balance"],
    },
    BankSignature {
        tag: BankTag::Kotak,
        name: "Kotak Mahindra Bank",
        keywords: &["kotak mahindra bank", "kotak", "kkbk"],
        ifsc_prefix: Some("kkbk0"),
        account_pattern: Some(r"\d{10}"),
        opening_balance_pattern: None,
        headers: &["Date", "Narration", "Chq/Ref No.", "Withdrawal(Dr)", "Deposit(Cr)", "Balance"],
    },
    BankSignature {
        tag: BankTag::Canara,
        name: "Canara Bank",
        keywords: &["canara bank", "cnrb"],
        ifsc_prefix: Some("cnrb0"),
        account_pattern: Some(r"\d{10}"),
        opening_balance_pattern: None,
        headers: &["Date", "Particulars", "Deposits", "Withdrawals", "Balance"],
    },
    BankSignature {
        tag: BankTag::Indusind,
        name: "IndusInd Bank",
        keywords: &["indusind bank", "indb"],
        ifsc_prefix: Some("indb0"),
        account_pattern: Some(r"\d{12}"),
        opening_balance_pattern: None,
        headers: &["Date", "Particulars", "Chq No/Ref No", "Withdrawal", "Deposit", "Balance"],
    },
];

/// Order in which IFSC fragments are tried. Fragments are mutually
/// exclusive on well-formed statements; the order only settles documents
/// that quote several banks' IFSC codes.
pub const IFSC_PRIORITY: [BankTag; 19] = [
    BankTag::Indusind,
    BankTag::Canara,
    BankTag::Kotak,
    BankTag::Karnataka,
    BankTag::Cbi,
    BankTag::Pnb,
    BankTag::Bob,
    BankTag::Idbi,
    BankTag::Jk,
    BankTag::Federal,
    BankTag::Indian,
    BankTag::Union,
    BankTag::Hsbc,
    BankTag::Bandhan,
    BankTag::Yes,
    BankTag::Iob,
    BankTag::Sbi,
    BankTag::Hdfc,
    BankTag::Axis,
];

static ACCOUNT_RES: Lazy<HashMap<BankTag, Regex>> =
    Lazy::new(|| compile_patterns(|sig| sig.account_pattern));

static OPENING_BALANCE_RES: Lazy<HashMap<BankTag, Regex>> =
    Lazy::new(|| compile_patterns(|sig| sig.opening_balance_pattern));

fn compile_patterns(pick: fn(&BankSignature) -> Option<&'static str>) -> HashMap<BankTag, Regex> {
    CATALOG
        .iter()
        .filter_map(|sig| {
            let pattern = pick(sig)?;
            let re = Regex::new(pattern).expect("catalog pattern");
            Some((sig.tag, re))
        })
        .collect()
}

/// All signatures, in catalog order (the keyword-scan order).
pub fn signatures() -> &'static [BankSignature] {
    &CATALOG
}

pub fn signature(tag: BankTag) -> &'static BankSignature {
    CATALOG
        .iter()
        .find(|sig| sig.tag == tag)
        .expect("every BankTag has a catalog entry")
}

impl BankSignature {
    /// First account-number match in the document text; capture group 1 when present.
    pub fn account_number(&self, text: &str) -> Option<String> {
        let caps = ACCOUNT_RES.get(&self.tag)?.captures(text)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        Some(m.as_str().to_string())
    }

    /// Opening balance as printed in the statement summary, if the bank prints one.
    pub fn opening_balance(&self, text: &str) -> Option<f64> {
        let caps = OPENING_BALANCE_RES.get(&self.tag)?.captures(text)?;
        normalize_amount(Some(&caps[1]), AmountDialect::Plain).value()
    }

    /// Case-insensitive keyword hit against already lower-cased text
    pub fn matches_keywords(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}
