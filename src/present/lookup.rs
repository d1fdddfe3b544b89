//! Static issuer-name and transaction-result tables.

use std::collections::BTreeMap;

const KNOWN_ISSUERS: &[(&str, &str)] = &[
    ("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B", "Bitstamp"),
    ("rMwjYedjc7qqtKYVLiAccJSmCwih4LnE2q", "SnapSwap"),
    ("razqQKzJRdB4UxFPWf5NEpEG3WMkmwgcXA", "RippleChina"),
    ("rnuF96W4SZoCJmbHYBFoJZpR8eCaxNvekK", "RippleCN"),
    ("rhub8VRN55s94qWKDv6jmDy1pUykJzF3wq", "GateHub"),
    ("r94s8px6kSw1uZ1MV98dhSRTvc6VMPoPcN", "TokyoJPY"),
    ("rMAz5ZnK73nyNUL4foAvaxdreczCkG3vA6", "Ripple Trade Japan"),
];

/// Maps issuer addresses to display names. Extra entries override the
/// built-in ones.
#[derive(Clone, Debug)]
pub struct IssuerDirectory {
    names: BTreeMap<String, String>,
}

impl IssuerDirectory {
    pub fn with_extra(extra: BTreeMap<String, String>) -> Self {
        let mut names = KNOWN_ISSUERS
            .iter()
            .map(|(a, n)| (a.to_string(), n.to_string()))
            .collect::<BTreeMap<_, _>>();
        names.extend(extra);
        Self { names }
    }

    pub fn name(&self, address: &str) -> Option<&str> {
        self.names.get(address).map(String::as_str)
    }

    /// Display name, or the empty string when unknown.
    pub fn name_or_empty(&self, address: &str) -> String {
        self.name(address).unwrap_or_default().to_string()
    }

    /// Display name, or the address itself when unknown.
    pub fn name_or_address(&self, address: &str) -> String {
        self.name(address).unwrap_or(address).to_string()
    }
}

impl Default for IssuerDirectory {
    fn default() -> Self {
        Self::with_extra(BTreeMap::new())
    }
}

fn result_message(code: &str) -> Option<&'static str> {
    let msg = match code {
        "tesSUCCESS" => "The transaction was applied. Only final in a validated ledger.",

        "tecCLAIM" => "Fee claimed. Sequence used. No action.",
        "tecDIR_FULL" => "Can not add entry to full directory.",
        "tecFAILED_PROCESSING" => "Failed to correctly process transaction.",
        "tecINSUF_RESERVE_LINE" => "Insufficient reserve to add trust line.",
        "tecINSUF_RESERVE_OFFER" => "Insufficient reserve to create offer.",
        "tecNO_DST" => "Destination does not exist. Send XRP to create it.",
        "tecNO_DST_INSUF_XRP" => "Destination does not exist. Too little XRP sent to create it.",
        "tecNO_LINE_INSUF_RESERVE" => "No such line. Too little reserve to create it.",
        "tecNO_LINE_REDUNDANT" => "Can't set non-existent line to default.",
        "tecPATH_DRY" => "Path could not send partial amount.",
        "tecPATH_PARTIAL" => "Path could not send full amount.",
        "tecUNFUNDED_OFFER" => "Insufficient balance to fund created offer.",
        "tecUNFUNDED_PAYMENT" => "Insufficient XRP balance to send.",
        "tecOWNERS" => "Non-zero owner count.",
        "tecNO_ISSUER" => "Issuer account does not exist.",
        "tecNO_AUTH" => "Not authorized to hold asset.",
        "tecNO_LINE" => "No such line.",
        "tecINSUFF_FEE" => "Insufficient balance to pay fee.",
        "tecFROZEN" => "Asset is frozen.",
        "tecNO_TARGET" => "Target account does not exist.",
        "tecNO_PERMISSION" => "No permission to perform requested operation.",
        "tecNO_ENTRY" => "No matching entry found.",
        "tecINSUFFICIENT_RESERVE" => "Insufficient reserve to complete requested operation.",
        "tecDST_TAG_NEEDED" => "A destination tag is required.",

        "tefALREADY" => "The exact transaction was already in this ledger.",
        "tefBAD_AUTH" => "Transaction's public key is not authorized.",
        "tefBAD_LEDGER" => "Ledger in unexpected state.",
        "tefFAILURE" => "Failed to apply.",
        "tefINTERNAL" => "Internal error.",
        "tefMAX_LEDGER" => "Ledger sequence too high.",
        "tefPAST_SEQ" => "This sequence number has already past.",
        "tefWRONG_PRIOR" => "This previous transaction does not match.",
        "tefMASTER_DISABLED" => "Master key is disabled.",

        "telLOCAL_ERROR" => "Local failure.",
        "telBAD_PATH_COUNT" => "Malformed: Too many paths.",
        "telFAILED_PROCESSING" => "Failed to correctly process transaction.",
        "telINSUF_FEE_P" => "Fee insufficient.",
        "telNO_DST_PARTIAL" => "Partial payment to create account not allowed.",

        "temMALFORMED" => "Malformed transaction.",
        "temBAD_AMOUNT" => "Can only send positive amounts.",
        "temBAD_CURRENCY" => "Malformed: Bad currency.",
        "temBAD_EXPIRATION" => "Malformed: Bad expiration.",
        "temBAD_FEE" => "Invalid fee, negative or not XRP.",
        "temBAD_ISSUER" => "Malformed: Bad issuer.",
        "temBAD_LIMIT" => "Limits must be non-negative.",
        "temBAD_OFFER" => "Malformed: Bad offer.",
        "temBAD_PATH" => "Malformed: Bad path.",
        "temBAD_PATH_LOOP" => "Malformed: Loop in path.",
        "temBAD_SEQUENCE" => "Malformed: Sequence is not in the past.",
        "temBAD_SIGNATURE" => "Malformed: Bad signature.",
        "temBAD_SRC_ACCOUNT" => "Malformed: Bad source account.",
        "temDST_IS_SRC" => "Destination may not be source.",
        "temDST_NEEDED" => "Destination not specified.",
        "temINVALID" => "The transaction is ill-formed.",
        "temINVALID_FLAG" => "The transaction has an invalid flag.",
        "temREDUNDANT" => "Sends same currency to self.",
        "temRIPPLE_EMPTY" => "PathSet with no paths.",

        "terRETRY" => "Retry transaction.",
        "terINSUF_FEE_B" => "Account balance can't pay fee.",
        "terNO_ACCOUNT" => "The source account does not exist.",
        "terNO_AUTH" => "Not authorized to hold IOUs.",
        "terNO_LINE" => "No such line.",
        "terPRE_SEQ" => "Missing/inapplicable prior transaction.",
        "terOWNERS" => "Non-zero owner count.",
        "terQUEUED" => "Held until escalated fee drops.",
        _ => return None,
    };
    Some(msg)
}

/// `CODE: description` for known result codes, the raw code otherwise.
pub fn describe_result(code: &str) -> String {
    match result_message(code) {
        Some(msg) => format!("{}: {}", code, msg),
        None => code.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/present/lookup_tests.rs"]
mod tests;
