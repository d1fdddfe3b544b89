//! DTOs and payload types for remote API requests/responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts a JSON string or number (ledger indexes and amounts arrive as both)
/// and keeps its display form.
fn display_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(d)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewWalletResponse {
    pub wallet: Wallet,
}

#[derive(Debug, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct BalancesResponse {
    #[serde(default, deserialize_with = "display_string")]
    pub ledger: String,
    pub balances: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
pub struct Balance {
    pub currency: String,
    #[serde(deserialize_with = "display_string")]
    pub value: String,
    #[serde(default)]
    pub counterparty: String,
}

#[derive(Debug, Deserialize)]
pub struct TrustLinesResponse {
    #[serde(default, deserialize_with = "display_string")]
    pub ledger: String,
    pub trustlines: Vec<TrustLine>,
}

#[derive(Debug, Deserialize)]
pub struct TrustLine {
    pub currency: String,
    #[serde(deserialize_with = "display_string")]
    pub limit: String,
    #[serde(default)]
    pub counterparty: String,
    #[serde(default)]
    pub account_allows_rippling: bool,
}

#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    #[serde(default, deserialize_with = "display_string")]
    pub ledger: String,
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "display_string")]
    pub sequence: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub taker_gets: OrderAmount,
    pub taker_pays: OrderAmount,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderAmount {
    pub currency: String,
    #[serde(default)]
    pub counterparty: String,
    #[serde(deserialize_with = "display_string")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UuidResponse {
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitPaymentResponse {
    pub client_resource_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentResponse {
    #[serde(default, deserialize_with = "display_string")]
    pub ledger: String,
    pub payment: Payment,
}

#[derive(Debug, Deserialize)]
pub struct PaymentsResponse {
    #[serde(default, deserialize_with = "display_string")]
    pub ledger: String,
    pub payments: Vec<PaymentEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentEntry {
    pub payment: Payment,
}

#[derive(Debug, Deserialize)]
pub struct Payment {
    pub source_account: String,
    pub destination_account: String,
    pub destination_amount: PaymentAmount,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub result: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentAmount {
    #[serde(deserialize_with = "display_string")]
    pub value: String,
    pub currency: String,
    #[serde(default)]
    pub issuer: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderResponse {
    pub hash: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

#[derive(Debug, Default, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub meta: TransactionMeta,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionMeta {
    #[serde(rename = "TransactionResult", default)]
    pub result: Option<String>,
}

impl Transaction {
    /// The terminal result code, or `None` while the transaction is pending.
    pub fn result_code(&self) -> Option<&str> {
        self.meta.result.as_deref().filter(|s| !s.is_empty())
    }
}

// Request bodies carry the account secret, so they do not derive Debug.

#[derive(Serialize)]
pub struct GrantTrustLineRequest<'a> {
    pub secret: &'a str,
    pub trustline: TrustLineRequest<'a>,
}

#[derive(Serialize)]
pub struct TrustLineRequest<'a> {
    pub limit: &'a str,
    pub currency: &'a str,
    pub counterparty: &'a str,
    pub account_allows_rippling: bool,
}

#[derive(Serialize)]
pub struct SubmitPaymentRequest<'a> {
    pub secret: &'a str,
    pub client_resource_id: &'a str,
    pub payment: PaymentRequest<'a>,
}

#[derive(Serialize)]
pub struct PaymentRequest<'a> {
    pub source_account: &'a str,
    pub source_tag: &'a str,
    pub source_amount: PaymentAmount,
    pub source_slippage: &'a str,
    pub destination_account: &'a str,
    pub destination_tag: &'a str,
    pub destination_amount: PaymentAmount,
    pub invoice_id: &'a str,
    pub paths: &'a str,
    pub partial_payment: bool,
    pub no_direct_ripple: bool,
}

#[derive(Serialize)]
pub struct PlaceOrderRequest<'a> {
    pub secret: &'a str,
    pub order: OrderRequest,
}

#[derive(Serialize)]
pub struct OrderRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub taker_pays: OrderAmount,
    pub taker_gets: OrderAmount,
}

#[derive(Serialize)]
pub struct CancelOrderRequest<'a> {
    pub secret: &'a str,
}
