//! Row builders for each named table.

use crate::model::OrderType;
use crate::remote::{Balance, Order, OrderAmount, Payment, TrustLine};

use super::{Clock, IssuerDirectory};

pub fn balance_rows(balances: &[Balance], issuers: &IssuerDirectory) -> Vec<Vec<String>> {
    balances
        .iter()
        .map(|b| {
            vec![
                b.currency.clone(),
                b.value.clone(),
                b.counterparty.clone(),
                issuers.name_or_empty(&b.counterparty),
            ]
        })
        .collect()
}

pub fn trustline_rows(lines: &[TrustLine], issuers: &IssuerDirectory) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|t| {
            vec![
                t.currency.clone(),
                t.limit.clone(),
                t.account_allows_rippling.to_string(),
                t.counterparty.clone(),
                issuers.name_or_empty(&t.counterparty),
            ]
        })
        .collect()
}

fn amount_currency(amount: &OrderAmount, issuers: &IssuerDirectory) -> String {
    if amount.counterparty.is_empty() {
        amount.currency.clone()
    } else {
        format!(
            "{}({})",
            amount.currency,
            issuers.name_or_address(&amount.counterparty)
        )
    }
}

/// `pays / gets`, followed by the unit. Non-numeric values render as `NaN`.
fn order_price(gets: &OrderAmount, pays: &OrderAmount) -> String {
    let ratio = match (gets.value.parse::<f64>(), pays.value.parse::<f64>()) {
        (Ok(g), Ok(p)) => p / g,
        _ => f64::NAN,
    };
    format!("{} {} per {}", ratio, pays.currency, gets.currency)
}

pub fn order_rows(orders: &[Order], issuers: &IssuerDirectory) -> Vec<Vec<String>> {
    orders
        .iter()
        .map(|o| {
            let joiner = OrderType::parse(&o.kind)
                .unwrap_or(OrderType::Buy)
                .joiner();
            vec![
                o.sequence.clone(),
                o.kind.clone(),
                o.taker_gets.value.clone(),
                amount_currency(&o.taker_gets, issuers),
                joiner.to_string(),
                o.taker_pays.value.clone(),
                amount_currency(&o.taker_pays, issuers),
                order_price(&o.taker_gets, &o.taker_pays),
            ]
        })
        .collect()
}

/// One payment row. Direction is relative to `account`; the counterparty is
/// the other side of the payment.
pub fn payment_row(
    payment: &Payment,
    account: &str,
    issuers: &IssuerDirectory,
    clock: &Clock,
) -> Vec<String> {
    let sent = payment.source_account == account;
    let amount = &payment.destination_amount;
    let counterparty = if sent {
        &payment.destination_account
    } else {
        &payment.source_account
    };
    vec![
        clock.format_timestamp(&payment.timestamp),
        if sent { "Sent" } else { "Received" }.to_string(),
        amount.value.clone(),
        amount.currency.clone(),
        amount.issuer.clone(),
        issuers.name_or_empty(&amount.issuer),
        if sent { "to" } else { "from" }.to_string(),
        counterparty.clone(),
        (payment.result == "tesSUCCESS").to_string(),
    ]
}

#[cfg(test)]
#[path = "../tests/present/rows_tests.rs"]
mod tests;
