use serde::de::DeserializeOwned;

use crate::commands::{COMMANDS, OrderArgs, OrderDraft};
use crate::model::CurrencySpec;
use crate::present::{TableKind, balance_rows, describe_result, order_rows, payment_row, trustline_rows};
use crate::remote::{
    BalancesResponse, CancelOrderRequest, GrantTrustLineRequest, NewWalletResponse, OrderAmount,
    OrderRequest, OrdersResponse, PaymentAmount, PaymentRequest, PaymentResponse,
    PaymentsResponse, PlaceOrderRequest, PlaceOrderResponse, SubmitPaymentRequest,
    SubmitPaymentResponse, TransactionResponse, TrustLineRequest, TrustLinesResponse,
    UuidResponse,
};

use super::*;

type Outcome = std::result::Result<Option<DeferredRetry>, GatewayError>;

impl<G: Gateway, L: LineSource> Session<G, L> {
    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, GatewayError> {
        remote::call(&self.gateway, request).await
    }

    fn account_request(&self, endpoint: Endpoint) -> ApiRequest {
        ApiRequest::new(endpoint).param("address", self.identity.account())
    }

    pub(super) async fn perform(&mut self, operation: Operation) -> Outcome {
        match operation {
            Operation::NewWallet => self.generate_wallet().await,
            Operation::Balances => self.get_balance().await,
            Operation::TrustLines => self.get_trust_lines().await,
            Operation::Orders => self.get_orders().await,
            Operation::Payments => self.retrieve_payments().await,
            Operation::Payment { id } => self.retrieve_payment(&id).await,
            Operation::GrantTrustLine {
                issuer,
                currency,
                limit,
                allow_rippling,
            } => {
                self.grant_trust_line(&issuer, &currency, &limit, allow_rippling)
                    .await
            }
            Operation::Pay {
                destination,
                currency,
                amount,
                message,
                choose_path,
            } => {
                if choose_path {
                    tracing::debug!("--choose-path is accepted but paths are not searched");
                }
                tracing::debug!(memo = %message, "payment message is not sent to the ledger");
                self.send_money(&destination, &currency, &amount).await
            }
            Operation::PlaceOrder(draft) => self.submit_order(&draft).await,
            Operation::CancelOrder { sequence } => self.cancel_order(&sequence).await,
            Operation::Transaction { hash } => self.retrieve_transaction(&hash).await,
        }
    }

    async fn generate_wallet(&mut self) -> Outcome {
        let res: NewWalletResponse = self.call(ApiRequest::new(Endpoint::NewWallet)).await?;
        self.say(format!("address: {}", res.wallet.address));
        self.say(format!("secret : {}", res.wallet.secret));
        Ok(None)
    }

    async fn get_balance(&mut self) -> Outcome {
        let res: BalancesResponse = self.call(self.account_request(Endpoint::Balances)).await?;
        let rows = balance_rows(&res.balances, self.presenter.issuers());
        let text = self.presenter.show(TableKind::Balance, rows);
        self.say(format!("ledger:{}", res.ledger));
        self.say(text);
        Ok(None)
    }

    async fn get_trust_lines(&mut self) -> Outcome {
        let res: TrustLinesResponse = self.call(self.account_request(Endpoint::TrustLines)).await?;
        let rows = trustline_rows(&res.trustlines, self.presenter.issuers());
        let text = self.presenter.show(TableKind::TrustLine, rows);
        self.say(format!("ledger:{}", res.ledger));
        self.say(text);
        Ok(None)
    }

    async fn get_orders(&mut self) -> Outcome {
        let res: OrdersResponse = self.call(self.account_request(Endpoint::Orders)).await?;
        let rows = order_rows(&res.orders, self.presenter.issuers());
        let text = self.presenter.show(TableKind::Order, rows);
        self.say(format!("ledger:{}", res.ledger));
        self.say(text);
        Ok(None)
    }

    async fn grant_trust_line(
        &mut self,
        issuer: &str,
        currency: &str,
        limit: &str,
        allow_rippling: bool,
    ) -> Outcome {
        let request = self.account_request(Endpoint::GrantTrustLine).json(&GrantTrustLineRequest {
            secret: self.identity.secret(),
            trustline: TrustLineRequest {
                limit,
                currency,
                counterparty: issuer,
                account_allows_rippling: allow_rippling,
            },
        })?;
        self.gateway.send(request).await?;
        self.say("Grant trustline successfully. Getting latest trustlines...");
        Ok(Some(DeferredRetry {
            delay: self.retry_delay,
            operation: Operation::TrustLines,
        }))
    }

    /// Fetches a fresh correlation id, then submits the payment under it.
    async fn send_money(
        &mut self,
        destination: &str,
        currency: &CurrencySpec,
        amount: &str,
    ) -> Outcome {
        self.say("Preparing payment...");
        let uuid: UuidResponse = self.call(ApiRequest::new(Endpoint::Uuid)).await?;

        let money = PaymentAmount {
            value: amount.to_string(),
            currency: currency.currency.clone(),
            issuer: currency.issuer.clone(),
        };
        let request = self.account_request(Endpoint::SubmitPayment).json(&SubmitPaymentRequest {
            secret: self.identity.secret(),
            client_resource_id: &uuid.uuid,
            payment: PaymentRequest {
                source_account: self.identity.account(),
                source_tag: "",
                source_amount: money.clone(),
                source_slippage: "0",
                destination_account: destination,
                destination_tag: "",
                destination_amount: money,
                invoice_id: "",
                paths: "[]",
                partial_payment: false,
                no_direct_ripple: false,
            },
        })?;
        let res: SubmitPaymentResponse = self.call(request).await?;
        self.say("Send payment successfully.");
        self.say(format!("Payment id: {}", res.client_resource_id));
        Ok(None)
    }

    async fn retrieve_payment(&mut self, id: &str) -> Outcome {
        let request = self.account_request(Endpoint::Payment).param("id", id);
        let res: PaymentResponse = self.call(request).await?;
        let row = payment_row(
            &res.payment,
            self.identity.account(),
            self.presenter.issuers(),
            self.presenter.clock(),
        );
        self.show_payments(&res.ledger, vec![row]);
        Ok(None)
    }

    async fn retrieve_payments(&mut self) -> Outcome {
        let res: PaymentsResponse = self.call(self.account_request(Endpoint::Payments)).await?;
        let rows: Vec<Vec<String>> = res
            .payments
            .iter()
            .map(|entry| {
                payment_row(
                    &entry.payment,
                    self.identity.account(),
                    self.presenter.issuers(),
                    self.presenter.clock(),
                )
            })
            .collect();
        self.show_payments(&res.ledger, rows);
        Ok(None)
    }

    fn show_payments(&mut self, ledger: &str, rows: Vec<Vec<String>>) {
        let text = self.presenter.show(TableKind::Payment, rows);
        let tz = self.presenter.clock().timezone();
        self.say(format!("ledger: {}, Timezone: {}", ledger, tz));
        self.say(text);
    }

    /// Order-type check and confirmation, then submission. A rejected type
    /// never suspends input.
    pub(super) async fn place_order(&mut self, args: OrderArgs) {
        let Some(draft) = args.validate() else {
            self.say("type should be any one of `sell` or `buy`.");
            return;
        };

        self.suspend();
        if self.confirm(&draft.summary()) == Answer::Yes {
            self.drive(Operation::PlaceOrder(draft)).await;
        }
        self.resume();
    }

    async fn submit_order(&mut self, draft: &OrderDraft) -> Outcome {
        let (gets, gets_value, pays, pays_value) = draft.legs();
        let request = self.account_request(Endpoint::PlaceOrder).json(&PlaceOrderRequest {
            secret: self.identity.secret(),
            order: OrderRequest {
                kind: draft.side.as_str().to_string(),
                taker_pays: OrderAmount {
                    currency: pays.currency,
                    counterparty: pays.issuer,
                    value: pays_value.to_string(),
                },
                taker_gets: OrderAmount {
                    currency: gets.currency,
                    counterparty: gets.issuer,
                    value: gets_value.to_string(),
                },
            },
        })?;
        let res: PlaceOrderResponse = self.call(request).await?;
        self.say("Place order successfully.");
        self.say(format!("Transaction hash: {}", res.hash));
        Ok(Some(DeferredRetry {
            delay: self.retry_delay,
            operation: Operation::Transaction { hash: res.hash },
        }))
    }

    async fn cancel_order(&mut self, sequence: &str) -> Outcome {
        let request = self
            .account_request(Endpoint::CancelOrder)
            .param("sequence", sequence)
            .json(&CancelOrderRequest {
                secret: self.identity.secret(),
            })?;
        self.gateway.send(request).await?;
        self.say(format!("Cancel order successfully: {}", sequence));
        Ok(None)
    }

    async fn retrieve_transaction(&mut self, hash: &str) -> Outcome {
        let request = ApiRequest::new(Endpoint::Transaction).param("hash", hash);
        let res: TransactionResponse = self.call(request).await?;
        match res.transaction.result_code() {
            None => self.say("Transaction is still under pending."),
            Some(code) => self.say(format!("Transaction status: {}", describe_result(code))),
        }
        Ok(None)
    }

    pub(super) fn show_help(&mut self) {
        self.say("Commands:");
        // `help` does not list itself.
        for def in COMMANDS.iter().filter(|d| d.name != "help") {
            self.say(format!("  {}", def.usage));
        }
    }

    pub(super) fn list_accounts(&mut self) {
        tracing::debug!("list-accounts is not implemented");
    }

    pub(super) fn change_account(&mut self, address: &str) {
        tracing::debug!(%address, "change-account is not implemented");
    }
}
