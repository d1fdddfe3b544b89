//! Named REST endpoints and their path templates.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Which configured base URL an endpoint lives under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
    Rest,
    Names,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    UserInfo,
    NewWallet,
    Balances,
    TrustLines,
    GrantTrustLine,
    Uuid,
    SubmitPayment,
    Payment,
    Payments,
    Orders,
    PlaceOrder,
    CancelOrder,
    Transaction,
}

impl Endpoint {
    fn spec(self) -> (Method, Host, &'static str, &'static str) {
        use Endpoint::*;
        use Method::*;
        match self {
            UserInfo => (Get, Host::Names, "/v1/user/{address}", "lookup name"),
            NewWallet => (Get, Host::Rest, "/v1/wallet/new", "new wallet"),
            Balances => (
                Get,
                Host::Rest,
                "/v1/accounts/{address}/balances",
                "get balances",
            ),
            TrustLines => (
                Get,
                Host::Rest,
                "/v1/accounts/{address}/trustlines",
                "get trustlines",
            ),
            GrantTrustLine => (
                Post,
                Host::Rest,
                "/v1/accounts/{address}/trustlines",
                "grant trustline",
            ),
            Uuid => (Get, Host::Rest, "/v1/uuid", "get uuid"),
            SubmitPayment => (
                Post,
                Host::Rest,
                "/v1/accounts/{address}/payments",
                "submit payment",
            ),
            Payment => (
                Get,
                Host::Rest,
                "/v1/accounts/{address}/payments/{id}",
                "get payment",
            ),
            Payments => (
                Get,
                Host::Rest,
                "/v1/accounts/{address}/payments",
                "get payments",
            ),
            Orders => (
                Get,
                Host::Rest,
                "/v1/accounts/{address}/orders",
                "get orders",
            ),
            PlaceOrder => (
                Post,
                Host::Rest,
                "/v1/accounts/{address}/orders",
                "place order",
            ),
            CancelOrder => (
                Delete,
                Host::Rest,
                "/v1/accounts/{address}/orders/{sequence}",
                "cancel order",
            ),
            Transaction => (
                Get,
                Host::Rest,
                "/v1/transactions/{hash}",
                "get transaction",
            ),
        }
    }

    pub fn method(self) -> Method {
        self.spec().0
    }

    pub fn host(self) -> Host {
        self.spec().1
    }

    pub fn template(self) -> &'static str {
        self.spec().2
    }

    /// Short label used in error messages.
    pub fn label(self) -> &'static str {
        self.spec().3
    }
}
