//! Command registry and the line classifier.
//!
//! Exact-match keywords are checked before prefix keywords, so `get-payments`
//! never reaches the `get-payment <id>` entry. A prefix keyword only matches when
//! it is the whole line or is followed by whitespace.

use crate::model::{CurrencySpec, OrderType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Prefix,
}

#[derive(Clone, Copy, Debug)]
pub struct CommandDef {
    pub name: &'static str,
    pub mode: MatchMode,
    /// Required positional arguments; optional flags are not counted.
    pub arity: usize,
    pub usage: &'static str,
    build: fn(&[String]) -> Command,
}

/// A remote-backed unit of work. Each one runs while input is suspended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    NewWallet,
    Balances,
    TrustLines,
    Orders,
    Payments,
    Payment {
        id: String,
    },
    GrantTrustLine {
        issuer: String,
        currency: String,
        limit: String,
        allow_rippling: bool,
    },
    Pay {
        destination: String,
        currency: CurrencySpec,
        amount: String,
        message: String,
        choose_path: bool,
    },
    PlaceOrder(OrderDraft),
    CancelOrder {
        sequence: String,
    },
    Transaction {
        hash: String,
    },
}

/// `place-order` arguments before the order type has been checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderArgs {
    pub kind: String,
    pub currency1: String,
    pub amount1: String,
    pub currency2: String,
    pub amount2: String,
}

impl OrderArgs {
    pub fn validate(&self) -> Option<OrderDraft> {
        let side = OrderType::parse(&self.kind)?;
        Some(OrderDraft {
            side,
            currency1: self.currency1.clone(),
            amount1: self.amount1.clone(),
            currency2: self.currency2.clone(),
            amount2: self.amount2.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDraft {
    pub side: OrderType,
    pub currency1: String,
    pub amount1: String,
    pub currency2: String,
    pub amount2: String,
}

impl OrderDraft {
    pub fn summary(&self) -> String {
        format!(
            "You will {} {}{} {} {}{}. Are you sure?",
            self.side.as_str(),
            self.amount1,
            self.currency1,
            self.side.joiner(),
            self.amount2,
            self.currency2
        )
    }

    /// `(taker_gets, gets_value, taker_pays, pays_value)`. A sell gives up the
    /// first leg; a buy gives up the second.
    pub fn legs(&self) -> (CurrencySpec, &str, CurrencySpec, &str) {
        match self.side {
            OrderType::Sell => (
                CurrencySpec::parse(&self.currency1),
                &self.amount1,
                CurrencySpec::parse(&self.currency2),
                &self.amount2,
            ),
            OrderType::Buy => (
                CurrencySpec::parse(&self.currency2),
                &self.amount2,
                CurrencySpec::parse(&self.currency1),
                &self.amount1,
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    ListAccounts,
    ChangeAccount { address: String, secret: String },
    PlaceOrder(OrderArgs),
    Remote(Operation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified {
    Empty,
    Unknown,
    /// A known prefix keyword with too few arguments.
    Usage(&'static CommandDef),
    Command(Command),
}

pub const ALLOW_RIPPLING_FLAG: &str = "--allow-rippling";
pub const CHOOSE_PATH_FLAG: &str = "--choose-path";

fn arg(args: &[String], i: usize) -> String {
    args.get(i).cloned().unwrap_or_default()
}

fn build_grant_trustline(args: &[String]) -> Command {
    Command::Remote(Operation::GrantTrustLine {
        issuer: arg(args, 0),
        currency: arg(args, 1),
        limit: arg(args, 2),
        allow_rippling: args.get(3).map(String::as_str) == Some(ALLOW_RIPPLING_FLAG),
    })
}

fn build_pay(args: &[String]) -> Command {
    Command::Remote(Operation::Pay {
        destination: arg(args, 0),
        currency: CurrencySpec::parse(&arg(args, 1)),
        amount: arg(args, 2),
        message: arg(args, 3),
        choose_path: args.get(4).map(String::as_str) == Some(CHOOSE_PATH_FLAG),
    })
}

fn build_place_order(args: &[String]) -> Command {
    Command::PlaceOrder(OrderArgs {
        kind: arg(args, 0),
        currency1: arg(args, 1),
        amount1: arg(args, 2),
        currency2: arg(args, 3),
        amount2: arg(args, 4),
    })
}

pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "new-wallet",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "new-wallet",
        build: |_| Command::Remote(Operation::NewWallet),
    },
    CommandDef {
        name: "get-balance",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "get-balance",
        build: |_| Command::Remote(Operation::Balances),
    },
    CommandDef {
        name: "get-trustlines",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "get-trustlines",
        build: |_| Command::Remote(Operation::TrustLines),
    },
    CommandDef {
        name: "grant-trustline",
        mode: MatchMode::Prefix,
        arity: 3,
        usage: "grant-trustline <issuer> <currency> <limit> [ --allow-rippling ]",
        build: build_grant_trustline,
    },
    CommandDef {
        name: "pay",
        mode: MatchMode::Prefix,
        arity: 4,
        usage: "pay <destination> <currency+issuer> <amount> <message> [ --choose-path ]",
        build: build_pay,
    },
    CommandDef {
        name: "get-payment",
        mode: MatchMode::Prefix,
        arity: 1,
        usage: "get-payment <resource_id>",
        build: |args| {
            Command::Remote(Operation::Payment {
                id: arg(args, 0),
            })
        },
    },
    CommandDef {
        name: "get-payments",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "get-payments",
        build: |_| Command::Remote(Operation::Payments),
    },
    CommandDef {
        name: "get-orders",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "get-orders",
        build: |_| Command::Remote(Operation::Orders),
    },
    CommandDef {
        name: "place-order",
        mode: MatchMode::Prefix,
        arity: 5,
        usage: "place-order <type> <currency+issuer> <amount> <currency+issuer> <amount>",
        build: build_place_order,
    },
    CommandDef {
        name: "cancel-order",
        mode: MatchMode::Prefix,
        arity: 1,
        usage: "cancel-order <sequence>",
        build: |args| {
            Command::Remote(Operation::CancelOrder {
                sequence: arg(args, 0),
            })
        },
    },
    CommandDef {
        name: "get-transaction",
        mode: MatchMode::Prefix,
        arity: 1,
        usage: "get-transaction <hash>",
        build: |args| {
            Command::Remote(Operation::Transaction {
                hash: arg(args, 0),
            })
        },
    },
    CommandDef {
        name: "list-accounts",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "list-accounts",
        build: |_| Command::ListAccounts,
    },
    CommandDef {
        name: "change-account",
        mode: MatchMode::Prefix,
        arity: 2,
        usage: "change-account <address> <secret>",
        build: |args| Command::ChangeAccount {
            address: arg(args, 0),
            secret: arg(args, 1),
        },
    },
    CommandDef {
        name: "help",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "help",
        build: |_| Command::Help,
    },
    CommandDef {
        name: "exit",
        mode: MatchMode::Exact,
        arity: 0,
        usage: "exit",
        build: |_| Command::Exit,
    },
];

impl PartialEq for CommandDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CommandDef {}

pub fn classify(line: &str) -> Classified {
    let line = line.trim();
    if line.is_empty() {
        return Classified::Empty;
    }

    if let Some(def) = COMMANDS
        .iter()
        .find(|d| d.mode == MatchMode::Exact && d.name == line)
    {
        return Classified::Command((def.build)(&[]));
    }

    for def in COMMANDS.iter().filter(|d| d.mode == MatchMode::Prefix) {
        let Some(rest) = line.strip_prefix(def.name) else {
            continue;
        };
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let args = rest
            .split_whitespace()
            .map(str::to_string)
            .collect::<Vec<_>>();
        if args.len() < def.arity {
            return Classified::Usage(def);
        }
        return Classified::Command((def.build)(&args));
    }

    Classified::Unknown
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
