use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("account is not set (pass --account or set RIPPLE_ACCOUNT)")]
    MissingAccount,
    #[error("secret is not set (pass --secret or set RIPPLE_SECRET)")]
    MissingSecret,
}

/// The account a session operates on.
///
/// The secret only ever leaves this struct inside write request bodies; it is
/// redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    account: String,
    secret: String,
    display_name: Option<String>,
}

impl Identity {
    pub fn new(account: Option<String>, secret: Option<String>) -> Result<Self, StartupError> {
        let account = account
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or(StartupError::MissingAccount)?;
        let secret = secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(StartupError::MissingSecret)?;
        Ok(Self {
            account,
            secret,
            display_name: None,
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.display_name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
    }

    /// `~alias> ` when an alias is known, otherwise `<account>> `.
    pub fn prompt(&self) -> String {
        match &self.display_name {
            Some(name) => format!("~{}> ", name),
            None => format!("{}> ", self.account),
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("account", &self.account)
            .field("secret", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// A `CUR[+issuer]` argument. An absent issuer is the empty string, which the
/// remote treats as the native currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencySpec {
    pub currency: String,
    pub issuer: String,
}

impl CurrencySpec {
    pub fn parse(s: &str) -> Self {
        let mut parts = s.split('+');
        let currency = parts.next().unwrap_or("").to_string();
        let issuer = parts.next().unwrap_or("").to_string();
        Self { currency, issuer }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderType {
    Sell,
    Buy,
}

impl OrderType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sell" => Some(OrderType::Sell),
            "buy" => Some(OrderType::Buy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Sell => "sell",
            OrderType::Buy => "buy",
        }
    }

    /// Word joining the two legs in summaries and order tables.
    pub fn joiner(self) -> &'static str {
        match self {
            OrderType::Sell => "for",
            OrderType::Buy => "with",
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
