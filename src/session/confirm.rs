//! Yes/no gate in front of order placement.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// `y` or `yes` in any case; anything else declines.
pub fn parse_answer(reply: &str) -> Answer {
    let reply = reply.trim();
    if reply.eq_ignore_ascii_case("y") || reply.eq_ignore_ascii_case("yes") {
        Answer::Yes
    } else {
        Answer::No
    }
}

impl<G: Gateway, L: LineSource> Session<G, L> {
    /// Asks on the suspended input stream. A closed stream or a read error
    /// counts as a decline.
    pub(super) fn confirm(&mut self, question: &str) -> Answer {
        let prompt = format!("{} [y/n]: ", question);
        match self.input.read_line(&prompt) {
            Ok(Some(reply)) => parse_answer(&reply),
            Ok(None) => Answer::No,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation read failed");
                Answer::No
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/session/confirm_tests.rs"]
mod tests;
