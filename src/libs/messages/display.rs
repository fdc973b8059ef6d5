//! Display implementation for timelog application messages.
//!
//! All user-facing message text lives in this single `Display` impl so the
//! wording stays consistent and the macros in [`super::macros`] can render
//! any [`Message`] without caring which category it belongs to.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptTimelogPath => "Path to the timelog file".to_string(),
            Message::PromptClientsPath => "Path to the client rate file".to_string(),
            Message::PromptSitePath => "Directory for HTML report pages".to_string(),

            // === REPORT MESSAGES ===
            Message::PriceNeedsClient => "Pricing needs a client filter; pass --client to get an amount".to_string(),
            Message::HtmlReportWritten(path) => format!("Report page written to {}", path),
        };

        write!(f, "{}", text)
    }
}
