//! User-facing notices and the sink that surfaces them.
//!
//! The cart decides *when* the shopper must be told something; *how* the
//! message is rendered (toast, banner, status line) belongs to the embedding
//! UI, which plugs in its own [`NotificationSink`]. Success never notifies.

use std::fmt;

/// The conditions the cart surfaces to the shopper.
///
/// Two tiers: [`Notice::StockExceeded`] is the expected business rejection and
/// carries its own message; the three `*Failed` variants are the generic
/// per-operation fallbacks covering every other fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The requested quantity is not covered by available stock.
    StockExceeded,
    /// Adding a product failed for any other reason.
    AddFailed,
    /// Removing a product failed.
    RemoveFailed,
    /// Changing a product's quantity failed.
    UpdateFailed,
}

impl Notice {
    /// The message shown to the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::StockExceeded => "Requested quantity exceeds stock",
            Notice::AddFailed => "Failed to add product",
            Notice::RemoveFailed => "Failed to remove product",
            Notice::UpdateFailed => "Failed to change product quantity",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Where notices go.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Fallback sink for hosts without a notification surface: notices land in the
/// log stream at warn level.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notice: Notice) {
        tracing::warn!(%notice, "user notice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_notice_keeps_its_own_message() {
        assert_eq!(Notice::StockExceeded.message(), "Requested quantity exceeds stock");
        assert_ne!(Notice::StockExceeded.message(), Notice::UpdateFailed.message());
    }
}
