//! Market ticker
//!
//! A fixed list of quote-like items and a highlighted index that advances
//! cyclically on a timer. The list never changes and is not fed by any data
//! source.
//!
//! The cycle itself is a plain state machine ([`TickerCycle`]); timers live
//! with whoever owns it: a browser interval in the UI, a tokio task in the
//! terminal preview ([`runner`]).

#[cfg(feature = "cli")]
pub mod runner;

use serde::Serialize;

use crate::dashboard::format::{format_signed, format_with_unit};
use crate::dashboard::types::Polarity;

#[cfg(feature = "cli")]
pub use runner::{TickerHandle, TickerRunner};

/// Milliseconds between highlight advances
pub const TICKER_INTERVAL_MS: u64 = 3000;

/// Caption shown at the left of the ticker strip
pub const TICKER_CAPTION: &str = "LIVE MARKETS";

/// One quote in the ticker strip
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TickerItem {
    pub symbol: &'static str,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl TickerItem {
    pub const fn new(symbol: &'static str, value: f64, change: f64, change_percent: f64) -> Self {
        Self {
            symbol,
            value,
            change,
            change_percent,
            unit: None,
        }
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of(Some(self.change))
    }

    /// Grouped value followed by the unit, e.g. `62,840 ₹/10g`
    pub fn value_text(&self) -> String {
        format_with_unit(self.value, self.unit)
    }

    /// Change and raw percent, e.g. `+45.2 (+0.21%)`
    pub fn change_text(&self) -> String {
        format!(
            "{} ({}%)",
            format_signed(self.change),
            format_signed(self.change_percent)
        )
    }

    /// Arrow for nonzero changes; flat items show none
    pub fn arrow(&self) -> Option<&'static str> {
        match self.polarity() {
            Polarity::Neutral => None,
            p => Some(p.indicator()),
        }
    }
}

/// Quotes cycled through the ticker strip
pub static MARKET_TICKER: [TickerItem; 7] = [
    TickerItem::new("NIFTY", 21731.4, 45.2, 0.21),
    TickerItem::new("SENSEX", 71595.3, -123.8, -0.17),
    TickerItem::new("REPO RATE", 6.50, 0.0, 0.0).unit("%"),
    TickerItem::new("CPI", 5.69, 0.12, 2.15).unit("%"),
    TickerItem::new("FOREX", 635.2, 2.8, 0.44).unit("B USD"),
    TickerItem::new("GOLD", 62840.0, -185.0, -0.29).unit("₹/10g"),
    TickerItem::new("SILVER", 75420.0, 312.0, 0.42).unit("₹/kg"),
];

/// Highlighted position in a list of `len` items
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TickerCycle {
    index: usize,
    len: usize,
}

impl TickerCycle {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the highlight one step, wrapping at the end. An empty cycle stays at 0.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        tracing::trace!(index = self.index, len = self.len, "ticker advanced");
        self.index
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// The highlighted item from `items`
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// Forward advances needed to reach `target`, wrapping at the end
    pub fn steps_to(&self, target: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (target % self.len + self.len - self.index) % self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = TickerCycle::new(3);
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn test_index_after_n_ticks() {
        let len = MARKET_TICKER.len();
        for n in 0..50 {
            let mut cycle = TickerCycle::new(len);
            for _ in 0..n {
                cycle.advance();
            }
            assert_eq!(cycle.index(), n % len);
            assert!(cycle.is_current(n % len));
        }
    }

    #[test]
    fn test_empty_cycle() {
        let mut cycle = TickerCycle::new(0);
        assert_eq!(cycle.advance(), 0);
        assert!(!cycle.is_current(0));
        assert_eq!(cycle.current::<TickerItem>(&[]), None);
    }

    #[test]
    fn test_item_display() {
        let nifty = &MARKET_TICKER[0];
        assert_eq!(nifty.value_text(), "21,731.4");
        assert_eq!(nifty.change_text(), "+45.2 (+0.21%)");
        assert_eq!(nifty.arrow(), Some("↑"));

        let repo = &MARKET_TICKER[2];
        assert_eq!(repo.value_text(), "6.5 %");
        assert_eq!(repo.change_text(), "0 (0%)");
        assert_eq!(repo.arrow(), None);
        assert_eq!(repo.polarity().ticker_class(), "text-muted-foreground");

        let gold = &MARKET_TICKER[5];
        assert_eq!(gold.value_text(), "62,840 ₹/10g");
        assert_eq!(gold.polarity().ticker_class(), "ticker-negative");
    }

    #[test]
    fn test_current_item() {
        let mut cycle = TickerCycle::new(MARKET_TICKER.len());
        cycle.advance();
        assert_eq!(cycle.current(&MARKET_TICKER).map(|i| i.symbol), Some("SENSEX"));
    }

    #[test]
    fn test_steps_to_counts_wrapped_advances() {
        let mut cycle = TickerCycle::new(7);
        assert_eq!(cycle.steps_to(0), 0);
        assert_eq!(cycle.steps_to(3), 3);

        for _ in 0..5 {
            cycle.advance();
        }
        assert_eq!(cycle.steps_to(1), 3);
        assert_eq!(cycle.steps_to(5), 0);

        let empty = TickerCycle::new(0);
        assert_eq!(empty.steps_to(4), 0);
    }
}
