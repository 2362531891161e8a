//! Tooltip host state: which trigger currently shows its tooltip.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

pub const DEFAULT_TOOLTIP_DELAY_MS: u32 = 700;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipState {
    /// Hover delay before a tooltip opens.
    pub delay_ms: u32,
    /// Key of the trigger whose tooltip is open. At most one at a time.
    pub open: Option<String>,
    /// Trigger being hovered whose delay has not elapsed yet.
    pub pending: Option<String>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self { delay_ms: DEFAULT_TOOLTIP_DELAY_MS, open: None, pending: None }
    }
}

impl TooltipState {
    pub fn show(&mut self, key: &str) {
        self.pending = None;
        self.open = Some(key.to_owned());
    }

    /// Start the hover delay for `key`. Call [`Self::fire`] once it elapses.
    pub fn arm(&mut self, key: &str) {
        self.pending = Some(key.to_owned());
    }

    /// Open `key` if it is still the pending trigger. Returns whether it opened.
    pub fn fire(&mut self, key: &str) -> bool {
        if self.pending.as_deref() != Some(key) {
            return false;
        }
        self.show(key);
        true
    }

    /// Close the tooltip, or cancel its delay, if `key` still owns it.
    pub fn hide(&mut self, key: &str) {
        if self.pending.as_deref() == Some(key) {
            self.pending = None;
        }
        if self.open.as_deref() == Some(key) {
            self.open = None;
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.as_deref() == Some(key)
    }
}
