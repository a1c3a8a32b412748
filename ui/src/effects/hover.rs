//! Lift decorative nodes while the pointer is over them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

impl HoverEvent {
    /// Vertical offset in px (negative is up).
    pub fn offset(self, lift_px: f64) -> f64 {
        match self {
            HoverEvent::Enter => -lift_px,
            HoverEvent::Leave => 0.0,
        }
    }
}
