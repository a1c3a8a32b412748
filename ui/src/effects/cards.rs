//! Collapsible card groups. At most one card per group is open.

use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardGroup {
    Docs,
    Table,
}

impl CardGroup {
    pub const ALL: [CardGroup; 2] = [CardGroup::Docs, CardGroup::Table];

    /// Class carried by every card of the group in the page markup.
    pub fn selector(self) -> &'static str {
        match self {
            CardGroup::Docs => ".docs-card",
            CardGroup::Table => ".table-card",
        }
    }
}

/// Close every other card in `group`, then flip the clicked one.
pub fn toggle_card<V: View + ?Sized>(view: &V, group: CardGroup, index: usize) {
    let count = view.card_count(group);
    if index >= count {
        return;
    }
    let was_open = view.is_card_open(group, index);
    for other in (0..count).filter(|&i| i != index) {
        view.set_card_open(group, other, false);
    }
    view.set_card_open(group, index, !was_open);
}
