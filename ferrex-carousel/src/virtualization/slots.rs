use super::VirtualWindow;
use crate::math::logical_for_position;
use crate::types::LogicalIndex;

/// Render identity of a mounted slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub epoch: u64,
    pub position: i64,
}

/// One slot the host should mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSlot {
    pub key: SlotKey,
    pub position: i64,
    pub logical_index: LogicalIndex,
}

/// Slots for every position in `window`, in position order.
pub fn render_slots(
    window: Option<&VirtualWindow>,
    epoch: u64,
    count: usize,
    looping: bool,
) -> Vec<RenderSlot> {
    let Some(window) = window else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    window
        .positions()
        .map(|position| RenderSlot {
            key: SlotKey { epoch, position },
            position,
            logical_index: logical_for_position(position, count, looping),
        })
        .collect()
}
