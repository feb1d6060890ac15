//! Spatial placement of children inside a container's padded box.

use crate::style::direction::{Axis, DirectionInfo};
use crate::style::node::{LayerMode, StyleNode};

/// Computes overlay offsets for a container's children in document order.
///
/// `Single` mode flows children along the direction axis, collapsing adjacent margins to their
/// maximum. The flow cursor starts at the box edge itself, so the parent's leading padding on
/// the flow axis is not applied. `Multi` mode stacks every child at the padded origin.
#[derive(Debug)]
pub(crate) struct Placer {
    mode: LayerMode,
    direction: DirectionInfo,
    pad_left: i32,
    pad_top: i32,
    box_width: i32,
    box_height: i32,
    cursor: i32,
    pending_margin: i32,
}

impl Placer {
    pub(crate) fn new(parent: &StyleNode, box_size: (i32, i32)) -> Self {
        Self {
            mode: parent.layer_mode,
            direction: parent.direction,
            pad_left: parent.padding.left.to_pixel(0),
            pad_top: parent.padding.top.to_pixel(0),
            box_width: box_size.0,
            box_height: box_size.1,
            cursor: 0,
            pending_margin: 0,
        }
    }

    /// Offset of the next child's padded box.
    pub(crate) fn place(&mut self, child: &StyleNode) -> (i32, i32) {
        let m = &child.margin;
        let (ml, mt, mr, mb) = (
            m.left.to_pixel(0),
            m.top.to_pixel(0),
            m.right.to_pixel(0),
            m.bottom.to_pixel(0),
        );

        let pos = match self.mode {
            LayerMode::Multi => (self.pad_left + ml, self.pad_top + mt),
            LayerMode::Single => {
                let (w, h) = child.size_with_padding();
                match (self.direction.axis, self.direction.reversed) {
                    (Axis::Row, false) => {
                        let offset = self.advance(ml, w, mr);
                        (offset, self.pad_top + mt)
                    }
                    (Axis::Row, true) => {
                        let offset = self.advance(mr, w, ml);
                        (self.box_width - offset - w, self.pad_top + mt)
                    }
                    (Axis::Column, false) => {
                        let offset = self.advance(mt, h, mb);
                        (self.pad_left + ml, offset)
                    }
                    (Axis::Column, true) => {
                        let offset = self.advance(mb, h, mt);
                        (self.pad_left + ml, self.box_height - offset - h)
                    }
                }
            }
        };
        tracing::trace!(x = pos.0, y = pos.1, mode = %self.mode, "placed child");
        pos
    }

    /// Move the flow cursor past one child and return its leading offset.
    fn advance(&mut self, leading: i32, extent: i32, trailing: i32) -> i32 {
        let collapsed = leading.max(self.pending_margin);
        let offset = self.cursor + collapsed;
        self.cursor = offset + extent;
        self.pending_margin = trailing;
        offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/layout.rs"]
mod tests;
