// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One of the nine regions of a crop rectangle's 3×3 grid.
///
/// The zone picked at pointer-down decides what a drag does for the rest of
/// the gesture: corners resize two edges, edge zones resize one, and
/// [`Zone::Center`] moves the rectangle without resizing it.
///
/// Discriminants are the grid index `row * 3 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Top-left corner.
    TopLeft = 0,
    /// Top edge.
    TopCenter = 1,
    /// Top-right corner.
    TopRight = 2,
    /// Left edge.
    CenterLeft = 3,
    /// Interior; moves the rectangle.
    Center = 4,
    /// Right edge.
    CenterRight = 5,
    /// Bottom-left corner.
    BottomLeft = 6,
    /// Bottom edge.
    BottomCenter = 7,
    /// Bottom-right corner.
    BottomRight = 8,
}

/// What a zone does to one axis of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisHandle {
    /// Drags the near edge (left or top); the far edge stays put.
    Start,
    /// Drags the far edge (right or bottom); the near edge stays put.
    End,
    /// Translates the whole extent.
    Move,
    /// Leaves the axis untouched.
    Fixed,
}

impl Zone {
    /// All zones in grid order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Looks up a zone by grid index `row * 3 + col`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a zone by column and row, each in `0..3`.
    #[must_use]
    pub fn from_cell(col: usize, row: usize) -> Option<Self> {
        if col > 2 || row > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Grid index `row * 3 + col`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid column, `0..3`.
    #[must_use]
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Grid row, `0..3`.
    #[must_use]
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Effect on the horizontal axis.
    #[must_use]
    pub fn horizontal(self) -> AxisHandle {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => AxisHandle::Start,
            Self::TopRight | Self::CenterRight | Self::BottomRight => AxisHandle::End,
            Self::Center => AxisHandle::Move,
            Self::TopCenter | Self::BottomCenter => AxisHandle::Fixed,
        }
    }

    /// Effect on the vertical axis.
    #[must_use]
    pub fn vertical(self) -> AxisHandle {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => AxisHandle::Start,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => AxisHandle::End,
            Self::Center => AxisHandle::Move,
            Self::CenterLeft | Self::CenterRight => AxisHandle::Fixed,
        }
    }

    /// Returns `true` for zones that drag the left edge.
    #[must_use]
    pub fn touches_left(self) -> bool {
        self.horizontal() == AxisHandle::Start
    }

    /// Returns `true` for zones that drag the right edge.
    #[must_use]
    pub fn touches_right(self) -> bool {
        self.horizontal() == AxisHandle::End
    }

    /// Returns `true` for zones that drag the top edge.
    #[must_use]
    pub fn touches_top(self) -> bool {
        self.vertical() == AxisHandle::Start
    }

    /// Returns `true` for zones that drag the bottom edge.
    #[must_use]
    pub fn touches_bottom(self) -> bool {
        self.vertical() == AxisHandle::End
    }

    /// Returns `true` for the zone that moves instead of resizing.
    #[must_use]
    pub fn is_move(self) -> bool {
        self == Self::Center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, zone) in Zone::ALL.iter().enumerate() {
            assert_eq!(zone.index(), i);
            assert_eq!(Zone::from_index(i), Some(*zone));
            assert_eq!(Zone::from_cell(zone.column(), zone.row()), Some(*zone));
        }
        assert_eq!(Zone::from_index(9), None);
        assert_eq!(Zone::from_cell(3, 0), None);
        assert_eq!(Zone::from_cell(0, 3), None);
    }

    #[test]
    fn edge_membership() {
        assert!(Zone::TopLeft.touches_left() && Zone::TopLeft.touches_top());
        assert!(Zone::BottomRight.touches_right() && Zone::BottomRight.touches_bottom());
        assert!(!Zone::TopCenter.touches_left() && !Zone::TopCenter.touches_right());
        assert!(!Zone::CenterRight.touches_top() && !Zone::CenterRight.touches_bottom());
        assert!(Zone::Center.is_move());
        for zone in Zone::ALL {
            assert!(!(zone.touches_left() && zone.touches_right()));
            assert!(!(zone.touches_top() && zone.touches_bottom()));
        }
    }

    #[test]
    fn only_center_moves() {
        let moving: usize = Zone::ALL
            .iter()
            .filter(|z| z.horizontal() == AxisHandle::Move || z.vertical() == AxisHandle::Move)
            .count();
        assert_eq!(moving, 1);
    }
}
