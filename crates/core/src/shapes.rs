//! Shapes module - the static piece catalog
//!
//! Every piece is the same type parameterised by a row of this table: an
//! ordered offset list, a color and a kind tag. Offsets are `(row, col)`
//! relative to the spawn anchor. The second offset is the rotation pivot; a
//! one-cell shape pivots on its only cell.

use crate::types::{Color, Pos, ShapeKind};

/// Index of the pivot within a template's offsets.
pub const PIVOT_INDEX: usize = 1;

/// One row of the piece catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub kind: ShapeKind,
    pub offsets: &'static [(i16, i16)],
    pub color: Color,
}

/// Inclusive bounding box of a template's offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: i16,
    pub max_row: i16,
    pub min_col: i16,
    pub max_col: i16,
}

impl Bounds {
    pub fn rows(&self) -> i16 {
        self.max_row - self.min_row + 1
    }

    pub fn cols(&self) -> i16 {
        self.max_col - self.min_col + 1
    }
}

impl ShapeTemplate {
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of the pivot cell.
    pub fn pivot(&self) -> (i16, i16) {
        self.offsets[PIVOT_INDEX.min(self.offsets.len() - 1)]
    }

    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds {
            min_row: i16::MAX,
            max_row: i16::MIN,
            min_col: i16::MAX,
            max_col: i16::MIN,
        };
        for &(r, c) in self.offsets {
            b.min_row = b.min_row.min(r);
            b.max_row = b.max_row.max(r);
            b.min_col = b.min_col.min(c);
            b.max_col = b.max_col.max(c);
        }
        b
    }

    /// Absolute cell positions with the template placed at `anchor`.
    pub fn cells_at(&self, anchor: Pos) -> Vec<Pos> {
        self.offsets
            .iter()
            .map(|&(r, c)| Pos::new(anchor.row + r, anchor.col + c))
            .collect()
    }
}

/// The nine templates, in [`ShapeKind::ALL`] order.
pub static CATALOG: [ShapeTemplate; 9] = [
    ShapeTemplate {
        kind: ShapeKind::Single,
        offsets: &[(0, 0)],
        color: Color::new(230, 230, 230),
    },
    ShapeTemplate {
        kind: ShapeKind::Bar2,
        offsets: &[(0, 0), (0, 1)],
        color: Color::new(240, 220, 80),
    },
    ShapeTemplate {
        kind: ShapeKind::Bar3,
        offsets: &[(0, 0), (0, 1), (0, 2)],
        color: Color::new(80, 220, 220),
    },
    ShapeTemplate {
        kind: ShapeKind::Vee,
        offsets: &[(0, 0), (1, 0), (1, 1)],
        color: Color::new(100, 220, 120),
    },
    ShapeTemplate {
        kind: ShapeKind::Cross,
        offsets: &[(0, 1), (1, 1), (1, 0), (1, 2), (2, 1)],
        color: Color::new(200, 120, 220),
    },
    ShapeTemplate {
        kind: ShapeKind::Split,
        offsets: &[(0, 0), (0, 2)],
        color: Color::new(220, 80, 80),
    },
    ShapeTemplate {
        kind: ShapeKind::HookLeft,
        offsets: &[(0, 0), (1, 0), (1, 1), (1, 2), (1, 3)],
        color: Color::new(80, 120, 220),
    },
    ShapeTemplate {
        kind: ShapeKind::HookRight,
        offsets: &[(0, 3), (1, 3), (1, 2), (1, 1), (1, 0)],
        color: Color::new(255, 165, 0),
    },
    ShapeTemplate {
        kind: ShapeKind::Block,
        offsets: &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
        color: Color::new(160, 160, 200),
    },
];

/// Look up the template for a kind.
pub fn template(kind: ShapeKind) -> &'static ShapeTemplate {
    &CATALOG[kind.index()]
}

/// Longest side over all templates' bounding boxes.
///
/// The spawn band has to be at least this deep.
pub fn max_extent() -> usize {
    CATALOG
        .iter()
        .map(|t| {
            let b = t.bounds();
            b.rows().max(b.cols()) as usize
        })
        .max()
        .unwrap_or(1)
}
