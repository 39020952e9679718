// Greedy frame-scoped label placement.
//
// The placer holds the boxes placed so far this frame and probes a fixed
// ladder of candidate offsets for each new request; the first candidate
// that overlaps nothing wins. If every candidate collides the label falls
// back to its anchor, accepting overlap rather than failing. The placer is
// built fresh each frame and discarded with it.

use smallvec::SmallVec;

/// Candidate offsets in units of the requested box size, probed in order:
/// anchor, one box height up/down, one box width left/right, two box
/// heights up/down, then the four diagonals.
const CANDIDATE_OFFSETS: [(f64, f64); 11] = [
    (0.0, 0.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (0.0, -2.0),
    (0.0, 2.0),
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
    (1.0, 1.0),
];

#[derive(Clone, Copy, Debug)]
struct PlacedBox {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl PlacedBox {
    fn overlaps(&self, other: &PlacedBox) -> bool {
        (self.x - other.x).abs() * 2.0 < self.w + other.w
            && (self.y - other.y).abs() * 2.0 < self.h + other.h
    }
}

/// Final placement for one label. `x`/`y` is the box centre; `displaced`
/// means a leader line back to the anchor should be drawn.
#[derive(Clone, Copy, Debug)]
pub struct PlacedLabel {
    pub x: f64,
    pub y: f64,
    pub displaced: bool,
}

#[derive(Default)]
pub struct LabelPlacer {
    placed: SmallVec<[PlacedBox; 8]>,
}

impl LabelPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a `w`×`h` box whose preferred centre is the anchor.
    pub fn place(&mut self, anchor_x: f64, anchor_y: f64, w: f64, h: f64) -> PlacedLabel {
        for (dx, dy) in CANDIDATE_OFFSETS {
            let candidate = PlacedBox {
                x: anchor_x + dx * w,
                y: anchor_y + dy * h,
                w,
                h,
            };
            if self.placed.iter().any(|b| b.overlaps(&candidate)) {
                continue;
            }
            self.placed.push(candidate);
            return PlacedLabel {
                x: candidate.x,
                y: candidate.y,
                displaced: dx != 0.0 || dy != 0.0,
            };
        }
        // Every candidate collides: overlap at the anchor beats no label.
        self.placed.push(PlacedBox {
            x: anchor_x,
            y: anchor_y,
            w,
            h,
        });
        PlacedLabel {
            x: anchor_x,
            y: anchor_y,
            displaced: false,
        }
    }
}
