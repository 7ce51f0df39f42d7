//! Alternating background bands behind each visible block.
//!
//! Geometry comes from the host through [`LayerView`]. Units are whatever the
//! host measures in: pixels for a graphical editor, cells for the terminal.

use crate::blocks::Block;
use crate::extension::ViewUpdate;
use crate::text::Span;

/// Vertical extent of a position on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub top: f64,
    pub bottom: f64,
}

/// Viewport and coordinate queries the layer needs from the host.
pub trait LayerView {
    /// Rendered document ranges, in document order.
    fn visible_ranges(&self) -> Vec<Span>;

    /// Screen extent of the line at `pos`, or `None` if it is not rendered.
    fn coords_at_pos(&self, pos: usize) -> Option<Coords>;

    fn document_top(&self) -> f64;

    fn document_padding_top(&self) -> f64;

    fn content_width(&self) -> f64;

    fn gutter_width(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandClass {
    Even,
    Odd,
}

impl BandClass {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            BandClass::Even
        } else {
            BandClass::Odd
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BandClass::Even => "block-even",
            BandClass::Odd => "block-odd",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectangleMarker {
    pub class: BandClass,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RectangleMarker {
    pub const TOP_INSET: f64 = 1.0;
    pub const HEIGHT_PAD: f64 = 2.0;
}

/// One band per visible block.
///
/// Blocks outside the viewport produce nothing but still advance the index,
/// so a block's colour never depends on how far the user has scrolled.
pub fn block_markers(blocks: &[Block], view: &dyn LayerView, editor_width: f64) -> Vec<RectangleMarker> {
    let visible = view.visible_ranges();
    let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
        return Vec::new();
    };
    let origin = view.document_top() - view.document_padding_top();

    let mut markers = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        if !visible.iter().any(|range| block.content.touches(*range)) {
            continue;
        }

        let from = view.coords_at_pos(block.content.start.max(first.start));
        let to = view.coords_at_pos(block.content.end.min(last.end));
        let (Some(from), Some(to)) = (from, to) else {
            continue;
        };

        markers.push(RectangleMarker {
            class: BandClass::for_index(index),
            left: 0.0,
            top: from.top - origin - RectangleMarker::TOP_INSET,
            width: editor_width,
            height: (to.bottom - from.top) + RectangleMarker::HEIGHT_PAD,
        });
    }
    markers
}

/// The background layer: cached markers plus the measured editor width.
#[derive(Debug, Clone, Default)]
pub struct BlockLayer {
    editor_width: f64,
    markers: Vec<RectangleMarker>,
}

impl BlockLayer {
    pub const CLASS: &'static str = "blocks-layer";
    /// The layer draws below the text.
    pub const ABOVE: bool = false;

    pub fn should_update(update: &ViewUpdate) -> bool {
        update.doc_changed || update.viewport_changed
    }

    /// Re-measure on geometry changes and redraw when needed.
    ///
    /// Returns whether the markers were rebuilt.
    pub fn update(&mut self, update: &ViewUpdate, blocks: &[Block], view: &dyn LayerView) -> bool {
        if update.geometry_changed {
            self.editor_width = view.content_width() + view.gutter_width();
        }
        if !Self::should_update(update) && !update.geometry_changed {
            return false;
        }
        self.markers = block_markers(blocks, view, self.editor_width);
        true
    }

    pub fn editor_width(&self) -> f64 {
        self.editor_width
    }

    pub fn markers(&self) -> &[RectangleMarker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// One row per line, lines given by their start offsets.
    struct RowView {
        line_starts: Vec<usize>,
        visible: Vec<Span>,
        row_height: f64,
    }

    impl RowView {
        fn line_of(&self, pos: usize) -> usize {
            self.line_starts.partition_point(|start| *start <= pos) - 1
        }
    }

    impl LayerView for RowView {
        fn visible_ranges(&self) -> Vec<Span> {
            self.visible.clone()
        }

        fn coords_at_pos(&self, pos: usize) -> Option<Coords> {
            let top = self.line_of(pos) as f64 * self.row_height + 10.0;
            Some(Coords {
                top,
                bottom: top + self.row_height,
            })
        }

        fn document_top(&self) -> f64 {
            10.0
        }

        fn document_padding_top(&self) -> f64 {
            4.0
        }

        fn content_width(&self) -> f64 {
            200.0
        }

        fn gutter_width(&self) -> f64 {
            30.0
        }
    }

    // "\n∞∞∞text\nhello\n∞∞∞json\n{}\n"
    fn sample() -> (Vec<Block>, RowView) {
        let blocks = vec![
            Block::new(Span::new(0, 15), Span::new(15, 20)),
            Block::new(Span::new(20, 35), Span::new(35, 38)),
        ];
        let view = RowView {
            line_starts: vec![0, 1, 15, 21, 35, 38],
            visible: vec![Span::new(0, 38)],
            row_height: 20.0,
        };
        (blocks, view)
    }

    fn all_changed() -> ViewUpdate {
        ViewUpdate {
            doc_changed: true,
            viewport_changed: true,
            geometry_changed: true,
        }
    }

    #[test]
    fn bands_alternate_and_span_editor_width() {
        let (blocks, view) = sample();
        let mut layer = BlockLayer::default();
        assert!(layer.update(&all_changed(), &blocks, &view));

        assert_eq!(
            layer.markers(),
            &[
                RectangleMarker {
                    class: BandClass::Even,
                    left: 0.0,
                    top: 43.0,
                    width: 230.0,
                    height: 22.0,
                },
                RectangleMarker {
                    class: BandClass::Odd,
                    left: 0.0,
                    top: 83.0,
                    width: 230.0,
                    height: 42.0,
                },
            ]
        );
    }

    #[test]
    fn offscreen_blocks_still_count_for_parity() {
        let (blocks, mut view) = sample();
        view.visible = vec![Span::new(35, 38)];

        let markers = block_markers(&blocks, &view, 100.0);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].class, BandClass::Odd);
    }

    #[test]
    fn selection_only_updates_do_not_redraw() {
        let (blocks, view) = sample();
        let mut layer = BlockLayer::default();
        layer.update(&all_changed(), &blocks, &view);

        assert!(!layer.update(&ViewUpdate::default(), &[], &view));
        assert_eq!(layer.markers().len(), 2);
    }

    #[test]
    fn width_is_measured_only_on_geometry_change() {
        let (blocks, view) = sample();
        let mut layer = BlockLayer::default();
        let doc_only = ViewUpdate {
            doc_changed: true,
            ..ViewUpdate::default()
        };

        layer.update(&doc_only, &blocks, &view);
        assert_eq!(layer.editor_width(), 0.0);

        layer.update(&all_changed(), &blocks, &view);
        assert_eq!(layer.editor_width(), 230.0);
    }

    #[test]
    fn band_classes() {
        assert_eq!(BandClass::for_index(0).class(), "block-even");
        assert_eq!(BandClass::for_index(3).class(), "block-odd");
        assert_eq!(BlockLayer::CLASS, "blocks-layer");
        assert!(!BlockLayer::ABOVE);
    }
}
