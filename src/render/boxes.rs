//! Box rendering: resolve the interior size, render the content view into
//! it, align, then frame.

use tracing::trace;

use super::Renderer;
use crate::text::{bordered, place_within};
use crate::view::{BoxNode, Size};

/// Interior extent (inside the frame, including padding) along one axis.
///
/// Filling takes the parent's extent minus the frame on both sides. Otherwise
/// the content view's declared extent plus padding is used, or `0` (intrinsic)
/// when the content declares none.
const fn interior_extent(fill: bool, parent: usize, frame: usize, declared: usize, padding: usize) -> usize {
    if fill {
        parent.saturating_sub(frame)
    } else if declared > 0 {
        declared.saturating_add(padding)
    } else {
        0
    }
}

impl Renderer {
    pub(crate) fn render_box(&self, node: &BoxNode, parent: Size) -> String {
        let style = &node.style;
        let frame = 2 * style.border.thickness();
        let declared = node.content.as_ref().map_or(Size::UNCONSTRAINED, |view| view.size);

        let interior = Size::new(
            interior_extent(
                style.fill_width,
                parent.width,
                frame,
                declared.width,
                style.padding.horizontal(),
            ),
            interior_extent(
                style.fill_height,
                parent.height,
                frame,
                declared.height,
                style.padding.vertical(),
            ),
        );
        let content_size = interior.shrink(style.padding);
        trace!(?interior, ?content_size, "box interior");

        let content = node
            .content
            .as_ref()
            .map(|view| self.render_children(&view.children, content_size))
            .unwrap_or_default();

        // Pads only: oversized content passes through unclipped.
        let aligned = place_within(
            content_size.width,
            content_size.height,
            style.h_align,
            style.v_align,
            &content,
        );

        bordered(
            &aligned,
            style.border,
            self.border_color(style.border_color),
            style.padding,
        )
    }
}
