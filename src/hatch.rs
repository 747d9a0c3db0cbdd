//! Procedural hatch patterns, composed entirely through the public factory
//! API: each recipe builds a `pattern` element with line/polygon/path
//! children and returns its handle for registration into the defs block.

use crate::document::Document;
use crate::geom::Point;
use crate::node::NodeId;
use crate::path::PathBuilder;
use crate::style::StrokeStyle;

pub struct HatchBuilder<'doc> {
    doc: &'doc mut Document,
}

impl<'doc> HatchBuilder<'doc> {
    pub fn new(doc: &'doc mut Document) -> Self {
        Self { doc }
    }

    fn apply_stroke(&mut self, nodes: &[NodeId], stroke: Option<&StrokeStyle>) {
        if let Some(stroke) = stroke {
            for node in nodes {
                self.doc
                    .node_mut(*node)
                    .stroke(&stroke.color, Some(stroke.width), stroke.opacity);
            }
        }
    }

    /// Two diagonals crossing corner to corner.
    pub fn saltire(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let l1 = self.doc.line(0.0, 0.0, x_size, y_size, "");
        let l2 = self.doc.line(0.0, y_size, x_size, 0.0, "");
        self.doc.append_child(pattern, l1);
        self.doc.append_child(pattern, l2);
        self.apply_stroke(&[l1, l2], stroke);
        pattern
    }

    /// Horizontal and vertical center lines.
    pub fn cross(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let half_x = x_size / 2.0;
        let half_y = y_size / 2.0;
        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let l1 = self.doc.line(0.0, half_y, x_size, half_y, "");
        let l2 = self.doc.line(half_x, 0.0, half_x, y_size, "");
        self.doc.append_child(pattern, l1);
        self.doc.append_child(pattern, l2);
        self.apply_stroke(&[l1, l2], stroke);
        pattern
    }

    /// Parallel diagonals, staggered so the tile edges join seamlessly.
    pub fn diagonal(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let half_x = x_size / 2.0;
        let half_y = y_size / 2.0;
        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let l1 = self.doc.line(0.0, half_y, half_x, y_size, "");
        let l2 = self.doc.line(0.0, 0.0, x_size, y_size, "");
        let l3 = self.doc.line(half_x, 0.0, x_size, half_y, "");
        self.doc.append_child(pattern, l1);
        self.doc.append_child(pattern, l2);
        self.doc.append_child(pattern, l3);
        self.apply_stroke(&[l1, l2, l3], stroke);
        pattern
    }

    /// Diamond tiling with connecting spokes.
    pub fn floor(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let half_x = x_size / 2.0;
        let half_y = y_size / 2.0;
        let qrt_x = x_size / 4.0;
        let qrt_y = y_size / 4.0;

        let pts = [
            Point::new(qrt_x, half_y),
            Point::new(half_x, qrt_y),
            Point::new(x_size - qrt_x, half_y),
            Point::new(half_x, y_size - qrt_y),
        ];

        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let l1 = self.doc.line(0.0, half_y, pts[0].x, pts[0].y, "");
        let l2 = self.doc.line(half_x, 0.0, pts[1].x, pts[1].y, "");
        let l3 = self.doc.line(pts[2].x, pts[2].y, x_size, half_y, "");
        let l4 = self.doc.line(pts[3].x, pts[3].y, half_x, y_size, "");
        let diamond = self.doc.polygon(&pts, "");
        self.doc.node_mut(diamond).fill("none", None);
        for node in [l1, l2, l3, l4, diamond] {
            self.doc.append_child(pattern, node);
        }
        self.apply_stroke(&[l1, l2, l3, l4, diamond], stroke);
        pattern
    }

    /// Running-bond brick courses.
    pub fn bricks(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let half_x = x_size / 2.0;
        let half_y = y_size / 2.0;
        let gap = x_size.max(y_size) / 20.0;
        let gap2 = 2.0 * gap;

        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let r1 = self.doc.rect(gap, gap, x_size - gap2, half_y - gap2, "");
        let r2 = self
            .doc
            .rect(half_x + gap, half_y + gap, x_size - gap2, half_y - gap2, "");
        let r3 = self
            .doc
            .rect(-half_x + gap, half_y + gap, x_size - gap2, half_y - gap2, "");
        for node in [r1, r2, r3] {
            self.doc.node_mut(node).fill("none", None);
            self.doc.append_child(pattern, node);
        }
        self.apply_stroke(&[r1, r2, r3], stroke);
        pattern
    }

    /// Interlocking wave courses.
    pub fn roof(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let half_x = x_size / 2.0;
        let half_y = y_size / 2.0;

        let mut builder = PathBuilder::new();
        builder
            .move_abs(0.0, half_y)
            .cubic_abs(half_x / 2.0, half_y, half_x, y_size - half_y / 2.0, half_x, y_size)
            .cubic_abs(half_x, y_size - half_y / 2.0, x_size - half_x / 2.0, half_y, x_size, half_y)
            .move_abs(0.0, half_y)
            .cubic_abs(0.0, half_y / 2.0, half_x / 2.0, 0.0, half_x, 0.0)
            .cubic_abs(x_size - half_x / 2.0, 0.0, x_size, half_y / 2.0, x_size, half_y);
        let d = builder.build();

        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let path = self.doc.path(&d, "");
        self.doc.node_mut(path).fill("none", None);
        self.doc.append_child(pattern, path);
        self.apply_stroke(&[path], stroke);
        pattern
    }

    /// Scalloped tile rows.
    pub fn roof_tiles(
        &mut self,
        name: &str,
        x_size: f64,
        y_size: f64,
        stroke: Option<&StrokeStyle>,
    ) -> NodeId {
        let block_x = x_size / 10.0;
        let block_y = y_size / 10.0;

        let mut builder = PathBuilder::new();
        builder
            .move_abs(block_x, y_size)
            .line_abs(0.0, block_y)
            .line_abs(block_x, 0.0)
            .cubic_abs(
                block_x,
                2.0 * block_y,
                x_size - block_x,
                2.0 * block_y,
                x_size - block_x,
                0.0,
            )
            .line_abs(x_size, block_y)
            .line_abs(x_size - block_x, y_size)
            .move_abs(0.0, block_y)
            .cubic_abs(0.0, 3.0 * block_y, x_size, 3.0 * block_y, x_size, block_y);
        let d = builder.build();

        let pattern = self.doc.pattern(0.0, 0.0, x_size, y_size, name);
        let path = self.doc.path(&d, "");
        self.doc.node_mut(path).fill("none", None);
        self.doc.append_child(pattern, path);
        self.apply_stroke(&[path], stroke);
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saltire_builds_two_lines_under_the_pattern() {
        let mut doc = Document::default();
        let stroke = StrokeStyle {
            color: "#404040".to_string(),
            width: 1.0,
            opacity: None,
        };
        let pattern = HatchBuilder::new(&mut doc).saltire("hatch", 8.0, 8.0, Some(&stroke));
        assert_eq!(doc.node(pattern).id(), "hatch");
        assert_eq!(doc.node(pattern).children().len(), 2);
        doc.add_to_defs(pattern);
        let svg = doc.render();
        assert!(svg.contains("<pattern"));
        assert!(svg.contains("stroke=\"#404040\""));
    }

    #[test]
    fn roof_path_uses_curves() {
        let mut doc = Document::default();
        let pattern = HatchBuilder::new(&mut doc).roof("roof", 16.0, 16.0, None);
        let child = doc.node(pattern).children()[0];
        let lines = doc.node(child).render(&[], 0, 4);
        let d = lines.iter().find(|l| l.contains("d=\"")).unwrap();
        assert!(d.contains("M 0 -8 C"));
    }
}
