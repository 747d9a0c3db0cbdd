//! The document: coordinate-system state, identifier allocation, node/defs/
//! style registries, the shape-factory surface, and the top-level render pass.
//!
//! Callers work in a Y-up logical space; every factory flips logical Y values
//! into SVG's Y-down space exactly once, at the point the attribute is
//! written. Each document owns all of its state, so independent documents
//! never share identifiers or nodes.

use std::collections::BTreeMap;

use crate::error::SvgError;
use crate::geom::{Point, deg_to_rad, fmt_num};
use crate::node::{Node, NodeId, NodeKind};
use crate::style::StyleRule;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = DEFAULT_WIDTH / 16.0 * 9.0;

/// Reserved identifier of the root group every document starts with.
pub const ROOT_NODE_ID: &str = "scene-root";

/// Reserved identifier of the sheet drawn by [`Document::view_box_background`].
pub const VIEWBOX_BACKGROUND_ID: &str = "viewbox-background";

const DEFAULT_VIEWBOX_EXTENT: f64 = 10_000.0;
const INDENT: usize = 4;
const DEFAULT_LINE_SPACING: f64 = 20.0;

/// Axis selector for view-box-relative coordinate conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    W,
    H,
}

/// Transform components for [`Document::use_t`] reference placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placement {
    pub scale: Option<(f64, f64)>,
    pub translate: Option<(f64, f64)>,
    pub rotate: Option<f64>,
}

#[derive(Debug)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub viewbox_x: f64,
    pub viewbox_y: f64,
    pub viewbox_width: f64,
    pub viewbox_height: f64,
    pub title: String,
    pub desc: String,
    arena: Vec<Node>,
    root: NodeId,
    nodes: BTreeMap<String, NodeId>,
    defs: BTreeMap<String, NodeId>,
    styles: BTreeMap<String, StyleRule>,
    id_counter: u64,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        let mut doc = Self {
            width,
            height,
            viewbox_x: 0.0,
            viewbox_y: 0.0,
            viewbox_width: DEFAULT_VIEWBOX_EXTENT,
            viewbox_height: DEFAULT_VIEWBOX_EXTENT,
            title: "svg-scene document".to_string(),
            desc: "Scene composed with the svg-scene builder".to_string(),
            arena: Vec::new(),
            root: NodeId(0),
            nodes: BTreeMap::new(),
            defs: BTreeMap::new(),
            styles: BTreeMap::new(),
            id_counter: 1,
        };
        doc.root = doc.group(ROOT_NODE_ID);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Converts a logical Y-up coordinate to SVG's Y-down space.
    fn y(&self, value: f64) -> f64 {
        -value
    }

    /// Resolves the identifier a new node will carry: an empty or
    /// already-taken request falls back to `"<Kind>-<counter>"`. Synthesized
    /// ids are not re-checked against future explicit ids; the counter only
    /// grows, so collisions stay unlikely rather than impossible.
    fn next_id(&self, requested: &str, kind: NodeKind) -> String {
        if requested.is_empty() || self.nodes.contains_key(requested) {
            format!("{}-{}", kind.label(), self.id_counter)
        } else {
            requested.to_string()
        }
    }

    /// Registers a node under its resolved id and bumps the counter. The
    /// counter moves on every registration, explicit id or not.
    fn add_node(&mut self, node: Node) -> NodeId {
        let handle = NodeId(self.arena.len());
        self.nodes.insert(node.id().to_string(), handle);
        self.arena.push(node);
        self.id_counter += 1;
        handle
    }

    fn new_node(&mut self, kind: NodeKind, requested_id: &str) -> NodeId {
        let id = self.next_id(requested_id, kind);
        self.add_node(Node::new(&id, kind))
    }

    /// Maps a fraction in [0, 1] to an absolute coordinate (X/Y axes) or an
    /// extent (W/H axes) of the current view-box.
    pub fn coord_from_viewbox_perc(&self, perc: f64, axis: Axis) -> Result<f64, SvgError> {
        if !(0.0..=1.0).contains(&perc) {
            return Err(SvgError::PercentOutOfRange { value: perc });
        }
        Ok(match axis {
            Axis::X => self.viewbox_width * perc + self.viewbox_x,
            Axis::Y => self.viewbox_height * perc + self.viewbox_y,
            Axis::W => self.viewbox_width * perc,
            Axis::H => self.viewbox_height * perc,
        })
    }

    /// Updates the logical view window and re-translates the root so scene
    /// content follows the new origin. Content is repositioned, never
    /// rescaled.
    pub fn set_viewbox(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.viewbox_x = x;
        self.viewbox_y = y;
        self.viewbox_width = width;
        self.viewbox_height = height;
        let root = self.root;
        self.node_mut(root).translate(0.0, -y);
    }

    /// Draws a translucent sheet covering the current view-box, so the mapped
    /// window is visible while composing a scene.
    pub fn view_box_background(&mut self) -> NodeId {
        let sheet = self.rect(
            self.viewbox_x,
            self.viewbox_y,
            self.viewbox_width,
            self.viewbox_height,
            VIEWBOX_BACKGROUND_ID,
        );
        self.node_mut(sheet)
            .fill("#FFFFFF", None)
            .stroke("black", Some(1.0), None)
            .attrib("opacity", "0.5");
        self.add_to_root(sheet);
        sheet
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).add_child(child);
    }

    pub fn add_to_root(&mut self, node: NodeId) {
        let root = self.root;
        self.append_child(root, node);
    }

    /// Registers a node for reference via `url(#id)`/`<use>` instead of
    /// direct placement.
    pub fn add_to_defs(&mut self, node: NodeId) {
        let id = self.node(node).id().to_string();
        self.defs.insert(id, node);
    }

    pub fn add_style(&mut self, rule: StyleRule) {
        self.styles.insert(rule.id().to_string(), rule);
    }

    pub fn group(&mut self, id: &str) -> NodeId {
        self.new_node(NodeKind::Group, id)
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Line, id);
        let (fy1, fy2) = (self.y(y1), self.y(y2));
        self.node_mut(node)
            .attrib("x1", &fmt_num(x1))
            .attrib("y1", &fmt_num(fy1))
            .attrib("x2", &fmt_num(x2))
            .attrib("y2", &fmt_num(fy2));
        node
    }

    fn points_attr(&self, points: &[Point]) -> String {
        let mut sequence = String::new();
        for point in points {
            sequence.push_str(&format!(
                " {},{}",
                fmt_num(point.x),
                fmt_num(self.y(point.y))
            ));
        }
        sequence
    }

    pub fn polyline(&mut self, points: &[Point], id: &str) -> NodeId {
        let node = self.new_node(NodeKind::PolyLine, id);
        let sequence = self.points_attr(points);
        self.node_mut(node).attrib("points", &sequence);
        node
    }

    pub fn polygon(&mut self, points: &[Point], id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Polygon, id);
        let sequence = self.points_attr(points);
        self.node_mut(node).attrib("points", &sequence);
        node
    }

    /// Rectangle anchored at its bottom-left logical corner: the emitted SVG
    /// `y` is the flipped far corner, not the flipped anchor.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Rect, id);
        let top = self.y(y + height);
        self.node_mut(node)
            .attrib("x", &fmt_num(x))
            .attrib("y", &fmt_num(top))
            .attrib("width", &fmt_num(width))
            .attrib("height", &fmt_num(height));
        node
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Circle, id);
        let fcy = self.y(cy);
        self.node_mut(node)
            .attrib("cx", &fmt_num(cx))
            .attrib("cy", &fmt_num(fcy))
            .attrib("r", &fmt_num(radius));
        node
    }

    /// One-segment circular arc between two angles, as a path element. Only
    /// the center's Y is flipped before the start/end points are computed.
    /// The flag predicates are plain numeric comparisons: spans of exactly
    /// 180 degrees and spans beyond a full turn are not special-cased.
    pub fn arc(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        id: &str,
    ) -> NodeId {
        let node = self.new_node(NodeKind::Arc, id);
        let start_rad = deg_to_rad(start_deg);
        let end_rad = deg_to_rad(end_deg);
        let flipped_cy = self.y(center_y);
        let start_x = start_rad.cos() * radius + center_x;
        let start_y = start_rad.sin() * radius + flipped_cy;
        let end_x = end_rad.cos() * radius + center_x;
        let end_y = end_rad.sin() * radius + flipped_cy;

        let large_arc = if start_deg - end_deg > 180.0 { 1 } else { 0 };
        let sweep = if start_deg > end_deg { 1 } else { 0 };

        let d = format!(
            "M{},{} A{},{} 0 {} {} {},{}",
            fmt_num(start_x),
            fmt_num(start_y),
            fmt_num(radius),
            fmt_num(radius),
            large_arc,
            sweep,
            fmt_num(end_x),
            fmt_num(end_y)
        );
        self.node_mut(node).attrib("d", &d);
        node
    }

    /// Raw path element from already-encoded path data, typically the output
    /// of a [`PathBuilder`](crate::path::PathBuilder).
    pub fn path(&mut self, d: &str, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Path, id);
        self.node_mut(node).attrib("d", d);
        node
    }

    /// Image anchored at its bottom-left logical corner, like [`Self::rect`].
    pub fn image(&mut self, x: f64, y: f64, width: f64, height: f64, href: &str, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Image, id);
        let top = self.y(y + height);
        self.node_mut(node)
            .attrib("x", &fmt_num(x))
            .attrib("y", &fmt_num(top))
            .attrib("width", &fmt_num(width))
            .attrib("height", &fmt_num(height))
            .attrib("href", href);
        node
    }

    /// Image placed by view-box fractions instead of absolute coordinates.
    pub fn image_perc(
        &mut self,
        x_perc: f64,
        y_perc: f64,
        width_perc: f64,
        height_perc: f64,
        href: &str,
        id: &str,
    ) -> Result<NodeId, SvgError> {
        let x = self.coord_from_viewbox_perc(x_perc, Axis::X)?;
        let y = self.coord_from_viewbox_perc(y_perc, Axis::Y)?;
        let width = self.coord_from_viewbox_perc(width_perc, Axis::W)?;
        let height = self.coord_from_viewbox_perc(height_perc, Axis::H)?;
        Ok(self.image(x, y, width, height, href, id))
    }

    /// Text at a logical position. Single-line content becomes one text
    /// element carrying x/y directly. Multi-line content becomes a `<tspan>`
    /// per line inside a text element at the origin, nested in an auto-created
    /// group that carries the translation, so line positions stay relative to
    /// the group; the returned handle is that group.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        line_spacing: Option<f64>,
        id: &str,
    ) -> NodeId {
        if !content.contains('\n') {
            let node = self.new_node(NodeKind::Text, id);
            let flipped = self.y(y);
            self.node_mut(node)
                .attrib("x", &fmt_num(x))
                .attrib("y", &fmt_num(flipped))
                .raw_inner_content(content);
            return node;
        }

        let spacing = line_spacing.unwrap_or(DEFAULT_LINE_SPACING);
        let wrapper = self.group("");
        let node = self.new_node(NodeKind::Text, id);
        {
            let text = self.node_mut(node);
            for (index, line) in content.lines().enumerate() {
                text.raw_inner_content(&format!(
                    "<tspan x=\"0\" y=\"{}\">{line}</tspan>",
                    fmt_num(index as f64 * spacing)
                ));
            }
        }
        self.node_mut(wrapper).translate(x, y);
        self.append_child(wrapper, node);
        wrapper
    }

    /// Places a reference to a registered node. The target's id is offered as
    /// the node's own id and normally collides, so the use element falls back
    /// to a generated one.
    pub fn use_ref(&mut self, x: f64, y: f64, target_id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Use, target_id);
        let flipped = self.y(y);
        self.node_mut(node)
            .attrib("x", &fmt_num(x))
            .attrib("y", &fmt_num(flipped))
            .attrib("xlink:href", &format!("#{target_id}"));
        node
    }

    /// Reference placement with composed transforms. The adjustments are
    /// interdependent and ordered: the target position is divided by the
    /// scale factors first (counteracting the scale the transform will
    /// apply), a translate is then added scale-adjusted, and a rotation is
    /// finally recorded around the already-adjusted position.
    pub fn use_t(&mut self, target_id: &str, x: f64, y: f64, placement: &Placement) -> NodeId {
        let node = self.new_node(NodeKind::Use, target_id);

        let mut px = x;
        let mut py = y;
        if let Some((sx, sy)) = placement.scale {
            px /= sx;
            py /= sy;
        }
        if let Some((tx, ty)) = placement.translate {
            match placement.scale {
                Some((sx, sy)) => {
                    px += tx / sx;
                    py += ty / sy;
                }
                None => {
                    px += tx;
                    py += ty;
                }
            }
        }

        let flipped = self.y(py);
        let reference = self.node_mut(node);
        reference
            .attrib("x", &fmt_num(px))
            .attrib("y", &fmt_num(flipped))
            .attrib("xlink:href", &format!("#{target_id}"));
        if let Some((sx, sy)) = placement.scale {
            reference.scale(sx, sy);
        }
        if let Some(deg) = placement.rotate {
            reference.rotate(deg, px, py);
        }
        node
    }

    pub fn linear_gradient(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::LinearGradient, id);
        let (fy1, fy2) = (self.y(y1), self.y(y2));
        self.node_mut(node)
            .attrib("x1", &fmt_num(x1))
            .attrib("y1", &fmt_num(fy1))
            .attrib("x2", &fmt_num(x2))
            .attrib("y2", &fmt_num(fy2));
        node
    }

    pub fn radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::RadialGradient, id);
        let fcy = self.y(cy);
        self.node_mut(node)
            .attrib("cx", &fmt_num(cx))
            .attrib("cy", &fmt_num(fcy))
            .attrib("r", &fmt_num(radius));
        node
    }

    pub fn pattern(&mut self, x: f64, y: f64, width: f64, height: f64, id: &str) -> NodeId {
        let node = self.new_node(NodeKind::Pattern, id);
        let flipped = self.y(y);
        self.node_mut(node)
            .attrib("x", &fmt_num(x))
            .attrib("y", &fmt_num(flipped))
            .attrib("width", &fmt_num(width))
            .attrib("height", &fmt_num(height));
        node
    }

    /// Serializes the whole document. Rendering never fails; malformed
    /// caller-supplied content passes through verbatim.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(String::new());
        lines.push("<svg".to_string());
        lines.push(format!("    width=\"{}px\"", fmt_num(self.width)));
        lines.push(format!("    height=\"{}px\"", fmt_num(self.height)));
        lines.push(format!("    viewBox=\"{}\"", self.rendered_viewbox()));
        lines.push("    version=\"2.0\"".to_string());
        lines.push("    xmlns=\"http://www.w3.org/2000/svg\"".to_string());
        lines.push("    xmlns:xlink=\"http://www.w3.org/1999/xlink\"".to_string());
        lines.push("    >".to_string());
        lines.push("    <!-- Generator: svg-scene -->".to_string());
        lines.push(format!("    <title>{}</title>", self.title));
        lines.push(format!("    <desc>{}</desc>", self.desc));
        lines.push(String::new());

        lines.push("    <defs>".to_string());
        for node in self.defs.values() {
            lines.extend(self.arena[node.0].render(&self.arena, 2, INDENT));
        }
        lines.push("    </defs>".to_string());

        lines.push("    <style>".to_string());
        for style in self.styles.values() {
            lines.extend(style.render(2, INDENT));
        }
        lines.push("    </style>".to_string());
        lines.push(String::new());

        lines.extend(self.arena[self.root.0].render(&self.arena, 1, INDENT));

        lines.push("</svg>".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// The view window's vertical origin is pinned to `-height`: the mapped
    /// window's top edge sits at logical Y = 0 regardless of the stored
    /// view-box Y, which repositions content through the root translation
    /// instead of through this attribute.
    fn rendered_viewbox(&self) -> String {
        let top = -self.viewbox_height;
        format!(
            "{} {} {} {} ",
            fmt_num(self.viewbox_x),
            fmt_num(top),
            fmt_num(self.viewbox_width),
            fmt_num(self.viewbox_height)
        )
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
