//! Graphic nodes: one markup element each, accumulating attributes,
//! transforms, children and raw inner content.
//!
//! Nodes live in an arena owned by the [`Document`](crate::document::Document)
//! and are addressed through [`NodeId`] handles; they are created only by the
//! document's factory methods, which resolve the identifier and register the
//! node before handing it back for configuration.

use crate::error::SvgError;
use crate::geom::fmt_num;
use crate::style::{Align, GradientStop, MeetOrSlice, TextAnchor, TextStyle};

/// Handle into the document's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Line,
    PolyLine,
    Polygon,
    Rect,
    Circle,
    Arc,
    Path,
    Image,
    Text,
    Use,
    LinearGradient,
    RadialGradient,
    Pattern,
}

impl NodeKind {
    /// Type tag used when synthesizing identifiers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Line => "Line",
            Self::PolyLine => "PolyLine",
            Self::Polygon => "Polygon",
            Self::Rect => "Rect",
            Self::Circle => "Circle",
            Self::Arc => "Arc",
            Self::Path => "Path",
            Self::Image => "Image",
            Self::Text => "Text",
            Self::Use => "Use",
            Self::LinearGradient => "LinearGradient",
            Self::RadialGradient => "RadialGradient",
            Self::Pattern => "Pattern",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Group => "g",
            Self::Line => "line",
            Self::PolyLine => "polyline",
            Self::Polygon => "polygon",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Arc | Self::Path => "path",
            Self::Image => "image",
            Self::Text => "text",
            Self::Use => "use",
            Self::LinearGradient => "linearGradient",
            Self::RadialGradient => "radialGradient",
            Self::Pattern => "pattern",
        }
    }

    fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::AspectRatio => matches!(self, Self::Image),
            Capability::Anchor | Capability::TextStyle => {
                matches!(self, Self::Group | Self::Text)
            }
            Capability::Clear => matches!(self, Self::Group),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Capability {
    AspectRatio,
    Anchor,
    TextStyle,
    Clear,
}

impl Capability {
    fn name(self) -> &'static str {
        match self {
            Self::AspectRatio => "aspect_ratio",
            Self::Anchor => "anchor",
            Self::TextStyle => "text_style",
            Self::Clear => "clear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransformKind {
    Translate,
    Rotate,
    Scale,
}

#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    kind: NodeKind,
    tag: &'static str,
    attributes: Vec<(String, String)>,
    transforms: Vec<(TransformKind, String)>,
    children: Vec<NodeId>,
    inner_content: Vec<String>,
}

impl Node {
    pub(crate) fn new(id: &str, kind: NodeKind) -> Self {
        let mut node = Self {
            id: id.to_string(),
            kind,
            tag: kind.tag(),
            attributes: Vec::new(),
            transforms: Vec::new(),
            children: Vec::new(),
            inner_content: Vec::new(),
        };
        node.set_attr("id", id);
        node
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Sets or overwrites an attribute; the last write for a name wins and
    /// first-write order is the emission order.
    fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
    }

    /// Same discipline for transforms, keyed by transform kind: repeated calls
    /// of one kind replace rather than compose.
    fn set_transform(&mut self, kind: TransformKind, fragment: String) {
        if let Some(slot) = self.transforms.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = fragment;
        } else {
            self.transforms.push((kind, fragment));
        }
    }

    fn check(&self, capability: Capability) -> Result<(), SvgError> {
        if self.kind.supports(capability) {
            Ok(())
        } else {
            Err(SvgError::CapabilityMismatch {
                operation: capability.name(),
                tag: self.tag,
            })
        }
    }

    pub fn attrib(&mut self, name: &str, value: &str) -> &mut Self {
        self.set_attr(name, value);
        self
    }

    pub fn fill(&mut self, color: &str, opacity: Option<f64>) -> &mut Self {
        self.set_attr("fill", color);
        if let Some(opacity) = opacity {
            self.set_attr("fill-opacity", fmt_num(opacity));
        }
        self
    }

    pub fn fill_gradient(&mut self, gradient_id: &str) -> &mut Self {
        self.set_attr("fill", format!("url(#{gradient_id})"));
        self
    }

    pub fn fill_pattern(&mut self, pattern_id: &str) -> &mut Self {
        self.set_attr("fill", format!("url(#{pattern_id})"));
        self
    }

    pub fn fill_texture(&mut self, texture_id: &str) -> &mut Self {
        self.set_attr("fill", format!("url(#{texture_id})"));
        self
    }

    pub fn stroke(&mut self, color: &str, width: Option<f64>, opacity: Option<f64>) -> &mut Self {
        self.set_attr("stroke", color);
        if let Some(width) = width {
            self.set_attr("stroke-width", fmt_num(width));
        }
        if let Some(opacity) = opacity {
            self.set_attr("stroke-opacity", fmt_num(opacity));
        }
        self
    }

    pub fn stroke_dash_pattern(&mut self, dashes: &[f64], offset: f64) -> &mut Self {
        let pattern = dashes
            .iter()
            .map(|dash| fmt_num(*dash))
            .collect::<Vec<_>>()
            .join(",");
        self.set_attr("stroke-dasharray", pattern);
        self.set_attr("stroke-dashoffset", fmt_num(offset));
        self
    }

    pub fn set_class(&mut self, class_name: &str) -> &mut Self {
        self.set_attr("class", class_name);
        self
    }

    /// Translation in logical coordinates; dy is flipped into SVG's Y-down
    /// space at write time.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.set_transform(
            TransformKind::Translate,
            format!("translate({} {})", fmt_num(dx), fmt_num(-dy)),
        );
        self
    }

    /// Rotation around `(cx, cy)`. The angle sense is inverted (`360 - deg`)
    /// to compensate the Y flip, and cy is flipped like every Y coordinate.
    pub fn rotate(&mut self, deg: f64, cx: f64, cy: f64) -> &mut Self {
        self.set_transform(
            TransformKind::Rotate,
            format!(
                "rotate({}, {}, {})",
                fmt_num(360.0 - deg),
                fmt_num(cx),
                fmt_num(-cy)
            ),
        );
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.set_transform(
            TransformKind::Scale,
            format!("scale({} {})", fmt_num(sx), fmt_num(sy)),
        );
        self
    }

    /// Valid on image elements only.
    pub fn aspect_ratio(&mut self, align: Align, mode: MeetOrSlice) -> Result<&mut Self, SvgError> {
        self.check(Capability::AspectRatio)?;
        self.set_attr(
            "preserveAspectRatio",
            format!("{} {}", align.as_str(), mode.as_str()),
        );
        Ok(self)
    }

    /// Valid on group and text elements only.
    pub fn anchor(&mut self, anchor: TextAnchor) -> Result<&mut Self, SvgError> {
        self.check(Capability::Anchor)?;
        self.set_attr("text-anchor", anchor.as_str());
        Ok(self)
    }

    /// Applies a font descriptor to a group or text element. With
    /// `apply_fill_and_stroke` the descriptor's paints are written too; a
    /// descriptor without a stroke sets `stroke="none"` explicitly so the
    /// element cannot inherit one.
    pub fn text_style(
        &mut self,
        style: &TextStyle,
        apply_fill_and_stroke: bool,
    ) -> Result<&mut Self, SvgError> {
        self.check(Capability::TextStyle)?;
        self.set_attr("font-size", fmt_num(style.size));
        self.set_attr("font-family", style.font.clone());
        self.set_attr("text-anchor", style.anchor.as_str());
        self.set_attr("font-style", if style.italic { "italic" } else { "normal" });
        self.set_attr("font-weight", if style.bold { "bold" } else { "normal" });
        if apply_fill_and_stroke {
            if let Some(fill) = &style.fill {
                self.fill(&fill.color, Some(fill.opacity));
            }
            match &style.stroke {
                Some(stroke) => {
                    self.stroke(&stroke.color, Some(stroke.width), stroke.opacity);
                }
                None => {
                    self.set_attr("stroke", "none");
                }
            }
        }
        Ok(self)
    }

    /// Empties the element body (transforms, children, inner content) so a
    /// container can be rebuilt in place; `attributes_too` also drops the
    /// accumulated attributes, keeping only `id`. Valid on groups only.
    pub fn clear(&mut self, attributes_too: bool) -> Result<&mut Self, SvgError> {
        self.check(Capability::Clear)?;
        if attributes_too {
            let id = self.id.clone();
            self.attributes.clear();
            self.set_attr("id", id);
        }
        self.transforms.clear();
        self.children.clear();
        self.inner_content.clear();
        Ok(self)
    }

    /// Appends a gradient stop line. A silent no-op on non-gradient nodes:
    /// stop data is advisory styling, not a structural operation.
    pub fn add_stop(&mut self, stop: &GradientStop) -> &mut Self {
        if matches!(self.kind, NodeKind::LinearGradient | NodeKind::RadialGradient) {
            let opacity = stop.opacity.unwrap_or(1.0);
            self.inner_content.push(format!(
                "<stop offset=\"{}%\" stop-color=\"{}\" stop-opacity=\"{}\" />",
                fmt_num(stop.offset),
                stop.color,
                fmt_num(opacity)
            ));
        }
        self
    }

    pub fn add_child(&mut self, child: NodeId) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Appends a literal markup line to the element body. No escaping is
    /// performed; the line is emitted verbatim.
    pub fn raw_inner_content(&mut self, line: &str) -> &mut Self {
        self.inner_content.push(line.to_string());
        self
    }

    /// Renders this element and its subtree as indented text lines. Attribute
    /// and content lines get one extra indent unit; children recurse one depth
    /// level deeper. Content lines precede rendered children when both exist.
    pub(crate) fn render(&self, arena: &[Node], depth: usize, indent: usize) -> Vec<String> {
        let spacer = " ".repeat(indent);
        let pad = " ".repeat(indent * depth);

        let mut lines = Vec::new();
        lines.push(format!("{pad}<{}", self.tag));

        if !self.attributes.is_empty() {
            for (name, value) in &self.attributes {
                lines.push(format!("{pad}{spacer}{name}=\"{value}\""));
            }
            if !self.transforms.is_empty() {
                lines.push(format!("{pad}{spacer}transform=\""));
                let last = self.transforms.len() - 1;
                for (index, (_, fragment)) in self.transforms.iter().enumerate() {
                    let close = if index == last { "\"" } else { "" };
                    lines.push(format!("{pad}{spacer}{spacer}{fragment}{close}"));
                }
            }
        }
        lines.push(format!("{pad}>"));

        for content in &self.inner_content {
            lines.push(format!("{pad}{spacer}{content}"));
        }
        for child in &self.children {
            lines.extend(arena[child.0].render(arena, depth + 1, indent));
        }

        lines.push(format!("{pad}</{}>", self.tag));
        lines
    }
}
