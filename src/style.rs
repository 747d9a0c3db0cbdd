//! CSS style rules and the shared paint/text descriptors.

use serde::{Deserialize, Serialize};

/// Selector scope of a style rule: every element, one element by id, or a
/// class of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTarget {
    Every,
    Id,
    Class,
}

impl StyleTarget {
    fn prefix(self) -> &'static str {
        match self {
            Self::Every => "",
            Self::Id => "#",
            Self::Class => ".",
        }
    }
}

/// A named group of CSS declarations, rendered as one rule block inside the
/// document's `<style>` element.
#[derive(Debug, Clone)]
pub struct StyleRule {
    id: String,
    target: StyleTarget,
    declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(target: StyleTarget, id: &str) -> Self {
        Self {
            id: id.to_string(),
            target,
            declarations: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attrib(&mut self, name: &str, value: &str) -> &mut Self {
        self.declarations.push((name.to_string(), value.to_string()));
        self
    }

    pub(crate) fn render(&self, depth: usize, indent: usize) -> Vec<String> {
        let spacer = " ".repeat(indent);
        let pad = " ".repeat(indent * depth);

        let mut lines = Vec::with_capacity(self.declarations.len() + 2);
        lines.push(format!("{pad}{}{} {{", self.target.prefix(), self.id));
        for (name, value) in &self.declarations {
            lines.push(format!("{pad}{spacer}{name}: {value};"));
        }
        lines.push(format!("{pad}}}"));
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// `preserveAspectRatio` alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    XMinYMin,
    XMinYMid,
    XMinYMax,
    XMidYMin,
    XMidYMid,
    XMidYMax,
    XMaxYMin,
    XMaxYMid,
    XMaxYMax,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XMinYMin => "xMinYMin",
            Self::XMinYMid => "xMinYMid",
            Self::XMinYMax => "xMinYMax",
            Self::XMidYMin => "xMidYMin",
            Self::XMidYMid => "xMidYMid",
            Self::XMidYMax => "xMidYMax",
            Self::XMaxYMin => "xMaxYMin",
            Self::XMaxYMid => "xMaxYMid",
            Self::XMaxYMax => "xMaxYMax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetOrSlice {
    Meet,
    Slice,
}

impl MeetOrSlice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meet => "meet",
            Self::Slice => "slice",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub opacity: Option<f64>,
}

/// Font descriptor applied to text-bearing elements via
/// [`Node::text_style`](crate::node::Node::text_style).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub italic: bool,
    pub bold: bool,
    pub fill: Option<FillStyle>,
    pub stroke: Option<StrokeStyle>,
    /// Average glyph height/width ratio for the family; callers use it to
    /// estimate text extents since the builder does no measurement.
    pub hw_ratio: f64,
    /// Line spacing factor for multi-line text.
    pub leading: Option<f64>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "Verdana, Arial, sans-serif".to_string(),
            size: 16.0,
            anchor: TextAnchor::Start,
            italic: false,
            bold: false,
            fill: Some(FillStyle {
                color: "#333333".to_string(),
                opacity: 1.0,
            }),
            stroke: None,
            hw_ratio: 0.5,
            leading: Some(1.2),
        }
    }
}

/// One gradient color stop; `offset` is a percentage in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
    pub opacity: Option<f64>,
}
