pub mod config;
pub mod document;
pub mod error;
pub mod geom;
pub mod hatch;
pub mod node;
pub mod path;
pub mod style;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{SceneConfig, load_config};
pub use document::{Axis, DEFAULT_HEIGHT, DEFAULT_WIDTH, Document, Placement, ROOT_NODE_ID};
pub use error::SvgError;
pub use geom::{Point, deg_to_rad};
pub use hatch::HatchBuilder;
pub use node::{Node, NodeId, NodeKind};
pub use path::{PathBuilder, PathCommand, PathInstruction};
pub use style::{
    Align, FillStyle, GradientStop, MeetOrSlice, StrokeStyle, StyleRule, StyleTarget, TextAnchor,
    TextStyle,
};

#[cfg(feature = "cli")]
pub use cli::run;
