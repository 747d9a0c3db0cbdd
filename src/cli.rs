//! Demo CLI: builds one of the built-in scenes through the public API and
//! writes the rendered markup to a file or stdout.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::{SceneConfig, load_config};
use crate::document::Document;
use crate::geom::Point;
use crate::hatch::HatchBuilder;
use crate::style::{
    GradientStop, StrokeStyle, StyleRule, StyleTarget, TextAnchor, TextStyle,
};

#[derive(Parser, Debug)]
#[command(name = "svgscene", version, about = "Compose demo SVG scenes with the svg-scene builder")]
pub struct Args {
    /// Scene to build
    #[arg(short = 's', long = "scene", value_enum, default_value = "shapes")]
    pub scene: Scene,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (camelCase keys)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Shapes,
    Gradients,
    Hatches,
    Text,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let doc = build_scene(args.scene, &config)?;
    write_output(&doc.render(), args.output.as_deref())?;
    Ok(())
}

pub fn build_scene(scene: Scene, config: &SceneConfig) -> Result<Document> {
    let mut doc = Document::new(config.width, config.height);
    if let Some(title) = &config.title {
        doc.title = title.clone();
    }
    if let Some(desc) = &config.desc {
        doc.desc = desc.clone();
    }
    let (x, y, width, height) = config.viewbox;
    doc.set_viewbox(x, y, width, height);

    if let Some(background) = &config.background {
        let sheet = doc.rect(x, y, width, height, "background");
        doc.node_mut(sheet).fill(background, None);
        doc.add_to_root(sheet);
    }

    match scene {
        Scene::Shapes => shapes_scene(&mut doc),
        Scene::Gradients => gradients_scene(&mut doc),
        Scene::Hatches => hatches_scene(&mut doc),
        Scene::Text => text_scene(&mut doc)?,
    }
    Ok(doc)
}

/// A sampler of every basic shape factory.
fn shapes_scene(doc: &mut Document) {
    let rect = doc.rect(20.0, 20.0, 120.0, 80.0, "plate");
    doc.node_mut(rect)
        .fill("#ECECFF", None)
        .stroke("#9370DB", Some(1.4), None);
    doc.add_to_root(rect);

    let circle = doc.circle(220.0, 60.0, 40.0, "hub");
    doc.node_mut(circle)
        .fill("#FFFFDE", None)
        .stroke("#AAAA33", Some(1.2), None);
    doc.add_to_root(circle);

    let diagonal = doc.line(20.0, 120.0, 140.0, 180.0, "");
    doc.node_mut(diagonal)
        .stroke("#333333", Some(1.0), None)
        .stroke_dash_pattern(&[6.0, 4.0], 0.0);
    doc.add_to_root(diagonal);

    let ridge = doc.polyline(
        &[
            Point::new(160.0, 120.0),
            Point::new(200.0, 180.0),
            Point::new(240.0, 130.0),
            Point::new(280.0, 185.0),
        ],
        "",
    );
    doc.node_mut(ridge)
        .fill("none", None)
        .stroke("#7A8AA6", Some(1.4), None);
    doc.add_to_root(ridge);

    let wedge = doc.polygon(
        &[
            Point::new(300.0, 30.0),
            Point::new(360.0, 30.0),
            Point::new(330.0, 90.0),
        ],
        "",
    );
    doc.node_mut(wedge).fill("#C7D2E5", None);
    doc.add_to_root(wedge);

    let sweep = doc.arc(330.0, 200.0, 50.0, 180.0, 0.0, "");
    doc.node_mut(sweep)
        .fill("none", None)
        .stroke("#1C2430", Some(1.6), None);
    doc.add_to_root(sweep);

    let copy = doc.use_ref(0.0, 130.0, "plate");
    doc.node_mut(copy).attrib("opacity", "0.4");
    doc.add_to_root(copy);
}

/// Linear and radial gradients registered as defs and referenced by fills.
fn gradients_scene(doc: &mut Document) {
    let sunset = doc.linear_gradient(0.0, 0.0, 1.0, 0.0, "sunset");
    doc.node_mut(sunset)
        .attrib("gradientUnits", "objectBoundingBox")
        .add_stop(&GradientStop {
            offset: 0.0,
            color: "#FFDD99".to_string(),
            opacity: None,
        })
        .add_stop(&GradientStop {
            offset: 100.0,
            color: "#CC3355".to_string(),
            opacity: Some(0.9),
        });
    doc.add_to_defs(sunset);

    let glow = doc.radial_gradient(0.5, -0.5, 0.5, "glow");
    doc.node_mut(glow)
        .attrib("gradientUnits", "objectBoundingBox")
        .add_stop(&GradientStop {
            offset: 0.0,
            color: "#FFFFFF".to_string(),
            opacity: None,
        })
        .add_stop(&GradientStop {
            offset: 100.0,
            color: "#3355CC".to_string(),
            opacity: None,
        });
    doc.add_to_defs(glow);

    let sky = doc.rect(20.0, 20.0, 170.0, 220.0, "");
    doc.node_mut(sky).fill_gradient("sunset");
    doc.add_to_root(sky);

    let orb = doc.circle(290.0, 130.0, 80.0, "");
    doc.node_mut(orb).fill_gradient("glow");
    doc.add_to_root(orb);
}

/// Every hatch recipe tiled over a row of swatches.
fn hatches_scene(doc: &mut Document) {
    let stroke = StrokeStyle {
        color: "#404040".to_string(),
        width: 0.8,
        opacity: None,
    };

    let patterns = {
        let mut hatches = HatchBuilder::new(doc);
        [
            hatches.saltire("saltire", 12.0, 12.0, Some(&stroke)),
            hatches.cross("crosshatch", 12.0, 12.0, Some(&stroke)),
            hatches.diagonal("diagonal", 12.0, 12.0, Some(&stroke)),
            hatches.floor("floor", 16.0, 16.0, Some(&stroke)),
            hatches.bricks("bricks", 24.0, 16.0, Some(&stroke)),
            hatches.roof("roof", 16.0, 16.0, Some(&stroke)),
            hatches.roof_tiles("rooftiles", 20.0, 20.0, Some(&stroke)),
        ]
    };

    let names = [
        "saltire",
        "crosshatch",
        "diagonal",
        "floor",
        "bricks",
        "roof",
        "rooftiles",
    ];
    for (index, pattern) in patterns.into_iter().enumerate() {
        doc.node_mut(pattern).attrib("patternUnits", "userSpaceOnUse");
        doc.add_to_defs(pattern);
        let swatch = doc.rect(20.0 + index as f64 * 52.0, 100.0, 44.0, 44.0, "");
        doc.node_mut(swatch)
            .fill_pattern(names[index])
            .stroke("#202020", Some(0.6), None);
        doc.add_to_root(swatch);
    }
}

/// Styled single- and multi-line text plus a class-scoped style rule.
fn text_scene(doc: &mut Document) -> Result<()> {
    let mut caption_rule = StyleRule::new(StyleTarget::Class, "caption");
    caption_rule
        .attrib("letter-spacing", "0.05em")
        .attrib("fill", "#555555");
    doc.add_style(caption_rule);

    let heading_style = TextStyle {
        size: 24.0,
        bold: true,
        anchor: TextAnchor::Middle,
        ..TextStyle::default()
    };
    let heading = doc.text(200.0, 260.0, "svg-scene", None, "heading");
    doc.node_mut(heading).text_style(&heading_style, true)?;
    doc.add_to_root(heading);

    let body = doc.text(
        40.0,
        200.0,
        "shapes, paths and gradients\ncomposed in Y-up coordinates\nserialized to SVG markup",
        Some(22.0),
        "body",
    );
    doc.node_mut(body).text_style(&TextStyle::default(), true)?;
    doc.add_to_root(body);

    let caption = doc.text(40.0, 40.0, "generated scene", None, "");
    doc.node_mut(caption).set_class("caption");
    doc.add_to_root(caption);
    Ok(())
}

fn write_output(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}
