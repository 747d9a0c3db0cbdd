use svg_scene::{
    Align, Axis, Document, GradientStop, HatchBuilder, MeetOrSlice, PathBuilder, Placement, Point,
    ROOT_NODE_ID, StrokeStyle, StyleRule, StyleTarget, SvgError, TextAnchor,
};

#[test]
fn rect_scenario_renders_expected_fragments() {
    let mut doc = Document::new(200.0, 100.0);
    doc.set_viewbox(0.0, 0.0, 200.0, 100.0);
    let rect = doc.rect(10.0, 10.0, 50.0, 20.0, "r1");
    doc.node_mut(rect).fill("#ff0000", None);
    doc.add_to_root(rect);

    let svg = doc.render();
    assert!(svg.contains("<rect"));
    assert!(svg.contains("id=\"r1\""));
    assert!(svg.contains("x=\"10\""));
    assert!(svg.contains("y=\"-30\""));
    assert!(svg.contains("width=\"50\""));
    assert!(svg.contains("height=\"20\""));
    assert!(svg.contains("fill=\"#ff0000\""));

    // Exactly one rect, nested inside the root group.
    assert_eq!(svg.matches("<rect").count(), 1);
    let root_open = svg.find(&format!("id=\"{ROOT_NODE_ID}\"")).unwrap();
    let rect_open = svg.find("<rect").unwrap();
    let root_close = svg.rfind("</g>").unwrap();
    assert!(root_open < rect_open && rect_open < root_close);
}

#[test]
fn path_builder_encodes_the_reference_string() {
    let mut builder = PathBuilder::new();
    builder.move_abs(0.0, 0.0).line_abs(10.0, 0.0).close();
    assert_eq!(builder.build(), "M 0 0 L 10 0 Z");
}

#[test]
fn viewbox_attribute_keeps_negated_height_origin() {
    let mut doc = Document::new(200.0, 100.0);
    doc.set_viewbox(0.0, 40.0, 200.0, 100.0);
    let svg = doc.render();
    assert!(svg.contains("viewBox=\"0 -100 200 100 \""));
    // The stored view-box Y feeds the root translation instead.
    assert!(svg.contains("translate(0 40)"));
}

#[test]
fn auto_identifiers_never_repeat() {
    let mut doc = Document::default();
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..20 {
        let node = doc.circle(0.0, 0.0, 1.0, "");
        assert!(seen.insert(doc.node(node).id().to_string()));
    }
    for id in &seen {
        assert!(id.starts_with("Circle-"));
    }
}

#[test]
fn transform_overwrite_emits_one_translate() {
    let mut doc = Document::default();
    let rect = doc.rect(0.0, 0.0, 10.0, 10.0, "r");
    doc.node_mut(rect).translate(5.0, 5.0).translate(10.0, 10.0);
    doc.add_to_root(rect);

    let svg = doc.render();
    // One from the rect; set_viewbox was never called so the root has none.
    assert_eq!(svg.matches("translate(").count(), 1);
    assert!(svg.contains("translate(10 -10)"));
}

#[test]
fn capability_gating_reports_the_offending_tag() {
    let mut doc = Document::default();
    let rect = doc.rect(0.0, 0.0, 10.0, 10.0, "");
    let err = doc.node_mut(rect).anchor(TextAnchor::Middle).unwrap_err();
    assert_eq!(
        err,
        SvgError::CapabilityMismatch {
            operation: "anchor",
            tag: "rect",
        }
    );

    let text = doc.text(0.0, 0.0, "hello", None, "");
    assert!(doc.node_mut(text).anchor(TextAnchor::Middle).is_ok());
}

#[test]
fn percentage_conversion_matches_affine_form() {
    let mut doc = Document::default();
    doc.set_viewbox(10.0, 20.0, 100.0, 50.0);
    for step in 0..=10 {
        let perc = f64::from(step) / 10.0;
        let x = doc.coord_from_viewbox_perc(perc, Axis::X).unwrap();
        assert!((x - (10.0 + perc * 100.0)).abs() < 1e-12);
        let h = doc.coord_from_viewbox_perc(perc, Axis::H).unwrap();
        assert!((h - perc * 50.0).abs() < 1e-12);
    }
    assert!(matches!(
        doc.coord_from_viewbox_perc(1.01, Axis::W),
        Err(SvgError::PercentOutOfRange { .. })
    ));
}

#[test]
fn defs_and_styles_render_into_their_blocks() {
    let mut doc = Document::default();
    let gradient = doc.linear_gradient(0.0, 0.0, 1.0, 1.0, "fade");
    doc.node_mut(gradient)
        .add_stop(&GradientStop {
            offset: 0.0,
            color: "#ffffff".to_string(),
            opacity: None,
        })
        .add_stop(&GradientStop {
            offset: 100.0,
            color: "#000000".to_string(),
            opacity: Some(0.5),
        });
    doc.add_to_defs(gradient);

    let mut rule = StyleRule::new(StyleTarget::Class, "outline");
    rule.attrib("stroke", "#101010");
    doc.add_style(rule);

    let svg = doc.render();
    let defs_open = svg.find("<defs>").unwrap();
    let defs_close = svg.find("</defs>").unwrap();
    let gradient_pos = svg.find("<linearGradient").unwrap();
    assert!(defs_open < gradient_pos && gradient_pos < defs_close);
    assert!(svg.contains("<stop offset=\"0%\" stop-color=\"#ffffff\" stop-opacity=\"1\" />"));
    assert!(svg.contains("<stop offset=\"100%\" stop-color=\"#000000\" stop-opacity=\"0.5\" />"));

    let style_open = svg.find("<style>").unwrap();
    let style_close = svg.find("</style>").unwrap();
    let rule_pos = svg.find(".outline {").unwrap();
    assert!(style_open < rule_pos && rule_pos < style_close);
    assert!(svg.contains("stroke: #101010;"));
}

#[test]
fn multiline_text_wraps_tspans_in_a_positioning_group() {
    let mut doc = Document::default();
    let block = doc.text(30.0, 40.0, "first\nsecond\nthird", Some(15.0), "caption");
    doc.add_to_root(block);

    let svg = doc.render();
    assert!(svg.contains("translate(30 -40)"));
    assert!(svg.contains("<tspan x=\"0\" y=\"0\">first</tspan>"));
    assert!(svg.contains("<tspan x=\"0\" y=\"15\">second</tspan>"));
    assert!(svg.contains("<tspan x=\"0\" y=\"30\">third</tspan>"));
    // The handle is the wrapper group, not the text element.
    assert_eq!(doc.node(block).tag(), "g");
}

#[test]
fn use_t_composes_scale_translate_rotate() {
    let mut doc = Document::default();
    doc.rect(0.0, 0.0, 10.0, 10.0, "plate");
    let placed = doc.use_t(
        "plate",
        10.0,
        20.0,
        &Placement {
            scale: Some((2.0, 2.0)),
            translate: Some((4.0, 6.0)),
            rotate: Some(90.0),
        },
    );
    doc.add_to_root(placed);

    let svg = doc.render();
    // x = 10/2 + 4/2 = 7, y = 20/2 + 6/2 = 13 (flipped on emission).
    assert!(svg.contains("x=\"7\""));
    assert!(svg.contains("y=\"-13\""));
    assert!(svg.contains("xlink:href=\"#plate\""));
    assert!(svg.contains("scale(2 2)"));
    assert!(svg.contains("rotate(270, 7, -13)"));
    let scale_pos = svg.find("scale(2 2)").unwrap();
    let rotate_pos = svg.find("rotate(270").unwrap();
    assert!(scale_pos < rotate_pos);
}

#[test]
fn use_ref_falls_back_to_a_generated_identifier() {
    let mut doc = Document::default();
    doc.circle(0.0, 0.0, 5.0, "dot");
    let reference = doc.use_ref(2.0, 3.0, "dot");
    assert!(doc.node(reference).id().starts_with("Use-"));
    doc.add_to_root(reference);
    let svg = doc.render();
    assert!(svg.contains("xlink:href=\"#dot\""));
}

#[test]
fn unattached_nodes_stay_out_of_the_output() {
    let mut doc = Document::default();
    doc.rect(0.0, 0.0, 10.0, 10.0, "orphan");
    let svg = doc.render();
    assert!(!svg.contains("orphan"));
}

#[test]
fn hatch_patterns_register_and_reference() {
    let mut doc = Document::default();
    let stroke = StrokeStyle {
        color: "#333333".to_string(),
        width: 1.0,
        opacity: None,
    };
    let pattern = HatchBuilder::new(&mut doc).cross("weave", 10.0, 10.0, Some(&stroke));
    doc.add_to_defs(pattern);
    let swatch = doc.rect(0.0, 0.0, 50.0, 50.0, "");
    doc.node_mut(swatch).fill_pattern("weave");
    doc.add_to_root(swatch);

    let svg = doc.render();
    assert!(svg.contains("<pattern"));
    assert!(svg.contains("id=\"weave\""));
    assert!(svg.contains("fill=\"url(#weave)\""));
}

#[test]
fn polyline_points_flip_each_vertex() {
    let mut doc = Document::default();
    let ridge = doc.polyline(
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 5.0)],
        "",
    );
    doc.add_to_root(ridge);
    let svg = doc.render();
    assert!(svg.contains("points=\" 0,0 10,-10 20,-5\""));
}

#[test]
fn document_header_carries_namespaces_and_metadata() {
    let mut doc = Document::default();
    doc.title = "Floor plan".to_string();
    doc.desc = "Ground floor".to_string();
    let svg = doc.render();
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("xmlns:xlink=\"http://www.w3.org/1999/xlink\""));
    assert!(svg.contains("version=\"2.0\""));
    assert!(svg.contains("<title>Floor plan</title>"));
    assert!(svg.contains("<desc>Ground floor</desc>"));
    assert!(svg.contains("width=\"800px\""));
    assert!(svg.contains("height=\"450px\""));
}

#[test]
fn image_perc_places_by_viewbox_fractions() {
    let mut doc = Document::default();
    doc.set_viewbox(0.0, 0.0, 100.0, 100.0);
    let photo = doc
        .image_perc(0.1, 0.1, 0.5, 0.25, "photo.png", "photo")
        .unwrap();
    doc.node_mut(photo)
        .aspect_ratio(Align::XMidYMid, MeetOrSlice::Meet)
        .unwrap();
    doc.add_to_root(photo);

    let svg = doc.render();
    // x = 10, y = -(10 + 25) = -35: images anchor at the bottom-left corner.
    assert!(svg.contains("<image"));
    assert!(svg.contains("x=\"10\""));
    assert!(svg.contains("y=\"-35\""));
    assert!(svg.contains("width=\"50\""));
    assert!(svg.contains("height=\"25\""));
    assert!(svg.contains("href=\"photo.png\""));
    assert!(svg.contains("preserveAspectRatio=\"xMidYMid meet\""));

    assert!(matches!(
        doc.image_perc(1.2, 0.0, 0.1, 0.1, "other.png", ""),
        Err(SvgError::PercentOutOfRange { .. })
    ));
}

#[test]
fn view_box_background_is_explicit_not_a_setter_side_effect() {
    let mut doc = Document::default();
    doc.set_viewbox(0.0, 0.0, 100.0, 100.0);
    assert!(!doc.render().contains("viewbox-background"));

    doc.view_box_background();
    let svg = doc.render();
    assert!(svg.contains("id=\"viewbox-background\""));
    assert!(svg.contains("opacity=\"0.5\""));
}
