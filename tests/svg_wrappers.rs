//! Integration tests for the SVG wrapper layer

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use tagtree::{Component, Document, Element, Group, RenderConfig, Text, Value};

fn sample_document() -> Document {
    let layer = Group::layer("Layer 1")
        .with(
            Element::new("rect")
                .with_prop("x", 0)
                .with_prop("y", 0)
                .with_prop("width", 10)
                .with_prop("height", 10)
                .with_prop("fill", "#ff0000"),
        )
        .with(Text::new("label").with_props([("x", 5), ("y", 5)]));

    Document::new(200, 100)
        .with(Component::Comment(Value::from("new session")))
        .with(layer)
}

#[test]
fn test_document_render() {
    let svg = sample_document().render(&RenderConfig::default()).unwrap();
    assert_snapshot!(svg, @r##"
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:xlink="http://www.w3.org/1999/xlink" width="200px" height="100px">
     <!-- new session -->
     <g inkscape:groupmode="layer" id="Layer 1">
      <rect x="0" y="0" width="10" height="10" fill="#ff0000" />
      <text x="5" y="5">
       label
      </text>
     </g>
    </svg>
    "##);
}

#[test]
fn test_document_render_standalone_wide_indent() {
    let config = RenderConfig::new().with_indent(2).with_standalone(true);
    let doc = Document::new(1.5, "2")
        .with(Group::new().with(Element::new("circle").with_prop("r", 1)));
    let svg = doc.render(&config).unwrap();
    assert_snapshot!(svg, @r#"
    <?xml version="1.0" encoding="UTF-8" standalone="no"?>
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" xmlns:xlink="http://www.w3.org/1999/xlink" width="1.5px" height="2px">
      <g>
        <circle r="1" />
      </g>
    </svg>
    "#);
}

#[test]
fn test_empty_document_is_self_closing() {
    let svg = Document::new(10, 20).render(&RenderConfig::default()).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with(r#"width="10px" height="20px" />"#));
    assert_eq!(svg.lines().count(), 1);
}

#[test]
fn test_render_is_repeatable() {
    let doc = sample_document();
    let config = RenderConfig::default();
    assert_eq!(doc.render(&config).unwrap(), doc.render(&config).unwrap());
}

#[test]
fn test_export_is_not_cached() {
    let mut group = Group::new();
    group.add(Element::new("a"));
    let before = group.export().unwrap().to_string();

    group.add(Element::new("b"));
    let after = group.export().unwrap().to_string();

    assert_eq!(before, "<g>\n <a />\n</g>");
    assert_eq!(after, "<g>\n <a />\n <b />\n</g>");
}

#[test]
fn test_nested_groups_indent_by_depth() {
    let group = Group::new().with(Group::new().with(Group::new().with(Element::new("leaf"))));
    assert_eq!(
        group.export().unwrap().to_string(),
        "<g>\n <g>\n  <g>\n   <leaf />\n  </g>\n </g>\n</g>"
    );
}

#[test]
fn test_raw_fragment_in_group() {
    let fragment = r#"<path id="p" d="M0 0" />"#.to_string();
    let group = Group::tagged("defs").with(Component::Raw(fragment));
    assert_eq!(
        group.export().unwrap().to_string(),
        "<defs>\n <path id=\"p\" d=\"M0 0\" />\n</defs>"
    );
}

#[test]
fn test_deep_validation_error_surfaces() {
    let doc = Document::new(1, 1).with(
        Group::layer("outer")
            .with(Group::new().with(Element::new("rect").with_prop("fill", "\"red\""))),
    );
    let err = doc.render(&RenderConfig::default()).unwrap_err();
    assert!(err.is_value_error());
}

#[test]
fn test_invalid_tag_name_in_group() {
    let group = Group::tagged("a:b:c");
    assert!(group.export().unwrap_err().is_value_error());
}

#[test]
fn test_document_extra_props_follow_fixed_attributes() {
    let mut doc = Document::new(8, 8);
    doc.set_prop("viewBox", "0 0 8 8").set_props([("id", "root")]);
    let node = doc.export().unwrap();
    let names: Vec<_> = node.attributes().keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["xmlns", "xmlns:inkscape", "xmlns:xlink", "width", "height", "viewBox", "id"]
    );
}
