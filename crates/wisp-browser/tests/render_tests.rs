//! Integration tests for the render entry point.

use image::Rgba;
use wisp_browser::{RenderError, build_display_list, render};
use wisp_css::{ApproximateFontMetrics, ColorValue, DrawCommand, Rect};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const SCENARIO_CSS: &str = "div { display: block; padding: 12px; } .a { background-color: #ff0000; }";

#[test]
fn test_red_padding_box() {
    let image = render("<div class=\"a\"></div>", SCENARIO_CSS, 600, 400, None).unwrap();
    assert_eq!(image.dimensions(), (600, 400));
    assert_eq!(*image.get_pixel(0, 0), RED);
    assert_eq!(*image.get_pixel(599, 23), RED);
    assert_eq!(*image.get_pixel(300, 24), WHITE);
    assert_eq!(*image.get_pixel(599, 399), WHITE);
}

#[test]
fn test_display_list_for_scenario() {
    let list = build_display_list(
        "<div class=\"a\"></div>",
        SCENARIO_CSS,
        600,
        400,
        &ApproximateFontMetrics::default(),
    )
    .unwrap();
    assert_eq!(
        list.commands(),
        &[DrawCommand::FilledRect {
            color: ColorValue::rgb(255, 0, 0),
            rect: Rect::new(0.0, 0.0, 600.0, 24.0),
        }]
    );
}

#[test]
fn test_css_error_aborts_render() {
    let err = render("<div></div>", "div { color #ff0000 }", 600, 400, None).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Css(wisp_css::ParseError::MissingColon { .. })
    ));
    assert!(err.to_string().starts_with("CSS parse error"));
}

#[test]
fn test_html_error_aborts_render() {
    let err = render("<div><p></div>", "", 10, 10, None).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Html(wisp_html::ParseError::MismatchedEndTag { .. })
    ));
}

#[test]
fn test_empty_document_is_blank() {
    let image = render("", "", 16, 16, None).unwrap();
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_later_boxes_paint_over_earlier() {
    let image = render(
        "<div class=\"outer\"><div class=\"inner\"></div></div>",
        ".outer { background-color: blue; padding: 4px } .inner { background-color: lime; padding: 2px }",
        20,
        20,
        None,
    )
    .unwrap();
    assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    assert_eq!(*image.get_pixel(4, 4), Rgba([0, 255, 0, 255]));
    assert_eq!(*image.get_pixel(10, 12), WHITE);
}
