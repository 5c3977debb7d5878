use story_arcs::core::{PathGeometry, Viewport};
use story_arcs::render::{
    CirclePrimitive, ClipRect, Color, DropShadow, FontWeight, LinePrimitive, LineStrokeStyle,
    LinearGradient, Paint, PathPrimitive, PathStroke, RectPrimitive, RenderFrame, Renderer,
    SvgRenderer, TextHAlign, TextPrimitive, path_data,
};

fn triangle() -> PathGeometry {
    let mut geometry = PathGeometry::new();
    geometry.move_to(0.0, 0.0);
    geometry.line_to(10.0, 0.0);
    geometry.line_to(5.0, 8.5);
    geometry.close();
    geometry
}

#[test]
fn document_has_viewport_and_background() {
    let frame = RenderFrame::new(Viewport::new(320, 200)).with_background(Color::WHITE);
    let svg = SvgRenderer::render_to_string(&frame).expect("render");
    assert!(svg.starts_with(
        "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='200' viewBox='0 0 320 200'"
    ));
    assert!(svg.contains("<rect width='320' height='200' fill='#ffffff'/>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn primitives_serialize_with_styles() {
    let ink = Color::rgb8(0x33, 0x41, 0x55);
    let frame = RenderFrame::new(Viewport::new(200, 100))
        .with(
            LinePrimitive::new(0.0, 10.0, 100.0, 10.0, 1.0, ink)
                .with_style(LineStrokeStyle::dashed(4.0, 6.0)),
        )
        .with(RectPrimitive::new(5.0, 5.0, 40.0, 16.0, ink.with_alpha(0.5)).with_corner_radius(8.0))
        .with(CirclePrimitive::new(50.0, 50.0, 6.0, Color::WHITE).with_stroke(3.0, ink))
        .with(
            TextPrimitive::new("R&D <beta>", 20.0, 30.0, 11.0, ink, TextHAlign::Center)
                .with_weight(FontWeight::Bold)
                .with_rotation(-90.0),
        );

    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");
    let svg = renderer.document();

    assert!(svg.contains("stroke-dasharray='4 6'"));
    assert!(svg.contains("rx='8'"));
    assert!(svg.contains("fill='rgba(51,65,85,0.500)'"));
    assert!(svg.contains("<circle cx='50.00' cy='50.00' r='6.00' fill='#ffffff' stroke='#334155' stroke-width='3'/>"));
    assert!(svg.contains("R&amp;D &lt;beta&gt;"));
    assert!(svg.contains("text-anchor='middle'"));
    assert!(svg.contains("font-weight='700'"));
    assert!(svg.contains("transform='rotate(-90 20.00 30.00)'"));

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.circles_drawn, 1);
    assert_eq!(stats.texts_drawn, 1);
}

#[test]
fn path_effects_emit_unique_defs() {
    let gradient = LinearGradient::evenly_spaced(
        &[Color::rgb8(0xef, 0x44, 0x44), Color::rgb8(0x06, 0xb6, 0xd4)],
        (0.0, 0.0),
        (1.0, 0.0),
    );
    let stroke = PathStroke::new(Paint::Linear(gradient), 4.0)
        .with_round_joins()
        .revealed(10.0, 40.0);
    let path = PathPrimitive::stroked(triangle(), stroke)
        .with_clip(ClipRect {
            x: 0.0,
            y: 0.0,
            width: 6.0,
            height: 10.0,
        })
        .with_shadow(DropShadow {
            dx: 0.0,
            dy: 4.0,
            blur: 4.0,
            color: Color::rgb8(0x06, 0xb6, 0xd4).with_alpha(0.4),
        })
        .with_opacity(0.8);
    let frame = RenderFrame::new(Viewport::new(20, 20)).with(path.clone()).with(path);

    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");
    let svg = renderer.document();

    assert_eq!(renderer.last_stats().defs_written, 6);
    assert_eq!(renderer.last_stats().paths_drawn, 2);
    assert!(svg.contains("id='grad0'"));
    assert!(svg.contains("id='grad3'"));
    assert!(svg.contains("clip-path='url(#clip1)'"));
    assert!(svg.contains("filter='url(#shadow2)'"));
    assert!(svg.contains("stroke-dasharray='40 40' stroke-dashoffset='30'"));
    assert!(svg.contains("stroke-linejoin='round'"));
    assert!(svg.contains("opacity='0.800'"));
    assert!(svg.contains("<stop offset='100.0%' stop-color='#06b6d4'"));
}

#[test]
fn path_data_uses_two_decimals() {
    assert_eq!(path_data(&triangle()), "M0.00,0.00 L10.00,0.00 L5.00,8.50 Z");
}

#[test]
fn invalid_frames_are_rejected_without_touching_document() {
    let mut renderer = SvgRenderer::new();
    let valid = RenderFrame::new(Viewport::new(10, 10));
    renderer.render(&valid).expect("render");
    let before = renderer.document().to_owned();

    let invalid = RenderFrame::new(Viewport::new(10, 10)).with(LinePrimitive::new(
        f64::NAN,
        0.0,
        1.0,
        1.0,
        1.0,
        Color::WHITE,
    ));
    assert!(renderer.render(&invalid).is_err());
    assert_eq!(renderer.document(), before);
}
