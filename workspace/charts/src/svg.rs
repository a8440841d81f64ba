//! SVG serialization of a [`Scene`].

use std::fmt::Write;

use crate::scene::{
    Circle, LineCap, Paint, Path, PathCommand, Point, Polygon, Polyline, Primitive, Rect, Scene,
    Style, Text, TextAnchor,
};

/// Formats a coordinate with at most three decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{:.3}", (value * 1000.0).round() / 1000.0);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// `x,y x,y ...` as used by `points` attributes.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `url(#id)`, `none` or the color itself.
pub fn paint_attr(paint: &Paint) -> String {
    match paint {
        Paint::None => "none".to_string(),
        Paint::Color(color) => color.clone(),
        Paint::Gradient(id) => format!("url(#{})", id),
    }
}

impl Path {
    /// The `d` attribute of this path.
    pub fn to_d(&self) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            parts.push(match command {
                PathCommand::MoveTo(p) => format!("M {} {}", format_number(p.x), format_number(p.y)),
                PathCommand::LineTo(p) => format!("L {} {}", format_number(p.x), format_number(p.y)),
                PathCommand::Arc { radius, large_arc, to } => format!(
                    "A {r} {r} 0 {} 1 {} {}",
                    u8::from(*large_arc),
                    format_number(to.x),
                    format_number(to.y),
                    r = format_number(*radius),
                ),
                PathCommand::Close => "Z".to_string(),
            });
        }
        parts.join(" ")
    }
}

impl Circle {
    pub fn transform_attr(&self) -> Option<String> {
        self.rotation.map(|deg| {
            format!(
                "rotate({} {} {})",
                format_number(deg),
                format_number(self.center.x),
                format_number(self.center.y)
            )
        })
    }
}

impl Scene {
    pub fn view_box_attr(&self) -> String {
        format!(
            "0 0 {} {}",
            format_number(self.view_box.width),
            format_number(self.view_box.height)
        )
    }

    /// Standalone SVG document for this scene.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}""#,
            self.view_box_attr()
        );
        if self.stretch {
            out.push_str(r#" preserveAspectRatio="none""#);
        }
        out.push('>');

        if !self.gradients.is_empty() {
            out.push_str("<defs>");
            for gradient in &self.gradients {
                let _ = write!(
                    out,
                    r#"<linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">"#,
                    escape(&gradient.id)
                );
                for stop in &gradient.stops {
                    let _ = write!(
                        out,
                        r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                        format_number(stop.offset * 100.0),
                        escape(&stop.color),
                        format_number(stop.opacity)
                    );
                }
                out.push_str("</linearGradient>");
            }
            out.push_str("</defs>");
        }

        for primitive in &self.primitives {
            write_primitive(&mut out, primitive);
        }
        out.push_str("</svg>");
        out
    }
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Circle(circle) => write_circle(out, circle),
        Primitive::Rect(rect) => write_rect(out, rect),
        Primitive::Path(path) => {
            let _ = write!(out, r#"<path d="{}"{}/>"#, path.to_d(), style_attrs(&path.style));
        }
        Primitive::Polyline(Polyline { points, style }) => {
            let _ = write!(out, r#"<polyline points="{}"{}/>"#, points_attr(points), style_attrs(style));
        }
        Primitive::Polygon(Polygon { points, style }) => {
            let _ = write!(out, r#"<polygon points="{}"{}/>"#, points_attr(points), style_attrs(style));
        }
        Primitive::Text(text) => write_text(out, text),
    }
}

fn write_circle(out: &mut String, circle: &Circle) {
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}"{}"#,
        format_number(circle.center.x),
        format_number(circle.center.y),
        format_number(circle.radius),
        style_attrs(&circle.style)
    );
    if let Some(transform) = circle.transform_attr() {
        let _ = write!(out, r#" transform="{}""#, transform);
    }
    out.push_str("/>");
}

fn write_rect(out: &mut String, rect: &Rect) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        format_number(rect.origin.x),
        format_number(rect.origin.y),
        format_number(rect.width),
        format_number(rect.height)
    );
    if rect.corner_radius > 0.0 {
        let _ = write!(out, r#" rx="{}""#, format_number(rect.corner_radius));
    }
    let _ = write!(out, "{}/>", style_attrs(&rect.style));
}

fn write_text(out: &mut String, text: &Text) {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
        format_number(text.position.x),
        format_number(text.position.y),
        format_number(text.size),
        escape(&text.color),
        anchor,
        escape(&text.content)
    );
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = format!(r#" fill="{}""#, escape(&paint_attr(&style.fill)));
    if let Some(stroke) = &style.stroke {
        let _ = write!(
            attrs,
            r#" stroke="{}" stroke-width="{}""#,
            escape(&stroke.color),
            format_number(stroke.width)
        );
        if let Some((dash, gap)) = stroke.dash {
            let _ = write!(
                attrs,
                r#" stroke-dasharray="{} {}""#,
                format_number(dash),
                format_number(gap)
            );
        }
        if stroke.cap == LineCap::Round {
            attrs.push_str(r#" stroke-linecap="round""#);
        }
        if stroke.round_join {
            attrs.push_str(r#" stroke-linejoin="round""#);
        }
        if stroke.non_scaling {
            attrs.push_str(r#" vector-effect="non-scaling-stroke""#);
        }
    }
    attrs
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{LinearGradient, Stroke};

    #[test]
    fn test_format_number_strips_trailing_zeros() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(18.1818), "18.182");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(100.8), "100.8");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_path_d_attribute() {
        let path = Path {
            commands: vec![
                PathCommand::MoveTo(Point::new(60.0, 60.0)),
                PathCommand::LineTo(Point::new(60.0, 15.0)),
                PathCommand::Arc { radius: 45.0, large_arc: true, to: Point::new(15.0, 60.0) },
                PathCommand::Close,
            ],
            style: Style::filled("#4E76D0"),
        };
        assert_eq!(path.to_d(), "M 60 60 L 60 15 A 45 45 0 1 1 15 60 Z");
    }

    #[test]
    fn test_scene_to_svg() {
        let mut scene = Scene::new(200.0, 100.0).stretched();
        scene.add_gradient(LinearGradient::fade("g", "#3BC77D", 0.3, 0.0));
        scene.push(Primitive::Polyline(Polyline {
            points: vec![Point::new(0.0, 80.0), Point::new(200.0, 20.0)],
            style: Style::stroked(Stroke::new("#3BC77D", 2.0).round_cap()),
        }));

        let svg = scene.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100" preserveAspectRatio="none">"#));
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#3BC77D" stop-opacity="0.3"/>"##));
        assert!(svg.contains(r##"<polyline points="0,80 200,20" fill="none" stroke="#3BC77D" stroke-width="2" stroke-linecap="round"/>"##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.push(Primitive::Text(Text {
            position: Point::new(0.0, 5.0),
            content: "R&D <core>".to_string(),
            anchor: TextAnchor::Start,
            size: 4.0,
            color: "#000".to_string(),
        }));
        assert!(scene.to_svg().contains(">R&amp;D &lt;core&gt;</text>"));
    }
}
