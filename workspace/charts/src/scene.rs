//! Geometric output shared by every chart kind.

/// A point in view-box coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    /// Dash pattern as `(dash, gap)`
    pub dash: Option<(f64, f64)>,
    pub cap: LineCap,
    pub round_join: bool,
    /// Keep the stroke width constant when the view box is stretched
    pub non_scaling: bool,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
            cap: LineCap::Butt,
            round_join: false,
            non_scaling: false,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn round_cap(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    pub fn round_join(mut self) -> Self {
        self.round_join = true;
        self
    }

    pub fn non_scaling(mut self) -> Self {
        self.non_scaling = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Paint {
    #[default]
    None,
    Color(String),
    /// Reference to a gradient declared on the scene
    Gradient(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Option<Stroke>,
}

impl Style {
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Paint::Color(color.into()),
            stroke: None,
        }
    }

    pub fn gradient(id: impl Into<String>) -> Self {
        Self {
            fill: Paint::Gradient(id.into()),
            stroke: None,
        }
    }

    pub fn stroked(stroke: Stroke) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some(stroke),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    /// Rotation in degrees about the center
    pub rotation: Option<f64>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc with the given radius, drawn clockwise
    Arc {
        radius: f64,
        large_arc: bool,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub anchor: TextAnchor,
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Rect(Rect),
    Path(Path),
    Polyline(Polyline),
    Polygon(Polygon),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset in `[0, 1]`
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// A top-to-bottom linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Single color fading between two opacities.
    pub fn fade(id: impl Into<String>, color: &str, from: f64, to: f64) -> Self {
        Self {
            id: id.into(),
            stops: vec![
                GradientStop { offset: 0.0, color: color.to_string(), opacity: from },
                GradientStop { offset: 1.0, color: color.to_string(), opacity: to },
            ],
        }
    }
}

/// A complete drawing: view box, gradient definitions and primitives in
/// paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view_box: ViewBox,
    /// Stretch to the container instead of preserving the aspect ratio
    pub stretch: bool,
    pub gradients: Vec<LinearGradient>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            view_box: ViewBox { width, height },
            stretch: false,
            gradients: Vec::new(),
            primitives: Vec::new(),
        }
    }

    pub fn stretched(mut self) -> Self {
        self.stretch = true;
        self
    }

    pub fn add_gradient(&mut self, gradient: LinearGradient) {
        self.gradients.push(gradient);
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline(line) => Some(line),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polygon(poly) => Some(poly),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }
}
