use charts::donut;
use charts::scene::{Circle, LineCap, Primitive, Rect, Style, Text, TextAnchor};
use charts::svg::{format_number, paint_attr, points_attr};
use charts::{ChartData, ChartDescriptor, Scene};
use yew::prelude::*;

/// Legend swatch colour for a label without a drawn segment.
const LEGEND_FALLBACK: &str = "#2a9d90";

#[derive(Properties, PartialEq)]
pub struct SceneViewProps {
    pub scene: Scene,
    #[prop_or_default]
    pub class: Classes,
}

/// Draws a chart scene as inline SVG.
#[function_component(SceneView)]
pub fn scene_view(props: &SceneViewProps) -> Html {
    let scene = &props.scene;
    let aspect = if scene.stretch { "none" } else { "xMidYMid meet" };

    html! {
        <svg class={props.class.clone()} viewBox={scene.view_box_attr()} preserveAspectRatio={aspect}>
            if !scene.gradients.is_empty() {
                <defs>
                    { for scene.gradients.iter().map(|gradient| html! {
                        <linearGradient id={gradient.id.clone()} x1="0%" y1="0%" x2="0%" y2="100%">
                            { for gradient.stops.iter().map(|stop| html! {
                                <stop
                                    offset={format!("{}%", format_number(stop.offset * 100.0))}
                                    stop-color={stop.color.clone()}
                                    stop-opacity={format_number(stop.opacity)}
                                />
                            }) }
                        </linearGradient>
                    }) }
                </defs>
            }
            { for scene.primitives.iter().map(primitive) }
        </svg>
    }
}

fn primitive(primitive: &Primitive) -> Html {
    match primitive {
        Primitive::Circle(circle) => circle_node(circle),
        Primitive::Rect(rect) => rect_node(rect),
        Primitive::Path(path) => {
            let stroke = StrokeAttrs::from(&path.style);
            html! {
                <path d={path.to_d()} fill={paint_attr(&path.style.fill)}
                    stroke={stroke.color} stroke-width={stroke.width} />
            }
        }
        Primitive::Polyline(line) => {
            let stroke = StrokeAttrs::from(&line.style);
            html! {
                <polyline points={points_attr(&line.points)} fill={paint_attr(&line.style.fill)}
                    stroke={stroke.color} stroke-width={stroke.width}
                    stroke-linecap={stroke.linecap} stroke-linejoin={stroke.linejoin}
                    vector-effect={stroke.vector_effect} />
            }
        }
        Primitive::Polygon(polygon) => html! {
            <polygon points={points_attr(&polygon.points)} fill={paint_attr(&polygon.style.fill)} />
        },
        Primitive::Text(text) => text_node(text),
    }
}

fn circle_node(circle: &Circle) -> Html {
    let stroke = StrokeAttrs::from(&circle.style);
    html! {
        <circle
            cx={format_number(circle.center.x)}
            cy={format_number(circle.center.y)}
            r={format_number(circle.radius)}
            fill={paint_attr(&circle.style.fill)}
            stroke={stroke.color}
            stroke-width={stroke.width}
            stroke-dasharray={stroke.dasharray}
            stroke-linecap={stroke.linecap}
            transform={circle.transform_attr()}
        />
    }
}

fn rect_node(rect: &Rect) -> Html {
    let rx = (rect.corner_radius > 0.0).then(|| format_number(rect.corner_radius));
    html! {
        <rect
            x={format_number(rect.origin.x)}
            y={format_number(rect.origin.y)}
            width={format_number(rect.width)}
            height={format_number(rect.height)}
            rx={rx}
            fill={paint_attr(&rect.style.fill)}
        />
    }
}

fn text_node(text: &Text) -> Html {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    html! {
        <text x={format_number(text.position.x)} y={format_number(text.position.y)}
            font-size={format_number(text.size)} fill={text.color.clone()} text-anchor={anchor}>
            {&text.content}
        </text>
    }
}

/// Optional stroke attributes; `None` leaves the attribute off.
#[derive(Default)]
struct StrokeAttrs {
    color: Option<String>,
    width: Option<String>,
    dasharray: Option<String>,
    linecap: Option<&'static str>,
    linejoin: Option<&'static str>,
    vector_effect: Option<&'static str>,
}

impl From<&Style> for StrokeAttrs {
    fn from(style: &Style) -> Self {
        let Some(stroke) = &style.stroke else {
            return Self::default();
        };
        Self {
            color: Some(stroke.color.clone()),
            width: Some(format_number(stroke.width)),
            dasharray: stroke
                .dash
                .map(|(dash, gap)| format!("{} {}", format_number(dash), format_number(gap))),
            linecap: (stroke.cap == LineCap::Round).then_some("round"),
            linejoin: stroke.round_join.then_some("round"),
            vector_effect: stroke.non_scaling.then_some("non-scaling-stroke"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub descriptor: ChartDescriptor,
}

/// A chart with its headline value, legend, trend and description.
#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    let descriptor = &props.descriptor;
    let display = &descriptor.display;
    let scene = use_memo(descriptor.clone(), |descriptor| descriptor.render());

    let headline = html! {
        <div class="flex items-baseline gap-2">
            <span class="text-2xl font-bold">{&display.value}</span>
            <span class="text-sm text-base-content/60">{&display.label}</span>
        </div>
    };

    let body = match &descriptor.data {
        ChartData::Radial { .. } => html! {
            <div class="relative w-40 h-40 mx-auto">
                <SceneView scene={(*scene).clone()} class="w-full h-full" />
                <div class="absolute inset-0 flex flex-col items-center justify-center">
                    <span class="text-2xl font-bold">{&display.value}</span>
                    <span class="text-xs text-base-content/60">{&display.label}</span>
                </div>
            </div>
        },
        ChartData::Line { .. } | ChartData::Progress { .. } => html! {
            <>
                <SceneView scene={(*scene).clone()} class="w-full" />
                {headline}
            </>
        },
        ChartData::Bar { labels, .. } => html! {
            <>
                <SceneView scene={(*scene).clone()} class="w-full" />
                if let Some(labels) = labels {
                    <div class="flex justify-around text-xs text-base-content/60 px-2">
                        { for labels.iter().map(|label| html! { <span>{label}</span> }) }
                    </div>
                }
                {headline}
            </>
        },
        ChartData::Donut { data, labels, colors } => {
            let segments = donut::segments(data, colors.as_deref());
            let swatch = |i: usize| {
                segments.get(i).map(|s| s.color.clone()).unwrap_or_else(|| LEGEND_FALLBACK.to_string())
            };
            html! {
                <div class="flex items-center gap-6">
                    <div class="relative w-36 h-36">
                        <SceneView scene={(*scene).clone()} class="w-full h-full" />
                        <div class="absolute inset-0 flex flex-col items-center justify-center">
                            <span class="text-lg font-bold">{&display.value}</span>
                            <span class="text-xs text-base-content/60">{&display.label}</span>
                        </div>
                    </div>
                    if let Some(labels) = labels {
                        <ul class="flex flex-col gap-2 text-sm">
                            { for labels.iter().enumerate().map(|(i, label)| html! {
                                <li class="flex items-center gap-2">
                                    <span class="w-3 h-3 rounded-sm" style={format!("background-color: {}", swatch(i))}></span>
                                    <span>{label}</span>
                                    <span class="font-semibold">{format!("{}%", format_number(data.value(i)))}</span>
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            }
        }
    };

    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body gap-4">
                {body}
                <div class="flex flex-col gap-1">
                    <div class="flex items-center gap-2 text-sm font-medium">
                        <span>{&display.trend}</span>
                        <span class={if display.trend_up { "text-success" } else { "text-error" }}>
                            {if display.trend_up { "↗" } else { "↘" }}
                        </span>
                    </div>
                    <p class="text-sm text-base-content/60">{&display.description}</p>
                </div>
            </div>
        </div>
    }
}
