//! Declarative chart rendering.
//!
//! Every chart kind is a pure mapping from a [`Series`] (plus optional labels
//! and colors) to a [`Scene`] of vector primitives. Nothing is cached and no
//! state survives a render call, so rendering the same input twice yields the
//! same scene.
//!
//! Degenerate input (empty series, zero range, zero total, out-of-range
//! percentages) never fails a render. Each renderer falls back to a safe
//! shape instead, and [`ChartDescriptor::validate`] reports the problem to
//! callers that want to know.

pub mod bar;
pub mod descriptor;
pub mod donut;
pub mod error;
pub mod line;
pub mod palette;
pub mod progress;
pub mod radial;
pub mod scene;
pub mod series;
pub mod svg;

pub use descriptor::{ChartData, ChartDescriptor, ChartKind, DisplayMeta};
pub use error::{ChartError, Result, SeriesProblem};
pub use palette::Palette;
pub use scene::{Point, Primitive, Scene};
pub use series::Series;
