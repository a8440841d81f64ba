/// Colors used when a chart carries no palette of its own.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#4E76D0", "#3BC77D", "#F75F50", "#F5B732", "#8B5CF6", "#14B8A6",
];

/// Progress bars lead with green instead of blue.
pub const PROGRESS_COLORS: [&str; 6] = [
    "#3BC77D", "#4E76D0", "#F75F50", "#F5B732", "#8B5CF6", "#14B8A6",
];

/// Resolves the color of the n-th element of a chart.
///
/// A supplied palette wins and is reused cyclically when shorter than the
/// series. An absent or empty palette falls back to the fixed colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    overrides: Option<&'a [String]>,
    fallback: &'static [&'static str],
}

impl<'a> Palette<'a> {
    pub fn new(overrides: Option<&'a [String]>) -> Self {
        Self {
            overrides,
            fallback: &DEFAULT_COLORS,
        }
    }

    pub fn progress(overrides: Option<&'a [String]>) -> Self {
        Self {
            overrides,
            fallback: &PROGRESS_COLORS,
        }
    }

    pub fn color(&self, index: usize) -> &'a str {
        match self.overrides {
            Some(colors) if !colors.is_empty() => colors[index % colors.len()].as_str(),
            _ => self.fallback[index % self.fallback.len()],
        }
    }
}
