use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Doughnut => "doughnut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Legend {
    #[default]
    Top,
    Bottom,
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: Option<&'static str>,
    /// One color for the whole series or one per value.
    pub background_colors: Vec<&'static str>,
    pub fill: bool,
}

/// Everything the charting library needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub legend: Legend,
}

/// The canvases a page owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canvas {
    Weather,
    Cost,
}

impl Canvas {
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Weather => "weather-chart",
            Self::Cost => "cost-chart",
        }
    }
}

/// The charting library.
pub trait ChartBackend {
    type Handle;
    fn create(&mut self, canvas: Canvas, spec: &ChartSpec) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
}

/// Keeps at most one live chart per canvas.
#[derive(Debug)]
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: HashMap<Canvas, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Destroys the chart currently bound to `canvas` before drawing the new one.
    pub fn replace(&mut self, canvas: Canvas, spec: &ChartSpec) {
        self.clear(canvas);
        log::debug!("Create {} chart on #{}", spec.kind.as_str(), canvas.element_id());
        let handle = self.backend.create(canvas, spec);
        self.live.insert(canvas, handle);
    }

    pub fn clear(&mut self, canvas: Canvas) {
        if let Some(handle) = self.live.remove(&canvas) {
            log::debug!("Destroy chart on #{}", canvas.element_id());
            self.backend.destroy(handle);
        }
    }

    #[must_use]
    pub fn is_live(&self, canvas: Canvas) -> bool {
        self.live.contains_key(&canvas)
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
