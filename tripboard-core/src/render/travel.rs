use tripboard_boundary::TravelEstimate;

use crate::chart::{ChartKind, ChartSpec, Dataset, Legend};

/// Share of fuel in a total cost without breakdown.
pub const FUEL_SHARE: f64 = 0.7;

const SLICE_COLORS: [&str; 2] = ["#0d6efd", "#20c997"];

#[derive(Debug, Clone, PartialEq)]
pub struct CostSlice {
    pub label: &'static str,
    pub usd: f64,
}

/// The two cost components of an estimate, if the estimate has any cost.
#[must_use]
pub fn cost_split(estimate: &TravelEstimate) -> Option<[CostSlice; 2]> {
    if let Some(b) = &estimate.cost_breakdown {
        return Some([
            CostSlice { label: "Fuel", usd: b.fuel },
            CostSlice { label: "Time", usd: b.time },
        ]);
    }
    if let Some(c) = &estimate.cost {
        return Some([
            CostSlice {
                label: "Base Fee",
                usd: c.base_fee_usd,
            },
            CostSlice {
                label: "Variable",
                usd: c.variable_usd,
            },
        ]);
    }
    let total = estimate.cost_usd.filter(|c| c.is_finite())?;
    Some([
        CostSlice {
            label: "Fuel",
            usd: total * FUEL_SHARE,
        },
        CostSlice {
            label: "Time",
            usd: total * (1.0 - FUEL_SHARE),
        },
    ])
}

#[must_use]
pub fn total_cost(estimate: &TravelEstimate) -> Option<f64> {
    estimate
        .cost_usd
        .or_else(|| estimate.cost.as_ref().map(|c| c.total_usd))
        .or_else(|| estimate.cost_breakdown.as_ref().map(|b| b.fuel + b.time))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelSummary {
    pub distance_km: f64,
    pub duration_min: f64,
    pub cost_usd: Option<f64>,
    pub mode: Option<String>,
}

impl TravelSummary {
    #[must_use]
    pub fn new(estimate: &TravelEstimate) -> Self {
        Self {
            distance_km: estimate.distance_km,
            duration_min: estimate.duration_min,
            cost_usd: total_cost(estimate),
            mode: estimate.mode.clone(),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        let mut text = format!(
            "Distance {} km • Duration {} min",
            self.distance_km, self.duration_min
        );
        if let Some(cost) = self.cost_usd {
            text.push_str(&format!(" • Cost ${cost:.2}"));
        }
        text
    }
}

#[must_use]
pub fn cost_chart(estimate: &TravelEstimate, kind: ChartKind) -> Option<ChartSpec> {
    let slices = cost_split(estimate)?;
    let legend = match kind {
        ChartKind::Doughnut => Legend::Bottom,
        ChartKind::Bar | ChartKind::Line => Legend::Hidden,
    };
    Some(ChartSpec {
        kind,
        labels: slices.iter().map(|s| s.label.to_string()).collect(),
        datasets: vec![Dataset {
            label: "USD".to_string(),
            data: slices.iter().map(|s| s.usd).collect(),
            border_color: None,
            background_colors: SLICE_COLORS.to_vec(),
            fill: false,
        }],
        legend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(json: &str) -> TravelEstimate {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prefer_cost_breakdown() {
        let e = estimate(
            r#"{"distance_km":10,"duration_min":15,"cost_usd":5.0,"cost_breakdown":{"fuel":3.5,"time":1.5},"cost":{"base_fee_usd":1,"variable_usd":2,"total_usd":3}}"#,
        );
        let [fuel, time] = cost_split(&e).unwrap();
        assert_eq!((fuel.label, fuel.usd), ("Fuel", 3.5));
        assert_eq!((time.label, time.usd), ("Time", 1.5));
    }

    #[test]
    fn cost_model_without_breakdown() {
        let e = estimate(
            r#"{"distance_km":10,"duration_min":15,"cost":{"base_fee_usd":2.5,"variable_usd":7.5,"total_usd":10}}"#,
        );
        let [base, variable] = cost_split(&e).unwrap();
        assert_eq!((base.label, base.usd), ("Base Fee", 2.5));
        assert_eq!((variable.label, variable.usd), ("Variable", 7.5));
        assert_eq!(total_cost(&e), Some(10.0));
    }

    #[test]
    fn split_total_seventy_thirty() {
        let e = estimate(r#"{"distance_km":10,"duration_min":15,"cost_usd":10.0}"#);
        let [fuel, time] = cost_split(&e).unwrap();
        assert!((fuel.usd - 7.0).abs() < 1e-9);
        assert!((time.usd - 3.0).abs() < 1e-9);
    }

    #[test]
    fn no_cost_no_chart() {
        let e = estimate(r#"{"distance_km":1.5,"duration_min":4}"#);
        assert!(cost_split(&e).is_none());
        assert!(cost_chart(&e, ChartKind::Bar).is_none());
        assert_eq!(TravelSummary::new(&e).text(), "Distance 1.5 km • Duration 4 min");
    }

    #[test]
    fn summary_with_cost() {
        let e = estimate(r#"{"distance_km":12.3,"duration_min":18.5,"cost_usd":4.1}"#);
        assert_eq!(
            TravelSummary::new(&e).text(),
            "Distance 12.3 km • Duration 18.5 min • Cost $4.10"
        );
        let chart = cost_chart(&e, ChartKind::Doughnut).unwrap();
        assert_eq!(chart.labels, vec!["Fuel", "Time"]);
        assert_eq!(chart.legend, Legend::Bottom);
    }
}
