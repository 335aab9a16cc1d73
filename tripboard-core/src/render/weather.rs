use time::{macros::format_description, OffsetDateTime};

use tripboard_boundary::{CurrentWeather, DailySeries, Forecast, ForecastItem, WeatherReport};

use super::RenderError;
use crate::{
    chart::{ChartKind, ChartSpec, Dataset, Legend},
    config,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    /// Degrees Celsius, rounded half-up.
    pub temperature: i64,
    pub condition: String,
    pub description: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub icon: String,
    pub icon_url: String,
}

impl WeatherCard {
    #[must_use]
    pub fn headline(&self) -> String {
        if self.condition.is_empty() {
            format!("{}°C", self.temperature)
        } else {
            format!("{}°C, {}", self.temperature, self.condition)
        }
    }

    #[must_use]
    pub fn details(&self) -> String {
        let humidity = self
            .humidity
            .map(|h| format!("Humidity {h}%"))
            .unwrap_or_else(|| "Humidity n/a".to_string());
        let wind = self
            .wind_speed
            .map(|w| format!("Wind {w} m/s"))
            .unwrap_or_else(|| "Wind n/a".to_string());
        format!("{humidity} • {wind}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub card: WeatherCard,
    /// `None` if the report carries no forecast.
    pub chart: Option<ChartSpec>,
}

pub fn weather_panel(
    report: &WeatherReport,
    cfg: &config::Weather,
) -> Result<WeatherPanel, RenderError> {
    if let Some(err) = &report.error {
        return Err(RenderError::Reported(err.clone()));
    }
    let current = report.current.as_ref().ok_or(RenderError::MissingCurrent)?;
    let card = weather_card(current, cfg)?;
    let chart = report
        .daily
        .as_ref()
        .and_then(daily_chart)
        .or_else(|| report.forecast.as_ref().and_then(forecast_chart));
    Ok(WeatherPanel { card, chart })
}

fn weather_card(current: &CurrentWeather, cfg: &config::Weather) -> Result<WeatherCard, RenderError> {
    let main = current.main.as_ref();
    let temp = main
        .and_then(|m| m.temp)
        .filter(|t| t.is_finite())
        .ok_or(RenderError::MissingTemperature)?;
    let condition = current.weather.first();
    let icon = condition
        .and_then(|c| c.icon.clone())
        .filter(|i| !i.is_empty())
        .unwrap_or_else(|| cfg.fallback_icon.clone());
    Ok(WeatherCard {
        temperature: round_half_up(temp),
        condition: condition.and_then(|c| c.main.clone()).unwrap_or_default(),
        description: condition.and_then(|c| c.description.clone()),
        humidity: main.and_then(|m| m.humidity),
        wind_speed: current.wind.as_ref().and_then(|w| w.speed),
        icon_url: cfg.icon_url.replace("{icon}", &icon),
        icon,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn daily_chart(daily: &DailySeries) -> Option<ChartSpec> {
    if daily.labels.is_empty() {
        return None;
    }
    let series = [
        ("Temp (°C)", &daily.temp, "#0d6efd", "rgba(13,110,253,0.15)"),
        ("Wind (m/s)", &daily.wind, "#20c997", "rgba(32,201,151,0.1)"),
        ("Humidity (%)", &daily.humidity, "#fd7e14", "rgba(253,126,20,0.1)"),
    ];
    let datasets = series
        .into_iter()
        .map(|(label, data, border, background)| Dataset {
            label: label.to_string(),
            data: data.clone(),
            border_color: Some(border),
            background_colors: vec![background],
            fill: true,
        })
        .collect();
    Some(ChartSpec {
        kind: ChartKind::Line,
        labels: daily.labels.clone(),
        datasets,
        legend: Legend::Bottom,
    })
}

/// Single temperature series of the raw 3-hourly forecast.
#[must_use]
pub fn forecast_chart(forecast: &Forecast) -> Option<ChartSpec> {
    let (labels, temps): (Vec<_>, Vec<_>) = forecast
        .list
        .iter()
        .filter_map(|item| {
            let temp = item.main.as_ref()?.temp?;
            Some((forecast_label(item), temp))
        })
        .unzip();
    if labels.is_empty() {
        return None;
    }
    Some(ChartSpec {
        kind: ChartKind::Line,
        labels,
        datasets: vec![Dataset {
            label: "Temp (°C)".to_string(),
            data: temps,
            border_color: Some("#0d6efd"),
            background_colors: vec!["rgba(13,110,253,0.1)"],
            fill: false,
        }],
        legend: Legend::Top,
    })
}

fn forecast_label(item: &ForecastItem) -> String {
    let format = format_description!("[month repr:short] [day] [hour]:[minute]");
    item.dt
        .and_then(|dt| OffsetDateTime::from_unix_timestamp(dt).ok())
        .and_then(|dt| dt.format(format).ok())
        .or_else(|| item.dt_txt.clone())
        .unwrap_or_default()
}
