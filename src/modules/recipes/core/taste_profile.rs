// Eight-axis sensory profile and the two presentations derived from it:
// the one-sentence summary and the radar chart geometry.

use crate::shared::core::primitives::MAX_TASTE_VALUE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TasteProfileError {
    #[error("{axis} must be between 0 and 10, got {value}")]
    OutOfRange { axis: &'static str, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TasteAxis {
    Fragrance,
    Aroma,
    Flavor,
    Sweetness,
    Acidity,
    Body,
    Aftertaste,
    Balance,
}

impl TasteAxis {
    pub const ALL: [TasteAxis; 8] = [
        TasteAxis::Fragrance,
        TasteAxis::Aroma,
        TasteAxis::Flavor,
        TasteAxis::Sweetness,
        TasteAxis::Acidity,
        TasteAxis::Body,
        TasteAxis::Aftertaste,
        TasteAxis::Balance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TasteAxis::Fragrance => "fragrance",
            TasteAxis::Aroma => "aroma",
            TasteAxis::Flavor => "flavor",
            TasteAxis::Sweetness => "sweetness",
            TasteAxis::Acidity => "acidity",
            TasteAxis::Body => "body",
            TasteAxis::Aftertaste => "aftertaste",
            TasteAxis::Balance => "balance",
        }
    }

    /// Label shown on the radar chart. Body and balance are presented as mouthfeel and impression.
    pub fn radar_label(self) -> &'static str {
        match self {
            TasteAxis::Fragrance => "Fragrance",
            TasteAxis::Aroma => "Aroma",
            TasteAxis::Flavor => "Flavor",
            TasteAxis::Sweetness => "Sweetness",
            TasteAxis::Acidity => "Acidity",
            TasteAxis::Body => "Mouthfeel",
            TasteAxis::Aftertaste => "Aftertaste",
            TasteAxis::Balance => "Impression",
        }
    }

    /// Fixed angular position on the radar chart, in degrees. 0° points right, 90° down.
    pub fn radar_angle_degrees(self) -> f64 {
        match self {
            TasteAxis::Fragrance => -90.0,
            TasteAxis::Flavor => -45.0,
            TasteAxis::Aroma => 0.0,
            TasteAxis::Aftertaste => 45.0,
            TasteAxis::Balance => 90.0,
            TasteAxis::Body => 135.0,
            TasteAxis::Acidity => 180.0,
            TasteAxis::Sweetness => 225.0,
        }
    }
}

/// Drawing order of the radar chart, clockwise from the top.
pub const RADAR_AXES: [TasteAxis; 8] = [
    TasteAxis::Fragrance,
    TasteAxis::Flavor,
    TasteAxis::Aroma,
    TasteAxis::Aftertaste,
    TasteAxis::Balance,
    TasteAxis::Body,
    TasteAxis::Acidity,
    TasteAxis::Sweetness,
];

const HIGH_THRESHOLD: u8 = 7;
const LOW_THRESHOLD: u8 = 3;

/// Every axis is 0..=10; 0 means "not rated".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TasteProfile {
    pub fragrance: u8,
    pub aroma: u8,
    pub flavor: u8,
    pub sweetness: u8,
    pub acidity: u8,
    pub body: u8,
    pub aftertaste: u8,
    pub balance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub axis: TasteAxis,
    pub label: &'static str,
    pub value: u8,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

impl TasteProfile {
    pub fn get(&self, axis: TasteAxis) -> u8 {
        match axis {
            TasteAxis::Fragrance => self.fragrance,
            TasteAxis::Aroma => self.aroma,
            TasteAxis::Flavor => self.flavor,
            TasteAxis::Sweetness => self.sweetness,
            TasteAxis::Acidity => self.acidity,
            TasteAxis::Body => self.body,
            TasteAxis::Aftertaste => self.aftertaste,
            TasteAxis::Balance => self.balance,
        }
    }

    pub fn set(&mut self, axis: TasteAxis, value: u8) -> Result<(), TasteProfileError> {
        if value > MAX_TASTE_VALUE {
            return Err(TasteProfileError::OutOfRange {
                axis: axis.name(),
                value,
            });
        }
        let slot = match axis {
            TasteAxis::Fragrance => &mut self.fragrance,
            TasteAxis::Aroma => &mut self.aroma,
            TasteAxis::Flavor => &mut self.flavor,
            TasteAxis::Sweetness => &mut self.sweetness,
            TasteAxis::Acidity => &mut self.acidity,
            TasteAxis::Body => &mut self.body,
            TasteAxis::Aftertaste => &mut self.aftertaste,
            TasteAxis::Balance => &mut self.balance,
        };
        *slot = value;
        Ok(())
    }

    /// First axis outside 0..=10, if any.
    pub fn out_of_range(&self) -> Option<(TasteAxis, u8)> {
        TasteAxis::ALL
            .into_iter()
            .map(|axis| (axis, self.get(axis)))
            .find(|(_, value)| *value > MAX_TASTE_VALUE)
    }

    /// Descriptors of the axes rated 7 or more, checked as sweetness, acidity, body, flavor.
    pub fn high_notes(&self) -> Vec<&'static str> {
        [
            (self.sweetness, "sweet"),
            (self.acidity, "bright/acidic"),
            (self.body, "full-bodied"),
            (self.flavor, "flavorful"),
        ]
        .into_iter()
        .filter(|(value, _)| *value >= HIGH_THRESHOLD)
        .map(|(_, note)| note)
        .collect()
    }

    /// Descriptors of acidity and sweetness when rated 1..=3. Unrated axes are not "low".
    pub fn low_notes(&self) -> Vec<&'static str> {
        [
            (self.acidity, "low acidity"),
            (self.sweetness, "low sweetness"),
        ]
        .into_iter()
        .filter(|(value, _)| (1..=LOW_THRESHOLD).contains(value))
        .map(|(_, note)| note)
        .collect()
    }

    pub fn summary(&self) -> String {
        let high = self.high_notes();
        let low = self.low_notes();

        let mut text = String::from("This coffee presents a ");
        if high.is_empty() {
            text.push_str("balanced profile");
        } else {
            text.push_str(&high.join(" and "));
            text.push_str(" profile");
        }

        if low.is_empty() {
            text.push('.');
        } else {
            text.push_str(", with ");
            text.push_str(&low.join(" and "));
            text.push('.');
        }
        text
    }

    /// Radar points around `center`; a value of 10 lands exactly on `max_radius`.
    /// Unrated axes produce no point.
    pub fn radar_points(&self, center: (f64, f64), max_radius: f64) -> Vec<RadarPoint> {
        RADAR_AXES
            .into_iter()
            .filter_map(|axis| {
                let value = self.get(axis);
                if value == 0 {
                    return None;
                }
                let radius = f64::from(value) / f64::from(MAX_TASTE_VALUE) * max_radius;
                let angle = axis.radar_angle_degrees().to_radians();
                Some(RadarPoint {
                    axis,
                    label: axis.radar_label(),
                    value,
                    radius,
                    x: center.0 + radius * angle.cos(),
                    y: center.1 + radius * angle.sin(),
                })
            })
            .collect()
    }
}
