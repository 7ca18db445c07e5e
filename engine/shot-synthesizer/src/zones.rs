//! Court zones: envelopes, shot types, action mixes and area labels
//!
//! Coordinates are basket-relative court units (10 per foot): `x` runs
//! sideline to sideline, `y` from the baseline toward half court.

use serde::{Deserialize, Serialize};

/// `|x|` at or below this is the center area
pub const CENTER_MAX_ABS_X: i32 = 60;

/// `|x|` above this is a side area; between the two is side-center
pub const SIDE_MIN_ABS_X: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShotZone {
    #[serde(rename = "Restricted Area")]
    RestrictedArea,
    #[serde(rename = "In The Paint (Non-RA)")]
    InThePaint,
    #[serde(rename = "Mid-Range")]
    MidRange,
    #[serde(rename = "Left Corner 3")]
    LeftCorner3,
    #[serde(rename = "Right Corner 3")]
    RightCorner3,
    #[serde(rename = "Above the Break 3")]
    AboveTheBreak3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotType {
    #[serde(rename = "2PT Field Goal")]
    TwoPoint,
    #[serde(rename = "3PT Field Goal")]
    ThreePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotArea {
    #[serde(rename = "Center(C)")]
    Center,
    #[serde(rename = "Left Side(L)")]
    LeftSide,
    #[serde(rename = "Left Side Center(LC)")]
    LeftSideCenter,
    #[serde(rename = "Right Side Center(RC)")]
    RightSideCenter,
    #[serde(rename = "Right Side(R)")]
    RightSide,
}

impl ShotArea {
    pub fn label(self) -> &'static str {
        match self {
            ShotArea::Center => "Center(C)",
            ShotArea::LeftSide => "Left Side(L)",
            ShotArea::LeftSideCenter => "Left Side Center(LC)",
            ShotArea::RightSideCenter => "Right Side Center(RC)",
            ShotArea::RightSide => "Right Side(R)",
        }
    }
}

/// Inclusive integer interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Uniform base rectangle plus Gaussian jitter, clamped to a legal box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectEnvelope {
    pub base_x: AxisRange,
    pub base_y: AxisRange,
    pub sigma_x: f64,
    pub sigma_y: f64,
    pub clamp_x: AxisRange,
    pub clamp_y: AxisRange,
}

/// Polar sampling around the three-point arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcEnvelope {
    /// Angle is drawn from `[margin, PI - margin]`
    pub angle_margin: f64,
    pub radius_mean: f64,
    pub radius_sigma: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub clamp_x: AxisRange,
    pub clamp_y: AxisRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneEnvelope {
    Rect(RectEnvelope),
    Arc(ArcEnvelope),
}

impl ZoneEnvelope {
    /// Legal box every sampled coordinate ends up in
    pub fn bounds(&self) -> (AxisRange, AxisRange) {
        match self {
            ZoneEnvelope::Rect(rect) => (rect.clamp_x, rect.clamp_y),
            ZoneEnvelope::Arc(arc) => (arc.clamp_x, arc.clamp_y),
        }
    }
}

const fn rect(
    base_x: (i32, i32),
    base_y: (i32, i32),
    sigma: (f64, f64),
    clamp_x: (i32, i32),
    clamp_y: (i32, i32),
) -> ZoneEnvelope {
    ZoneEnvelope::Rect(RectEnvelope {
        base_x: AxisRange::new(base_x.0, base_x.1),
        base_y: AxisRange::new(base_y.0, base_y.1),
        sigma_x: sigma.0,
        sigma_y: sigma.1,
        clamp_x: AxisRange::new(clamp_x.0, clamp_x.1),
        clamp_y: AxisRange::new(clamp_y.0, clamp_y.1),
    })
}

const RESTRICTED_AREA: ZoneEnvelope = rect((-30, 30), (-10, 40), (8.0, 6.0), (-40, 40), (-10, 50));
const IN_THE_PAINT: ZoneEnvelope = rect((-80, 80), (40, 140), (12.0, 15.0), (-90, 90), (35, 150));
const MID_RANGE: ZoneEnvelope = rect((-160, 160), (50, 200), (20.0, 15.0), (-175, 175), (40, 210));
const LEFT_CORNER_3: ZoneEnvelope =
    rect((-230, -210), (-10, 40), (5.0, 8.0), (-245, -200), (-15, 50));
const RIGHT_CORNER_3: ZoneEnvelope = rect((210, 230), (-10, 40), (5.0, 8.0), (200, 245), (-15, 50));
const ABOVE_THE_BREAK_3: ZoneEnvelope = ZoneEnvelope::Arc(ArcEnvelope {
    angle_margin: 0.15,
    radius_mean: 237.5,
    radius_sigma: 15.0,
    radius_min: 220.0,
    radius_max: 280.0,
    clamp_x: AxisRange::new(-240, 240),
    clamp_y: AxisRange::new(90, 310),
});

type ActionTable = &'static [(&'static str, u32)];

const RESTRICTED_AREA_ACTIONS: ActionTable = &[
    ("Driving Layup Shot", 30),
    ("Layup Shot", 20),
    ("Cutting Layup Shot", 15),
    ("Dunk Shot", 12),
    ("Driving Dunk Shot", 8),
    ("Reverse Layup Shot", 8),
    ("Finger Roll Layup Shot", 4),
    ("Putback Layup Shot", 3),
];

const IN_THE_PAINT_ACTIONS: ActionTable = &[
    ("Floating Jump Shot", 30),
    ("Driving Floating Jump Shot", 20),
    ("Jump Shot", 15),
    ("Turnaround Jump Shot", 10),
    ("Hook Shot", 8),
    ("Driving Layup Shot", 10),
    ("Runner", 7),
];

const MID_RANGE_ACTIONS: ActionTable = &[
    ("Jump Shot", 30),
    ("Pullup Jump Shot", 20),
    ("Step Back Jump Shot", 10),
    ("Turnaround Jump Shot", 12),
    ("Fadeaway Jump Shot", 8),
    ("Driving Floating Jump Shot", 10),
    ("Floating Jump Shot", 10),
];

const CORNER_3_ACTIONS: ActionTable = &[
    ("Jump Shot", 55),
    ("Pullup Jump Shot", 15),
    ("Step Back Jump Shot", 15),
    ("Catch and Shoot Jump Shot", 15),
];

const ABOVE_THE_BREAK_3_ACTIONS: ActionTable = &[
    ("Jump Shot", 35),
    ("Pullup Jump Shot", 25),
    ("Step Back Jump Shot", 15),
    ("Catch and Shoot Jump Shot", 15),
    ("Driving Floating Bank Jump Shot", 5),
    ("Turnaround Jump Shot", 5),
];

impl ShotZone {
    pub const ALL: [ShotZone; 6] = [
        ShotZone::RestrictedArea,
        ShotZone::InThePaint,
        ShotZone::MidRange,
        ShotZone::LeftCorner3,
        ShotZone::RightCorner3,
        ShotZone::AboveTheBreak3,
    ];

    /// `SHOT_ZONE_BASIC` label
    pub fn label(self) -> &'static str {
        match self {
            ShotZone::RestrictedArea => "Restricted Area",
            ShotZone::InThePaint => "In The Paint (Non-RA)",
            ShotZone::MidRange => "Mid-Range",
            ShotZone::LeftCorner3 => "Left Corner 3",
            ShotZone::RightCorner3 => "Right Corner 3",
            ShotZone::AboveTheBreak3 => "Above the Break 3",
        }
    }

    pub fn shot_type(self) -> ShotType {
        match self {
            ShotZone::RestrictedArea | ShotZone::InThePaint | ShotZone::MidRange => {
                ShotType::TwoPoint
            }
            ShotZone::LeftCorner3 | ShotZone::RightCorner3 | ShotZone::AboveTheBreak3 => {
                ShotType::ThreePoint
            }
        }
    }

    pub fn envelope(self) -> ZoneEnvelope {
        match self {
            ShotZone::RestrictedArea => RESTRICTED_AREA,
            ShotZone::InThePaint => IN_THE_PAINT,
            ShotZone::MidRange => MID_RANGE,
            ShotZone::LeftCorner3 => LEFT_CORNER_3,
            ShotZone::RightCorner3 => RIGHT_CORNER_3,
            ShotZone::AboveTheBreak3 => ABOVE_THE_BREAK_3,
        }
    }

    /// (action label, weight) pairs for `ACTION_TYPE`
    pub fn actions(self) -> ActionTable {
        match self {
            ShotZone::RestrictedArea => RESTRICTED_AREA_ACTIONS,
            ShotZone::InThePaint => IN_THE_PAINT_ACTIONS,
            ShotZone::MidRange => MID_RANGE_ACTIONS,
            ShotZone::LeftCorner3 | ShotZone::RightCorner3 => CORNER_3_ACTIONS,
            ShotZone::AboveTheBreak3 => ABOVE_THE_BREAK_3_ACTIONS,
        }
    }

    /// `SHOT_ZONE_AREA` for a shot at `loc_x`. Corners ignore the x thresholds.
    pub fn area(self, loc_x: i32) -> ShotArea {
        match self {
            ShotZone::LeftCorner3 => ShotArea::LeftSide,
            ShotZone::RightCorner3 => ShotArea::RightSide,
            _ => {
                let abs_x = loc_x.abs();
                if abs_x <= CENTER_MAX_ABS_X {
                    ShotArea::Center
                } else if loc_x < 0 {
                    if abs_x > SIDE_MIN_ABS_X {
                        ShotArea::LeftSide
                    } else {
                        ShotArea::LeftSideCenter
                    }
                } else if abs_x > SIDE_MIN_ABS_X {
                    ShotArea::RightSide
                } else {
                    ShotArea::RightSideCenter
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_thresholds() {
        let zone = ShotZone::MidRange;
        assert_eq!(zone.area(0), ShotArea::Center);
        assert_eq!(zone.area(60), ShotArea::Center);
        assert_eq!(zone.area(-60), ShotArea::Center);
        assert_eq!(zone.area(61), ShotArea::RightSideCenter);
        assert_eq!(zone.area(-61), ShotArea::LeftSideCenter);
        assert_eq!(zone.area(150), ShotArea::RightSideCenter);
        assert_eq!(zone.area(-150), ShotArea::LeftSideCenter);
        assert_eq!(zone.area(151), ShotArea::RightSide);
        assert_eq!(zone.area(-151), ShotArea::LeftSide);
    }

    #[test]
    fn test_corners_ignore_thresholds() {
        for x in [-245, -200, 0, 200, 245] {
            assert_eq!(ShotZone::LeftCorner3.area(x), ShotArea::LeftSide);
            assert_eq!(ShotZone::RightCorner3.area(x), ShotArea::RightSide);
        }
    }

    #[test]
    fn test_shot_types() {
        assert_eq!(ShotZone::RestrictedArea.shot_type(), ShotType::TwoPoint);
        assert_eq!(ShotZone::MidRange.shot_type(), ShotType::TwoPoint);
        assert_eq!(ShotZone::LeftCorner3.shot_type(), ShotType::ThreePoint);
        assert_eq!(ShotZone::AboveTheBreak3.shot_type(), ShotType::ThreePoint);
    }

    #[test]
    fn test_action_tables_have_weight() {
        for zone in ShotZone::ALL {
            let total: u32 = zone.actions().iter().map(|(_, w)| w).sum();
            assert_eq!(total, 100, "{} weights should sum to 100", zone.label());
        }
    }

    #[test]
    fn test_base_ranges_sit_inside_clamp_bounds() {
        for zone in ShotZone::ALL {
            if let ZoneEnvelope::Rect(rect) = zone.envelope() {
                assert!(rect.clamp_x.min <= rect.base_x.min && rect.base_x.max <= rect.clamp_x.max);
                assert!(rect.clamp_y.min <= rect.base_y.min && rect.base_y.max <= rect.clamp_y.max);
            }
        }
    }

    #[test]
    fn test_zone_labels_serialize_verbatim() {
        for zone in ShotZone::ALL {
            let json = serde_json::to_value(zone).unwrap();
            assert_eq!(json, zone.label());
        }
        for area in [ShotArea::Center, ShotArea::LeftSide, ShotArea::RightSideCenter] {
            assert_eq!(serde_json::to_value(area).unwrap(), area.label());
        }
        assert_eq!(serde_json::to_value(ShotType::ThreePoint).unwrap(), "3PT Field Goal");
    }
}
