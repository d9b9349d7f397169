//! Tilt measurement types

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::landmark::LandmarkIndex;

/// Left/right landmark pairs measured for the posture report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TiltKind {
    HeadTilt,
    ShoulderTilt,
    PelvicTilt,
    KneeTilt,
}

impl TiltKind {
    /// Report order
    pub const ALL: [TiltKind; 4] = [
        TiltKind::HeadTilt,
        TiltKind::ShoulderTilt,
        TiltKind::PelvicTilt,
        TiltKind::KneeTilt,
    ];

    /// The (left, right) landmarks this tilt is measured between
    pub fn landmarks(self) -> (LandmarkIndex, LandmarkIndex) {
        match self {
            TiltKind::HeadTilt => (LandmarkIndex::LeftEar, LandmarkIndex::RightEar),
            TiltKind::ShoulderTilt => (LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder),
            TiltKind::PelvicTilt => (LandmarkIndex::LeftHip, LandmarkIndex::RightHip),
            TiltKind::KneeTilt => (LandmarkIndex::LeftKnee, LandmarkIndex::RightKnee),
        }
    }

    /// Label printed in the report table
    pub fn label(self) -> &'static str {
        match self {
            TiltKind::HeadTilt => "Head Tilt",
            TiltKind::ShoulderTilt => "Shoulder Alignment",
            TiltKind::PelvicTilt => "Pelvic Tilt",
            TiltKind::KneeTilt => "Knee Tilt",
        }
    }
}

/// One derived tilt angle with the points that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltMeasurement {
    pub kind: TiltKind,
    /// Angle in degrees, rounded to two decimals
    pub angle_degrees: f64,
    /// Angle in radians at full precision
    pub angle_radians: f64,
    /// Where the angle is measured (the left landmark)
    pub vertex: Point,
    /// The right landmark
    pub right: Point,
    /// Constructed horizontal reference point, level with the vertex
    pub reference: Point,
}
