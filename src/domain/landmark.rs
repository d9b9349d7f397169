//! Landmark model for the 33-point BlazePose schema

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use crate::error::{PostureError, Result};

/// Minimum confidence for a landmark to be drawn or picked
pub const CONFIDENCE_THRESHOLD: f32 = 0.65;

/// Schema indices that are always forced to zero confidence.
///
/// Face detail, hand detail and the nose are never drawn or draggable on the
/// posture overlay.
pub const SUPPRESSED_LANDMARKS: [usize; 15] = [0, 1, 2, 3, 4, 5, 6, 9, 10, 17, 18, 19, 20, 21, 22];

/// BlazePose landmark schema indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

/// Anatomical side of a landmark, used to pick its keypoint color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Middle,
    Left,
    Right,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    const ALL: [LandmarkIndex; Self::COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Anatomical side. Past the eyes, odd indices are left and even are right;
    /// the nose is the only middle point.
    pub fn side(self) -> Side {
        match self {
            Self::Nose => Side::Middle,
            Self::LeftEyeInner | Self::LeftEye | Self::LeftEyeOuter => Side::Left,
            Self::RightEyeInner | Self::RightEye | Self::RightEyeOuter => Side::Right,
            other if (other as usize) % 2 == 1 => Side::Left,
            _ => Side::Right,
        }
    }
}

/// A single scored landmark. `id` is its schema index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

impl Landmark {
    pub fn new(id: usize, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            id,
            x,
            y,
            confidence,
        }
    }

    /// Whether the confidence meets the threshold (inclusive)
    pub fn is_valid(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The full fixed-schema landmark collection for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Build a set from detector output, checking length and schema order
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() != LandmarkIndex::COUNT {
            return Err(PostureError::LandmarkCount {
                expected: LandmarkIndex::COUNT,
                actual: landmarks.len(),
            });
        }
        if let Some((position, lm)) = landmarks.iter().enumerate().find(|(i, lm)| lm.id != *i) {
            return Err(PostureError::LandmarkOrder {
                position,
                id: lm.id,
            });
        }
        Ok(Self { landmarks })
    }

    /// Build a set from positional `(x, y, confidence)` triples in schema order
    pub fn from_triples(points: &[(f32, f32, f32)]) -> Result<Self> {
        Self::from_landmarks(
            points
                .iter()
                .enumerate()
                .map(|(id, &(x, y, confidence))| Landmark::new(id, x, y, confidence))
                .collect(),
        )
    }

    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }

    pub fn by_id(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// Move a landmark. Returns false if `id` is outside the schema.
    pub fn set_position(&mut self, id: usize, position: Point) -> bool {
        match self.landmarks.get_mut(id) {
            Some(lm) => {
                lm.x = position.x;
                lm.y = position.y;
                true
            }
            None => false,
        }
    }

    /// Force the listed schema indices to zero confidence
    pub fn suppress(&mut self, ids: &[usize]) {
        for &id in ids {
            if let Some(lm) = self.landmarks.get_mut(id) {
                lm.confidence = 0.0;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = PostureError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::from_landmarks(landmarks)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.landmarks
    }
}
