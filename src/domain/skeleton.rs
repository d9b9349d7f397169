//! Static skeleton link tables

use super::landmark::LandmarkIndex::{self, *};

/// Unordered pair of landmarks drawn as a skeleton edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnatomicalLink(pub LandmarkIndex, pub LandmarkIndex);

/// Full BlazePose adjacency, used by the live overlay
pub const BLAZEPOSE_LINKS: [AnatomicalLink; 35] = [
    AnatomicalLink(Nose, LeftEyeInner),
    AnatomicalLink(Nose, RightEyeInner),
    AnatomicalLink(LeftEyeInner, LeftEye),
    AnatomicalLink(LeftEye, LeftEyeOuter),
    AnatomicalLink(LeftEyeOuter, LeftEar),
    AnatomicalLink(RightEyeInner, RightEye),
    AnatomicalLink(RightEye, RightEyeOuter),
    AnatomicalLink(RightEyeOuter, RightEar),
    AnatomicalLink(MouthLeft, MouthRight),
    AnatomicalLink(LeftShoulder, RightShoulder),
    AnatomicalLink(LeftShoulder, LeftElbow),
    AnatomicalLink(LeftShoulder, LeftHip),
    AnatomicalLink(RightShoulder, RightElbow),
    AnatomicalLink(RightElbow, RightWrist),
    AnatomicalLink(RightShoulder, RightHip),
    AnatomicalLink(LeftElbow, LeftWrist),
    AnatomicalLink(LeftWrist, LeftPinky),
    AnatomicalLink(RightWrist, RightPinky),
    AnatomicalLink(RightWrist, RightIndex),
    AnatomicalLink(LeftWrist, LeftIndex),
    AnatomicalLink(LeftWrist, LeftThumb),
    AnatomicalLink(RightWrist, RightThumb),
    AnatomicalLink(LeftPinky, LeftIndex),
    AnatomicalLink(RightPinky, RightIndex),
    AnatomicalLink(LeftHip, LeftKnee),
    AnatomicalLink(LeftHip, RightHip),
    AnatomicalLink(RightHip, RightKnee),
    AnatomicalLink(LeftKnee, LeftAnkle),
    AnatomicalLink(RightKnee, RightAnkle),
    AnatomicalLink(LeftAnkle, LeftHeel),
    AnatomicalLink(RightAnkle, RightHeel),
    AnatomicalLink(LeftAnkle, LeftFootIndex),
    AnatomicalLink(RightAnkle, RightFootIndex),
    AnatomicalLink(LeftHeel, LeftFootIndex),
    AnatomicalLink(RightHeel, RightFootIndex),
];

/// Posture skeleton drawn when the operator confirms a corrected set.
/// Adds the cross-body ear, knee, ankle and foot links.
pub const POSTURE_LINKS: [AnatomicalLink; 20] = [
    AnatomicalLink(LeftEar, RightEar),
    AnatomicalLink(LeftShoulder, RightShoulder),
    AnatomicalLink(LeftShoulder, LeftElbow),
    AnatomicalLink(RightShoulder, RightElbow),
    AnatomicalLink(LeftElbow, LeftWrist),
    AnatomicalLink(RightElbow, RightWrist),
    AnatomicalLink(LeftShoulder, LeftHip),
    AnatomicalLink(RightShoulder, RightHip),
    AnatomicalLink(LeftHip, RightHip),
    AnatomicalLink(LeftHip, LeftKnee),
    AnatomicalLink(RightHip, RightKnee),
    AnatomicalLink(LeftKnee, LeftAnkle),
    AnatomicalLink(RightKnee, RightAnkle),
    AnatomicalLink(LeftKnee, RightKnee),
    AnatomicalLink(LeftAnkle, RightAnkle),
    AnatomicalLink(LeftAnkle, LeftFootIndex),
    AnatomicalLink(LeftAnkle, LeftHeel),
    AnatomicalLink(RightAnkle, RightFootIndex),
    AnatomicalLink(RightAnkle, RightHeel),
    AnatomicalLink(LeftFootIndex, RightFootIndex),
];
