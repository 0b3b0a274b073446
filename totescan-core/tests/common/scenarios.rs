//! Recorded-style frame sequences for replay tests

use totescan_core::{Frame, TargetFace, VisionConfig};

use super::{ToteGenerator, IMAGE_WIDTH_PX};

/// A named sequence of frames with the expected tote call per frame
pub struct TestScenario {
    pub name: &'static str,
    pub frames: Vec<Frame>,
    pub expected_targets: Vec<bool>,
}

/// Pre-built scenarios
pub struct Scenarios;

impl Scenarios {
    /// Robot drives straight at a long-face tote from 10 ft to 4 ft
    pub fn approach_long_face(config: VisionConfig) -> TestScenario {
        let generator = ToteGenerator::new(config);
        let frames: Vec<Frame> = [10.0, 8.0, 6.0, 4.0]
            .iter()
            .map(|&d| {
                Frame::new(IMAGE_WIDTH_PX, vec![generator.centered_tote(TargetFace::Long, d)])
            })
            .collect();
        let expected_targets = vec![true; frames.len()];

        TestScenario { name: "approach_long_face", frames, expected_targets }
    }

    /// Tote in view, camera blocked for a frame, clutter only, tote again
    pub fn intermittent_view(config: VisionConfig) -> TestScenario {
        let generator = ToteGenerator::new(config);
        let frames = vec![
            Frame::new(IMAGE_WIDTH_PX, vec![generator.centered_tote(TargetFace::Short, 6.0)]),
            Frame::new(IMAGE_WIDTH_PX, vec![]),
            Frame::new(
                IMAGE_WIDTH_PX,
                vec![generator.square_blob(80.0, 20.0), generator.stripe(300.0)],
            ),
            Frame::new(
                IMAGE_WIDTH_PX,
                vec![generator.stripe(120.0), generator.centered_tote(TargetFace::Long, 5.0)],
            ),
        ];

        TestScenario {
            name: "intermittent_view",
            frames,
            expected_targets: vec![true, false, false, true],
        }
    }
}
