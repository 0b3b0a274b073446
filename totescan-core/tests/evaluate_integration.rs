//! Integration tests for the evaluation pipeline
//!
//! Feeds synthetic frames through `evaluate` and `VisionLoop` and checks the
//! tote call, orientation and range against the geometry they were rendered
//! from.

mod common;

use totescan_core::{
    evaluate, rank, BoundingRect, CameraModel, ClassificationResult, ConfigError, Frame,
    MemorySource, ParticleMeasurement, SourceError, TargetFace, VisionConfig, VisionLoop,
};
use totescan_core::pipeline::LoopError;

use common::{
    assert_close,
    scenarios::{Scenarios, TestScenario},
    ToteGenerator, IMAGE_WIDTH_PX,
};

fn run_scenario(scenario: &TestScenario, config: &VisionConfig) -> Vec<ClassificationResult> {
    let mut vision = VisionLoop::new(MemorySource::new(&scenario.frames));
    let mut results = Vec::new();

    loop {
        match vision.tick(config) {
            Ok(result) => results.push(result),
            Err(nb::Error::Other(LoopError::Source(SourceError::EndOfStream))) => break,
            Err(e) => panic!("{}: unexpected error {:?}", scenario.name, e),
        }
    }
    results
}

#[test]
fn test_range_recovered_for_rendered_totes() {
    let config = VisionConfig::default();
    let generator = ToteGenerator::new(config);

    for face in [TargetFace::Long, TargetFace::Short] {
        for distance_ft in [3.0, 5.0, 7.5] {
            let particle = generator.centered_tote(face, distance_ft);
            let result = evaluate(&[particle], IMAGE_WIDTH_PX, &config).unwrap();

            assert!(result.is_target, "{:?} at {} ft", face, distance_ft);
            assert_eq!(result.is_long, face == TargetFace::Long);
            assert_close(result.distance_ft.unwrap(), distance_ft, 1e-9);
        }
    }
}

#[test]
fn test_range_with_other_cameras() {
    for camera in [CameraModel::AxisM1013, CameraModel::LifeCamHd3000Wide] {
        let config = VisionConfig::for_camera(camera);
        let generator = ToteGenerator::new(config).with_resolution(640, 480);
        let particle = generator.centered_tote(TargetFace::Long, 6.0);

        let result = evaluate(&[particle], 640, &config).unwrap();
        assert!(result.is_target, "{:?}", camera);
        assert_close(result.distance_ft.unwrap(), 6.0, 1e-9);
    }
}

#[test]
fn test_wrong_camera_angle_skews_range() {
    // Rendered for a 64° camera but scored as if it were the 49.4° default
    let rendered_with = VisionConfig::for_camera(CameraModel::AxisM1013);
    let particle = ToteGenerator::new(rendered_with).centered_tote(TargetFace::Long, 6.0);

    let result = evaluate(&[particle], IMAGE_WIDTH_PX, &VisionConfig::default()).unwrap();
    assert!(result.distance_ft.unwrap() > 6.5);
}

#[test]
fn test_far_tote_below_area_minimum() {
    let config = VisionConfig::default();
    let particle = ToteGenerator::new(config).centered_tote(TargetFace::Long, 15.0);
    assert!(particle.percent_area < config.area_minimum_percent);

    let result = evaluate(&[particle], IMAGE_WIDTH_PX, &config).unwrap();
    assert!(!result.is_target);
    assert_eq!(result.candidate_count, 0);
    assert_eq!(result.distance_ft, None);

    let relaxed = VisionConfig { area_minimum_percent: 0.5, ..config };
    let result = evaluate(&[particle], IMAGE_WIDTH_PX, &relaxed).unwrap();
    assert!(result.is_target);
    assert_close(result.distance_ft.unwrap(), 15.0, 1e-9);
}

#[test]
fn test_corrupt_measurements_never_outrank_a_tote() {
    let config = VisionConfig::default();
    let tote = ToteGenerator::new(config).centered_tote(TargetFace::Long, 5.0);

    let mut oversized = tote;
    oversized.percent_area = 150.0;
    let mut unbounded = tote;
    unbounded.percent_area = f64::INFINITY;
    let mut hollow = tote;
    hollow.percent_area = 60.0;
    hollow.convex_hull_area = f64::NAN;

    let result =
        evaluate(&[oversized, unbounded, hollow, tote], IMAGE_WIDTH_PX, &config).unwrap();
    assert_eq!(result.particle_count, 4);
    assert_eq!(result.candidate_count, 1);
    assert_eq!(result.primary, Some(tote));
    assert!(result.is_target);
    assert_close(result.distance_ft.unwrap(), 5.0, 1e-9);
}

#[test]
fn test_ragged_detection_fails_hull_fill() {
    let config = VisionConfig::default();
    let generator = ToteGenerator::new(config);
    // Only half the hull lit: lots of holes
    let particle = generator.tote(TargetFace::Long, 5.0, 160.0, 0.5);

    let result = evaluate(&[particle], IMAGE_WIDTH_PX, &config).unwrap();
    let scores = result.scores.unwrap();
    assert!(scores.hull_fill < config.score_minimum);
    assert!(scores.trapezoid > config.score_minimum);
    assert!(!result.is_target);
}

#[test]
fn test_aim_offset_tracks_horizontal_position() {
    let config = VisionConfig::default();
    let generator = ToteGenerator::new(config);

    let left = generator.tote(TargetFace::Long, 8.0, 80.0, 1.0 / 1.18);
    let right = generator.tote(TargetFace::Long, 8.0, 240.0, 1.0 / 1.18);

    let left = evaluate(&[left], IMAGE_WIDTH_PX, &config).unwrap();
    let right = evaluate(&[right], IMAGE_WIDTH_PX, &config).unwrap();
    assert_close(left.aim_offset.unwrap(), -0.5, 1e-9);
    assert_close(right.aim_offset.unwrap(), 0.5, 1e-9);

    // Position does not change the range
    assert_close(left.distance_ft.unwrap(), right.distance_ft.unwrap(), 1e-9);
}

#[test]
fn test_largest_particle_wins_over_better_shape() {
    let config = VisionConfig::default();
    let generator = ToteGenerator::new(config);

    let tote = generator.centered_tote(TargetFace::Short, 6.0);
    let blob = generator.square_blob(120.0, 10.0);
    assert!(blob.percent_area > tote.percent_area);

    let result = evaluate(&[tote, blob], IMAGE_WIDTH_PX, &config).unwrap();
    assert_eq!(result.primary, Some(blob));
    assert!(!result.is_target);
}

#[test]
fn test_evaluate_matches_ranking() {
    let config = VisionConfig { area_minimum_percent: 0.0, ..VisionConfig::default() };
    let generator = ToteGenerator::new(config);
    let particles = [
        generator.stripe(100.0),
        generator.centered_tote(TargetFace::Long, 7.0),
        generator.square_blob(40.0, 0.0),
    ];

    let ranking = rank(&particles).unwrap();
    let result = evaluate(&particles, IMAGE_WIDTH_PX, &config).unwrap();
    assert_eq!(result.primary.as_ref(), Some(ranking.primary()));
    assert_eq!(result.candidate_count, 3);
}

#[test]
fn test_degenerate_particle_classifies_without_fault() {
    let particle = ParticleMeasurement::new(
        10.0,
        500.0,
        0.0,
        BoundingRect::new(40.0, 40.0, 40.0, 40.0),
    );
    let result = evaluate(&[particle], IMAGE_WIDTH_PX, &VisionConfig::default()).unwrap();

    let scores = result.scores.unwrap();
    assert_eq!(scores.hull_fill, 0.0);
    assert_eq!(scores.trapezoid, 0.0);
    assert_eq!(scores.long_aspect, 0.0);
    assert_eq!(scores.short_aspect, 0.0);
    assert!(!result.is_target);
    assert_eq!(result.distance_ft, None);
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let config = VisionConfig::default();
    let particle = ToteGenerator::new(config).centered_tote(TargetFace::Long, 5.0);

    let first = evaluate(&[particle], IMAGE_WIDTH_PX, &config).unwrap();
    let second = evaluate(&[particle], IMAGE_WIDTH_PX, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_config_error_before_any_scoring() {
    let config = VisionConfig { short_ratio: 0.0, ..VisionConfig::default() };

    // Rejected even when there is nothing to score
    assert_eq!(
        evaluate(&[], IMAGE_WIDTH_PX, &config),
        Err(ConfigError::NotPositive { parameter: "short_ratio", value: 0.0 })
    );
}

#[test]
fn test_approach_scenario() {
    let config = VisionConfig::default();
    let scenario = Scenarios::approach_long_face(config);
    let results = run_scenario(&scenario, &config);

    assert_eq!(results.len(), scenario.frames.len());
    let calls: Vec<bool> = results.iter().map(|r| r.is_target).collect();
    assert_eq!(calls, scenario.expected_targets);

    // Range shrinks as the robot closes in
    let ranges: Vec<f64> = results.iter().map(|r| r.distance_ft.unwrap()).collect();
    assert!(ranges.windows(2).all(|w| w[1] < w[0]), "{:?}", ranges);
}

#[test]
fn test_intermittent_scenario() {
    let config = VisionConfig::default();
    let scenario = Scenarios::intermittent_view(config);
    let results = run_scenario(&scenario, &config);

    let calls: Vec<bool> = results.iter().map(|r| r.is_target).collect();
    assert_eq!(calls, scenario.expected_targets);

    // Blocked frame: nothing measured, nothing estimated
    assert_eq!(results[1].particle_count, 0);
    assert_eq!(results[1].distance_ft, None);

    // Stripe filtered out, tote still found
    assert_eq!(results[3].particle_count, 2);
    assert_eq!(results[3].candidate_count, 1);
    assert!(results[3].is_long);
}

#[test]
fn test_loop_surfaces_would_block() {
    struct Idle;

    impl totescan_core::ParticleSource for Idle {
        type Error = SourceError<&'static str>;

        fn poll_frame(&mut self) -> nb::Result<Frame, Self::Error> {
            Err(nb::Error::WouldBlock)
        }
    }

    let mut vision = VisionLoop::new(Idle);
    assert!(matches!(vision.tick(&VisionConfig::default()), Err(nb::Error::WouldBlock)));
}

#[test]
fn test_loop_surfaces_transport_errors() {
    struct Unplugged;

    impl totescan_core::ParticleSource for Unplugged {
        type Error = SourceError<&'static str>;

        fn poll_frame(&mut self) -> nb::Result<Frame, Self::Error> {
            Err(nb::Error::Other(SourceError::Transport("camera unplugged")))
        }
    }

    let mut vision = VisionLoop::new(Unplugged);
    let err = vision.tick(&VisionConfig::default()).unwrap_err();
    match err {
        nb::Error::Other(e) => {
            assert_eq!(format!("{}", e), "Source error: Transport error: camera unplugged")
        }
        nb::Error::WouldBlock => panic!("expected a transport error"),
    }
}
