//! Score a Single Frame
//!
//! Runs the scoring core on hand-written particle measurements, the way the
//! robot does once per control tick after the camera stage has measured a
//! frame.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_score_frame
//! ```

use totescan_core::{evaluate, BoundingRect, CameraModel, ParticleMeasurement, VisionConfig};

fn main() {
    println!("Totescan Frame Scoring Example");
    println!("==============================\n");

    let config = VisionConfig::for_camera(CameraModel::AxisM1011);
    let image_width_px = 320;

    // Three regions from one 320x240 frame, in detection order
    let particles = [
        // Floor tape: long and thin, under the area minimum
        ParticleMeasurement::new(
            1.2,
            920.0,
            960.0,
            BoundingRect::new(200.0, 10.0, 204.0, 250.0),
        ),
        // Long face of a tote, roughly 5 ft away
        ParticleMeasurement::new(
            11.4,
            8_760.0,
            10_340.0,
            BoundingRect::new(85.0, 82.0, 155.0, 238.0),
        ),
        // Something square and yellow in the background
        ParticleMeasurement::new(
            3.1,
            2_380.0,
            2_400.0,
            BoundingRect::new(30.0, 270.0, 79.0, 319.0),
        ),
    ];

    let result = match evaluate(&particles, image_width_px, &config) {
        Ok(result) => result,
        Err(e) => {
            println!("Configuration rejected: {}", e);
            return;
        }
    };

    println!("Particles measured: {}", result.particle_count);
    println!("Above {}% area:      {}", config.area_minimum_percent, result.candidate_count);

    if let Some(scores) = result.scores {
        println!("\nPrimary candidate scores:");
        println!("  Trapezoid:    {:6.1}", scores.trapezoid);
        println!("  Long aspect:  {:6.1}", scores.long_aspect);
        println!("  Short aspect: {:6.1}", scores.short_aspect);
        println!("  Hull fill:    {:6.1}", scores.hull_fill);
    }

    println!("\nIs tote: {}", result.is_target);
    println!("Face:    {}", if result.is_long { "long" } else { "short" });
    match result.distance_ft {
        Some(distance) => println!("Range:   {:.2} ft", distance),
        None => println!("Range:   undefined"),
    }
    if let Some(offset) = result.aim_offset {
        println!("Aim:     {:+.2}", offset);
    }
}
