//! Headless turntable demo
//!
//! Builds a small showroom scene, schedules a full 360° turn, and runs a
//! fixed-timestep loop, logging the applied pose as it sweeps. Shows the
//! obstruction pull-in shortening the orbit when the camera passes the
//! back wall.

use orbitview::{AppConfig, Collider, CollisionLayer, InputSnapshot, Vec3, Viewer};
use orbitview_scene::{Aabb, Plane};

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::new()
        .parse_filters(&config.debug.log_level)
        .parse_default_env()
        .init();

    let mut config = config;
    config.camera.collision = true;

    let mut viewer = Viewer::new(&config);
    viewer.camera.set_center(Vec3::ZERO, true);

    // Showroom: a floor and a wall close behind the subject
    viewer.scene.insert(
        Collider::Plane(Plane::floor(-1.0)),
        CollisionLayer::STATIC,
    );
    viewer.scene.insert(
        Collider::Aabb(Aabb::from_center_half_extents(
            Vec3::new(0.0, 1.0, 6.0),
            Vec3::new(10.0, 3.0, 0.5),
        )),
        CollisionLayer::STATIC,
    );

    viewer.camera.start_full_turn(true, Some(6.0));
    log::info!("starting 6s turntable sweep");

    let dt = 1.0 / 60.0;
    let interval = config.debug.log_interval_frames.max(1);
    let mut frame = 0u32;
    while viewer.camera.pending_turn_degrees() > 0.0 {
        let out = viewer.update(dt, &InputSnapshot::IDLE);
        if frame % interval == 0 {
            if let Some(pose) = out.pose {
                log::info!(
                    "yaw {:6.1}°  pos ({:6.2}, {:5.2}, {:6.2})  dist {:5.2}",
                    viewer.camera.yaw(),
                    pose.position.x,
                    pose.position.y,
                    pose.position.z,
                    pose.position.distance(Vec3::ZERO),
                );
            }
        }
        frame += 1;
    }

    log::info!("sweep complete after {} frames; fading out", frame);

    viewer.fade.start();
    while !viewer.fade.is_hidden() {
        let out = viewer.update(dt, &InputSnapshot::IDLE);
        frame += 1;
        if frame % interval == 0 {
            log::info!("overlay alpha {:.2}", out.overlay_alpha);
        }
    }

    log::info!("done");
}
