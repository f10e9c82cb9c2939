//! Headless scrubber demo
//!
//! Feeds the turntable scrubber a scripted mix of drags and scroll
//! notches, logs which pre-rendered frame would be shown each step, and
//! fades the help overlay out once the user starts scrubbing.

use orbitview::{AppConfig, FadePanel, InputSnapshot, TurntableScrubber};

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::new()
        .parse_filters(&config.debug.log_level)
        .parse_default_env()
        .init();

    let mut scrubber = TurntableScrubber::new(config.scrubber.clone());
    let mut help_overlay = FadePanel::new(config.fade.clone());
    let dt = 1.0 / 60.0;

    // A slow right drag, three scroll notches back, then a fast left flick
    let script: Vec<(u32, InputSnapshot)> = vec![
        (90, InputSnapshot::orbit_drag(1.5, 0.0)),
        (1, InputSnapshot::scrolled(-3.0)),
        (30, InputSnapshot::orbit_drag(-6.0, 0.0)),
        (60, InputSnapshot::IDLE),
    ];

    let mut last_frame = usize::MAX;
    let mut started = false;
    for (ticks, input) in script {
        for _ in 0..ticks {
            // First interaction dismisses the "drag to rotate" overlay
            if !started && (input.orbit_held || input.scroll != 0.0) {
                help_overlay.start();
                started = true;
            }

            let frame = scrubber.update(dt, &input);
            let alpha = help_overlay.update(dt);
            if frame != last_frame {
                log::info!(
                    "angle {:6.1}° -> frame {:2}  (overlay {:.2})",
                    scrubber.angle(),
                    frame,
                    alpha
                );
                last_frame = frame;
            }
        }
    }

    log::info!(
        "final frame: {}  overlay hidden: {}",
        scrubber.frame_index(),
        help_overlay.is_hidden()
    );
}
