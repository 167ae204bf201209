use three_d::*;

use crate::animation::RotationState;
use crate::config::SceneConfig;
use crate::log;
use crate::scene::{Lighting, TesseractScene};

/// Opens the window, builds the scene once, then hands control to the
/// library's render loop. Never returns on the web target. Environment
/// failures (no canvas, no WebGL2) abort startup; there is no degraded
/// mode.
pub fn main(config: SceneConfig) {
    let window = Window::new(WindowSettings {
        title: "Tesserax".to_string(),
        max_size: Some((1280, 720)),
        ..Default::default()
    })
    .expect("renderer::main(): failed to create window");
    let context = window.gl();

    let mut camera = Camera::new_perspective(
        window.viewport(),
        config.camera_position.into(),
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(config.fov_degrees),
        config.z_near,
        config.z_far,
    );

    let mut scene = TesseractScene::new(&context, &config)
        .expect("renderer::main(): degenerate edge in cube geometry");
    let lighting = Lighting::new(&context);

    let mut state = RotationState::default();
    let step = config.rotation_step;
    let [r, g, b, a] = config.background;

    log!("renderer::main(): scene built, entering render loop");

    window.render_loop(move |frame_input| {
        // Viewport tracking doubles as resize handling.
        camera.set_viewport(frame_input.viewport);

        state = state.advance(step);
        scene.apply_rotation(&state);

        frame_input
            .screen()
            .clear(ClearState::color_and_depth(r, g, b, a, 1.0))
            .render(&camera, scene.objects(), &lighting.lights());

        FrameOutput::default()
    });
}
