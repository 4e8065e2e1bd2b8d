//=========================================================================
// Interact Demo
//
// Drives a dispatcher over a handful of scripted frames:
//   frame 1: player looks at the door, presses E      → door toggles
//   frame 2: E still held                             → nothing
//   frame 3: comparative detector reports no target   → log line on click
//   frame 4: primary detector picks the chest, click  → chest opens
//
// Run with:
//   RUST_LOG=debug cargo run --example interact_demo
//
//=========================================================================

use aetheric_interaction::prelude::*;
use log::info;

//=== Scene Objects =======================================================

struct Door {
    open: bool,
    at: Vec3,
}

impl Interactable for Door {
    fn interact(&mut self) {
        self.open = !self.open;
        info!("Door is now {}", if self.open { "open" } else { "closed" });
    }

    fn position(&self) -> Vec3 {
        self.at
    }

    fn name(&self) -> &str {
        "door"
    }
}

struct Chest {
    at: Vec3,
}

impl Interactable for Chest {
    fn interact(&mut self) {
        info!("Chest opened");
    }

    fn position(&self) -> Vec3 {
        self.at
    }

    fn name(&self) -> &str {
        "chest"
    }
}

//=== Debug Overlay =======================================================

struct ConsoleRays;

impl DebugDraw for ConsoleRays {
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, _color: DebugColor) {
        log::debug!("ray {} → {}", origin, origin + direction);
    }
}

//=== Entry Point =========================================================

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = InteractionConfig::from_toml_str(
        r#"
        [input]
        bindings = ["KeyE", "MouseLeft"]
        "#,
    )?;

    let channels = DetectorChannels::new();

    let mut input = InputSystem::new();
    input.bind_from_config(&config, InteractAction::Interact);

    let mut dispatcher = InteractionDispatcher::from_config(InteractAction::Interact, &config)
        .listen_to_detectors(&channels)
        .with_origin(Vec3::new(0.0, 1.7, 0.0))
        .with_debug_draw(ConsoleRays);
    dispatcher.activate();

    let door = interactable(Door {
        open: false,
        at: Vec3::new(0.0, 1.0, 3.0),
    });
    let chest = interactable(Chest {
        at: Vec3::new(2.0, 0.5, 2.0),
    });

    let mut primary = TargetPublisher::new(channels.primary.clone());

    //--- Frame 1 ---------------------------------------------------------
    primary.publish(Some(&door));
    input.process_frame(&[InputEvent::KeyDown(KeyCode::KeyE)]);
    info!("frame 1: {:?}", dispatcher.on_frame_update(&input));

    //--- Frame 2 ---------------------------------------------------------
    primary.publish(Some(&door));
    input.process_frame(&[]);
    info!("frame 2: {:?}", dispatcher.on_frame_update(&input));

    //--- Frame 3 ---------------------------------------------------------
    channels.comparative.notify(None);
    input.process_frame(&[
        InputEvent::KeyUp(KeyCode::KeyE),
        InputEvent::MouseButtonDown(MouseButton::Left),
    ]);
    info!("frame 3: {:?}", dispatcher.on_frame_update(&input));

    //--- Frame 4 ---------------------------------------------------------
    primary.publish(Some(&chest));
    input.process_frame(&[
        InputEvent::MouseButtonUp(MouseButton::Left),
        InputEvent::MouseButtonDown(MouseButton::Left),
    ]);
    info!("frame 4: {:?}", dispatcher.on_frame_update(&input));

    dispatcher.deactivate();
    Ok(())
}
