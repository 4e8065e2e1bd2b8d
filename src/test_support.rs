//=========================================================================
// Test Support
//=========================================================================
//
// Shared fixtures for unit tests:
// - `Probe`: interactable that counts its interactions
// - `RecordingDraw`: debug-draw sink that records rays
// - log capture: a `log::Log` that buffers records per test thread
//
//=========================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use glam::Vec3;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::core::interaction::{interactable, DebugColor, DebugDraw, Interactable, InteractableRef};

//=== Probe ===============================================================

pub(crate) struct Probe {
    calls: Rc<Cell<usize>>,
    position: Vec3,
}

impl Probe {
    /// Returns an interactable at `position` and its interaction counter.
    pub(crate) fn at(position: Vec3) -> (InteractableRef, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let probe = interactable(Probe {
            calls: Rc::clone(&calls),
            position,
        });
        (probe, calls)
    }
}

impl Interactable for Probe {
    fn interact(&mut self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn name(&self) -> &str {
        "probe"
    }
}

//=== RecordingDraw =======================================================

pub(crate) type RecordedRays = Rc<RefCell<Vec<(Vec3, Vec3, DebugColor)>>>;

pub(crate) struct RecordingDraw {
    rays: RecordedRays,
}

impl RecordingDraw {
    pub(crate) fn new() -> (Self, RecordedRays) {
        let rays = RecordedRays::default();
        (Self { rays: Rc::clone(&rays) }, rays)
    }
}

impl DebugDraw for RecordingDraw {
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, color: DebugColor) {
        self.rays.borrow_mut().push((origin, direction, color));
    }
}

//=== Log Capture =========================================================

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let _ = CAPTURED.try_with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per process) and clears this
/// thread's buffer.
pub(crate) fn capture_logs() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

/// Returns the records captured on this thread at `Info` or above and
/// clears the buffer.
pub(crate) fn take_logs() -> Vec<(Level, String)> {
    CAPTURED.with(|captured| {
        captured
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level <= Level::Info)
            .collect()
    })
}

/// Counts captured records on this thread whose message equals `message`.
pub(crate) fn count_logs(message: &str) -> usize {
    CAPTURED.with(|captured| {
        captured
            .borrow()
            .iter()
            .filter(|(_, text)| text == message)
            .count()
    })
}
