//! Progress reporting for the splash installed by `index.html` as
//! `window.__FOLIO_BOOT`. Stages only move forward; repeated or earlier
//! stages are ignored. Without the splash object every call is a no-op.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum BootStage {
    Config,
    Mount,
    Theme,
    Reveal,
    Ready,
}

impl BootStage {
    fn label(self) -> &'static str {
        match self {
            BootStage::Config => "Loading settings",
            BootStage::Mount => "Rendering",
            BootStage::Theme => "Applying theme",
            BootStage::Reveal => "Preparing animations",
            BootStage::Ready => "Ready",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            BootStage::Config => "Reading build-time overrides",
            BootStage::Mount => "Mounting page",
            BootStage::Theme => "Restoring saved preference",
            BootStage::Reveal => "Arming section reveals",
            BootStage::Ready => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootFailure {
    NoWindow,
    NoRoot,
}

impl BootFailure {
    fn code(self) -> &'static str {
        match self {
            BootFailure::NoWindow => "no-window",
            BootFailure::NoRoot => "no-root",
        }
    }

    fn message(self) -> &'static str {
        match self {
            BootFailure::NoWindow => "no browser window is available",
            BootFailure::NoRoot => "missing #app mount point",
        }
    }
}

thread_local! {
    static STAGE: Cell<Option<BootStage>> = const { Cell::new(None) };
}

fn advance(stage: BootStage) -> bool {
    STAGE.with(|current| {
        if current.get().is_some_and(|reached| reached >= stage) {
            return false;
        }
        current.set(Some(stage));
        true
    })
}

#[cfg(target_arch = "wasm32")]
fn notify_splash(method: &str, args: &[&str]) {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(splash) = Reflect::get(&window, &JsValue::from_str("__FOLIO_BOOT"))
        .ok()
        .filter(JsValue::is_object)
    else {
        return;
    };
    let Ok(handler) = Reflect::get(&splash, &JsValue::from_str(method))
        .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from))
    else {
        return;
    };
    let args: Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
    let _ = handler.apply(&splash, &args);
}

#[cfg(not(target_arch = "wasm32"))]
fn notify_splash(method: &str, args: &[&str]) {
    let _ = (method, args);
}

pub(crate) fn enter(stage: BootStage) {
    if !advance(stage) {
        return;
    }
    match stage {
        BootStage::Ready => notify_splash("ready", &[]),
        _ => notify_splash("setPhase", &[stage.label(), stage.detail()]),
    }
}

pub(crate) fn fail(failure: BootFailure) {
    gloo::console::error!("boot:", failure.message());
    notify_splash("fail", &[failure.code(), failure.message()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_only_move_forward() {
        assert!(advance(BootStage::Config));
        assert!(!advance(BootStage::Config));
        assert!(advance(BootStage::Theme));
        assert!(!advance(BootStage::Mount));
        assert!(advance(BootStage::Ready));
        assert!(!advance(BootStage::Reveal));
        assert!(!advance(BootStage::Ready));
    }

    #[test]
    fn failures_carry_splash_codes() {
        assert_eq!(BootFailure::NoRoot.code(), "no-root");
        assert_eq!(BootFailure::NoWindow.code(), "no-window");
        assert!(BootFailure::NoRoot.message().contains("#app"));
    }
}
