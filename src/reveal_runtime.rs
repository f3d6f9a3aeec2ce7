//! Scroll-triggered entrance transitions for the page sections.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{RevealConfig, RevealStep, RevealTracker, Section};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) const REVEAL_CLASS: &str = "animate-fade-in";

struct Region {
    section: Section,
    container: Element,
    elements: Vec<HtmlElement>,
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn hide(element: &HtmlElement, config: &RevealConfig) {
    set_style(element, "opacity", "0");
    set_style(
        element,
        "transform",
        &format!("translateY({}px)", config.offset_px),
    );
}

fn play(element: &HtmlElement, step: &RevealStep, config: &RevealConfig) {
    let timing = format!(
        "{}ms {} {}ms",
        step.duration_ms, config.easing, step.delay_ms
    );
    set_style(
        element,
        "transition",
        &format!("opacity {timing}, transform {timing}"),
    );
    set_style(element, "opacity", "1");
    set_style(element, "transform", "translateY(0)");
}

/// Hands the element back to the stylesheet so hover rules apply again.
fn clear(element: &HtmlElement) {
    let style = element.style();
    for property in ["transition", "opacity", "transform"] {
        let _ = style.remove_property(property);
    }
}

fn marked_descendants(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

struct ControllerInner {
    window: Window,
    tracker: RefCell<RevealTracker>,
    regions: RefCell<Vec<Region>>,
    listeners: RefCell<Vec<EventListener>>,
    settle_timers: RefCell<Vec<Timeout>>,
}

impl ControllerInner {
    fn register_region(&self, document: &Document, section: Section) {
        let Some(container) = document.get_element_by_id(section.id()) else {
            gloo::console::log!("reveal: container missing, skipped", section.id());
            return;
        };
        let elements = marked_descendants(&container);
        let mut tracker = self.tracker.borrow_mut();
        if !tracker.register(section, elements.len()) {
            return;
        }
        for element in &elements {
            hide(element, tracker.config());
        }
        self.regions.borrow_mut().push(Region {
            section,
            container,
            elements,
        });
    }

    fn check(&self) {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let mut tracker = self.tracker.borrow_mut();
        let mut regions = self.regions.borrow_mut();
        let mut settle_timers = self.settle_timers.borrow_mut();
        regions.retain(|region| {
            let top = region.container.get_bounding_client_rect().top();
            let Some(plan) = tracker.observe(region.section, top, viewport_height) else {
                return true;
            };
            for step in &plan {
                let Some(element) = region.elements.get(step.index) else {
                    continue;
                };
                play(element, step, tracker.config());
                let element = element.clone();
                settle_timers.push(Timeout::new(step.settle_after_ms(), move || {
                    clear(&element)
                }));
            }
            false
        });
        if tracker.is_settled() {
            self.listeners.borrow_mut().clear();
        }
    }
}

/// Owns the reveal watchers for one mounted page. Listeners are dropped as
/// soon as every region has fired, or when the controller is dropped.
/// Pending settle timers are cancelled on drop.
pub(crate) struct RevealController {
    inner: Rc<ControllerInner>,
}

impl RevealController {
    pub(crate) fn install(config: RevealConfig, sections: &[Section]) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let inner = Rc::new(ControllerInner {
            window: window.clone(),
            tracker: RefCell::new(RevealTracker::new(config)),
            regions: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            settle_timers: RefCell::new(Vec::new()),
        });
        for section in sections {
            inner.register_region(&document, *section);
        }

        let options = EventListenerOptions {
            passive: true,
            ..EventListenerOptions::default()
        };
        let listeners: Vec<EventListener> = ["scroll", "resize"]
            .into_iter()
            .map(|event| {
                let weak = Rc::downgrade(&inner);
                EventListener::new_with_options(&window, event, options, move |_event| {
                    if let Some(inner) = weak.upgrade() {
                        inner.check();
                    }
                })
            })
            .collect();
        *inner.listeners.borrow_mut() = listeners;
        inner.check();
        Some(Self { inner })
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.inner.tracker.borrow().is_settled()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.inner.listeners.borrow_mut().clear();
        self.inner.settle_timers.borrow_mut().clear();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_region(document: &Document, id: &str, children: usize) -> Element {
        let container = document.create_element("section").unwrap();
        container.set_id(id);
        for _ in 0..children {
            let child = document.create_element("div").unwrap();
            child.set_class_name(REVEAL_CLASS);
            container.append_child(&child).unwrap();
        }
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    fn first_child(container: &Element) -> HtmlElement {
        container
            .first_element_child()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn inline(element: &HtmlElement, property: &str) -> String {
        element.style().get_property_value(property).unwrap()
    }

    fn quick_config() -> RevealConfig {
        RevealConfig {
            duration_ms: 20.0,
            stagger_ms: 10.0,
            ..RevealConfig::default()
        }
    }

    #[wasm_bindgen_test]
    fn visible_region_fires_and_missing_region_is_skipped() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = mount_region(&document, Section::About.id(), 2);

        let controller =
            RevealController::install(RevealConfig::default(), &[Section::About, Section::Resume])
                .unwrap();
        assert!(controller.is_settled());
        assert_eq!(inline(&first_child(&container), "opacity"), "1");
        drop(controller);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn settled_elements_drop_inline_styles() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = mount_region(&document, Section::Portfolio.id(), 2);

        let controller = RevealController::install(quick_config(), &[Section::Portfolio]).unwrap();
        let first = first_child(&container);
        assert_eq!(inline(&first, "transform"), "translateY(0px)");

        TimeoutFuture::new(120).await;
        for property in ["transform", "opacity", "transition"] {
            assert_eq!(inline(&first, property), "", "{property} left inline");
        }
        drop(controller);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_controller_ignores_later_scrolls() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let container = mount_region(&document, Section::Resume.id(), 1);
        let container_style = container.clone().dyn_into::<HtmlElement>().unwrap().style();
        container_style.set_property("margin-top", "100000px").unwrap();

        let controller = RevealController::install(quick_config(), &[Section::Resume]).unwrap();
        assert!(!controller.is_settled());
        let child = first_child(&container);
        assert_eq!(inline(&child, "opacity"), "0");

        drop(controller);
        container_style.remove_property("margin-top").unwrap();
        window
            .dispatch_event(&web_sys::Event::new("scroll").unwrap())
            .unwrap();
        TimeoutFuture::new(60).await;
        assert_eq!(inline(&child, "opacity"), "0");
        container.remove();
    }
}
