use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ScrollSample, Section, SectionBounds};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Window};

pub(crate) type ScrollHook = Rc<dyn Fn(ScrollSample)>;

/// Reads the current viewport geometry and every section container that is
/// present in the document.
pub(crate) fn measure(window: &Window, document: &Document) -> ScrollSample {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document_height = document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    let sections = Section::ALL
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id())?;
            let rect = element.get_bounding_client_rect();
            Some((*section, SectionBounds::new(rect.top(), rect.bottom())))
        })
        .collect();
    ScrollSample {
        scroll_top,
        document_height,
        viewport_height,
        sections,
    }
}

struct WatcherInner {
    window: Window,
    document: Document,
    hook: ScrollHook,
    frame: RefCell<Option<AnimationFrame>>,
}

impl WatcherInner {
    /// Coalesces bursts of events into one measurement per frame.
    fn schedule(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let inner = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            inner.frame.borrow_mut().take();
            inner.emit();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn emit(&self) {
        (self.hook)(measure(&self.window, &self.document));
    }
}

/// Subscription to window scroll and resize. Dropping it removes the
/// listeners and cancels any pending frame.
pub(crate) struct ScrollWatcher {
    inner: Rc<WatcherInner>,
    _listeners: Vec<EventListener>,
}

impl ScrollWatcher {
    pub(crate) fn install(hook: ScrollHook) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let inner = Rc::new(WatcherInner {
            window: window.clone(),
            document,
            hook,
            frame: RefCell::new(None),
        });
        let options = EventListenerOptions {
            passive: true,
            ..EventListenerOptions::default()
        };
        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let inner_for_event = Rc::clone(&inner);
            listeners.push(EventListener::new_with_options(
                &window,
                event,
                options,
                move |_event| inner_for_event.schedule(),
            ));
        }
        inner.emit();
        Some(Self {
            inner,
            _listeners: listeners,
        })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        self.inner.frame.borrow_mut().take();
    }
}
