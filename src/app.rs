use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::attrs::{self, TypingAttrs};
use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::core::env::{self, SharedEnv};
use crate::core::reveal::{RevealEngine, RevealLoop, SharedReveal};
use crate::core::starfield::{Starfield, StarfieldConfig, StarfieldLoop};
use crate::core::typing::TypingDriver;
use crate::core::CoreError;
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::RafTicker;
use crate::shell::Shell;
use crate::stage::DomStage;
use crate::timers::WindowTimers;

/// Everything one mounted page owns. [`App::unmount`] releases all of it.
pub struct App {
    ticker: RafTicker,
    timers: WindowTimers,
    engine: SharedReveal,
    starfield: StarfieldLoop<RafTicker>,
    reveal: RevealLoop<RafTicker>,
    typing: Vec<TypingDriver<WindowTimers>>,
    listeners: Vec<Listener>,
    shell: Shell,
}

fn starfield_for(document: &web::Document, env: &SharedEnv) -> (Starfield, Result<CanvasSurface, CoreError>) {
    let canvas = document
        .get_element_by_id(STARFIELD_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let seed = canvas
        .as_ref()
        .and_then(|c| attrs::seed(c.get_attribute(ATTR_SEED).as_deref()))
        .unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
    let viewport = env.borrow().viewport;
    let field = Starfield::new(viewport, StarfieldConfig::default(), StdRng::seed_from_u64(seed));
    let surface = match canvas {
        Some(c) => CanvasSurface::acquire(&c),
        None => Err(CoreError::missing(STARFIELD_CANVAS_ID)),
    };
    (field, surface)
}

fn typing_labels(document: &web::Document, timers: &WindowTimers) -> Vec<TypingDriver<WindowTimers>> {
    dom::elements_by_class(document, TYPING_LABEL_CLASS)
        .into_iter()
        .map(|label| {
            let text = label.get_attribute(ATTR_TEXT);
            let speed = label.get_attribute(ATTR_SPEED);
            let delay = label.get_attribute(ATTR_DELAY);
            let repeat = label.get_attribute(ATTR_REPEAT);
            let fallback = label.text_content().unwrap_or_default();
            let config = attrs::typing_config(
                TypingAttrs {
                    text: text.as_deref(),
                    speed: speed.as_deref(),
                    delay: delay.as_deref(),
                    repeat: repeat.as_deref(),
                },
                &fallback,
            );
            TypingDriver::start(timers.clone(), config, move |shown| {
                label.set_text_content(Some(shown));
            })
        })
        .collect()
}

impl App {
    pub fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;

        let ticker = RafTicker::new();
        let timers = WindowTimers::new();
        let engine: SharedReveal = Rc::new(RefCell::new(RevealEngine::new()));

        // content first so layout and document height are final
        let shell = Shell::mount(&window, &document, &engine);

        let env = env::shared(events::read_env(&window, &document));
        let mut listeners = events::wire_viewport(&window, &document, &env);
        listeners.extend(events::wire_pointer(&window, &env));
        listeners.extend(events::wire_tilt_cards(&document));

        let (field, surface) = starfield_for(&document, &env);
        let starfield = StarfieldLoop::mount(ticker.clone(), env.clone(), field, surface);
        let reveal = RevealLoop::mount(
            ticker.clone(),
            env.clone(),
            engine.clone(),
            DomStage::new(document.clone()),
        );
        let typing = typing_labels(&document, &timers);

        log::info!(
            "[app] mounted: {} bindings, {} typing labels, {} listeners",
            engine.borrow().len(),
            typing.len(),
            listeners.len()
        );
        Ok(Self {
            ticker,
            timers,
            engine,
            starfield,
            reveal,
            typing,
            listeners,
            shell,
        })
    }

    pub fn unmount(mut self) {
        self.typing.clear();
        self.listeners.clear();
        self.starfield.unmount();
        self.reveal.unmount();
        self.shell.unmount(&self.engine);
        self.ticker.shutdown();
        self.timers.shutdown();
        log::info!("[app] unmounted");
    }
}
