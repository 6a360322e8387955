use web_sys as web;

use crate::core::env::{EnvSignals, SharedEnv, Viewport};
use crate::dom::{self, Listener};

/// Current window metrics as a fresh snapshot.
pub fn read_env(window: &web::Window, document: &web::Document) -> EnvSignals {
    let (w, h) = dom::viewport_size(window);
    let viewport = Viewport::new(w, h).unwrap_or_else(|e| {
        log::warn!("[events] {e}; using default viewport");
        Viewport::default()
    });
    let mut env = EnvSignals::new(viewport);
    env.scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    env.document_height = dom::document_height(document).max(viewport.height);
    env
}

fn refresh_scroll(env: &SharedEnv, window: &web::Window, document: &web::Document) {
    let mut e = env.borrow_mut();
    e.scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    e.document_height = dom::document_height(document).max(e.viewport.height);
}

fn refresh_viewport(env: &SharedEnv, window: &web::Window, document: &web::Document) {
    let (w, h) = dom::viewport_size(window);
    match Viewport::new(w, h) {
        Ok(viewport) => {
            env.borrow_mut().viewport = viewport;
            refresh_scroll(env, window, document);
        }
        // collapsed iframes report 0x0; keep the last good size
        Err(e) => log::debug!("[events] ignoring resize: {e}"),
    }
}

/// Scroll and resize listeners writing the shared environment.
pub fn wire_viewport(window: &web::Window, document: &web::Document, env: &SharedEnv) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);

    let (env_scroll, win_scroll, doc_scroll) = (env.clone(), window.clone(), document.clone());
    listeners.extend(Listener::new(window, "scroll", move |_ev: web::Event| {
        refresh_scroll(&env_scroll, &win_scroll, &doc_scroll);
    }));

    let (env_resize, win_resize, doc_resize) = (env.clone(), window.clone(), document.clone());
    listeners.extend(Listener::new(window, "resize", move |_ev: web::Event| {
        refresh_viewport(&env_resize, &win_resize, &doc_resize);
    }));

    listeners
}
