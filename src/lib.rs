pub mod attrs;
pub mod bindings;
pub mod constants;
pub mod content;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod shell;
#[cfg(target_arch = "wasm32")]
mod stage;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use web_entry::{mount, start, unmount};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("folio-web starting");
        mount();
        Ok(())
    }

    /// Mount the page. Does nothing if it is already mounted.
    #[wasm_bindgen]
    pub fn mount() {
        APP.with(|slot| {
            if slot.borrow().is_some() {
                log::info!("[app] already mounted");
                return;
            }
            match App::mount() {
                Ok(app) => *slot.borrow_mut() = Some(app),
                Err(e) => log::error!("init error: {:?}", e),
            }
        });
    }

    /// Tear down every loop, timer and listener the page owns.
    #[wasm_bindgen]
    pub fn unmount() {
        let app = APP.with(|slot| slot.borrow_mut().take());
        if let Some(app) = app {
            app.unmount();
        }
    }
}
