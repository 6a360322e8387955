use glam::Vec2;
use web_sys as web;

use crate::attrs;
use crate::constants::{ATTR_MAX_DEG, TILT_CARD_CLASS};
use crate::core::env::SharedEnv;
use crate::core::tilt::{tilt_for_pointer, tilt_on_exit, TiltConfig};
use crate::dom::{self, Listener};

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Track the pointer in viewport coordinates.
pub fn wire_pointer(window: &web::Window, env: &SharedEnv) -> Option<Listener> {
    let env = env.clone();
    Listener::new(window, "mousemove", move |ev: web::MouseEvent| {
        env.borrow_mut().pointer = Some(client_pos(&ev));
    })
}

fn wire_tilt_card(card: &web::HtmlElement) -> [Option<Listener>; 2] {
    let config: TiltConfig = attrs::tilt_config(card.get_attribute(ATTR_MAX_DEG).as_deref());
    let perspective = config.perspective_px;

    let card_move = card.clone();
    let on_move = Listener::new(card, "mousemove", move |ev: web::MouseEvent| {
        let r = card_move.get_bounding_client_rect();
        let local = client_pos(&ev) - Vec2::new(r.left() as f32, r.top() as f32);
        let size = Vec2::new(r.width() as f32, r.height() as f32);
        let tilt = tilt_for_pointer(local, size, &config);
        dom::set_style(&card_move, "transform", &tilt.css(perspective));
    });

    let card_leave = card.clone();
    let on_leave = Listener::new(card, "mouseleave", move |_ev: web::Event| {
        dom::set_style(&card_leave, "transform", &tilt_on_exit().css(perspective));
    });

    [on_move, on_leave]
}

/// Attach tilt handlers to every `.tilt-card` currently in the document.
pub fn wire_tilt_cards(document: &web::Document) -> Vec<Listener> {
    let cards = dom::elements_by_class(document, TILT_CARD_CLASS);
    let listeners: Vec<Listener> = cards
        .iter()
        .flat_map(wire_tilt_card)
        .flatten()
        .collect();
    log::info!("[events] tilt on {} cards", cards.len());
    listeners
}
