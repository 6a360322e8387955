//! Page content and navigation. Fills the host page's sections from
//! [`RESUME`], wires the nav bar, and registers each section's reveal
//! bindings.

use std::cell::Cell;
use std::rc::Rc;

use web_sys as web;

use crate::attrs;
use crate::bindings::{self, SectionPlan};
use crate::constants::*;
use crate::content::{section_id, ResumeData, NAV_ITEMS, RESUME};
use crate::core::reveal::{RevealScope, SharedReveal};
use crate::core::CoreError;
use crate::dom::{self, Listener};

/// Append `<tag class>` with optional text under `parent`.
fn child(doc: &web::Document, parent: &web::Element, tag: &str, class: &str, text: Option<&str>) -> Option<web::Element> {
    let el = dom::element(doc, tag, class, text)?;
    dom::append(parent, &el);
    Some(el)
}

fn link(doc: &web::Document, parent: &web::Element, class: &str, href: &str, text: &str) -> Option<web::Element> {
    let a = child(doc, parent, "a", class, Some(text))?;
    _ = a.set_attribute("href", href);
    _ = a.set_attribute("target", "_blank");
    _ = a.set_attribute("rel", "noopener noreferrer");
    Some(a)
}

/// Stagger item `index` of `section`.
fn item(doc: &web::Document, content: &web::Element, section: &str, index: usize, class: &str) -> Option<web::Element> {
    let el = child(doc, content, "div", &format!("{STAGGER_ITEM_CLASS} {class}"), None)?;
    el.set_id(&item_key(section, index));
    Some(el)
}

/// Title block and empty content block of one section. Returns the
/// content block.
fn section_frame(doc: &web::Document, section: &web::Element, id: &str, title: &str) -> Option<web::Element> {
    dom::clear(section);
    let head = child(doc, section, "div", SECTION_TITLE_CLASS, None)?;
    head.set_id(&title_key(id));
    child(doc, &head, "span", "title-prefix", Some("0x"));
    let h2 = child(doc, &head, "h2", "", Some(title))?;
    let line = child(doc, &h2, "span", TITLE_LINE_CLASS, None)?;
    line.set_id(&title_line_key(id));
    let content = child(doc, section, "div", "section-content", None)?;
    content.set_id(&content_key(id));
    Some(content)
}

fn title_for(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Items rendered into one section; `(count, items are cards)`.
fn fill_section(doc: &web::Document, content: &web::Element, id: &str, data: &ResumeData) -> (usize, bool) {
    match id {
        "about" => {
            let mut n = 0;
            if let Some(el) = item(doc, content, id, n, CARD_CLASS) {
                child(doc, &el, "p", "summary", Some(data.personal_info.summary));
            }
            n += 1;
            let h = &data.highlights;
            for (label, value) in [
                ("Education", h.education),
                ("Project", h.project_tech),
                ("Focus", h.focus_area),
                ("Location", h.location_city),
            ] {
                if let Some(el) = item(doc, content, id, n, CARD_CLASS) {
                    child(doc, &el, "span", "highlight-label", Some(label));
                    child(doc, &el, "span", "highlight-value", Some(value));
                }
                n += 1;
            }
            (n, true)
        }
        "experience" => {
            for (i, exp) in data.experience.iter().enumerate() {
                let Some(el) = item(doc, content, id, i, CARD_CLASS) else {
                    continue;
                };
                child(doc, &el, "h3", "role", Some(exp.role));
                child(doc, &el, "span", "company", Some(exp.company));
                child(doc, &el, "span", "duration", Some(exp.duration));
                if let Some(ul) = child(doc, &el, "ul", "details", None) {
                    for &d in exp.details {
                        child(doc, &ul, "li", "", Some(d));
                    }
                }
            }
            (data.experience.len(), true)
        }
        "skills" => {
            for (i, cat) in data.skills.iter().enumerate() {
                let Some(el) = item(doc, content, id, i, CARD_CLASS) else {
                    continue;
                };
                child(doc, &el, "h3", "category", Some(cat.category));
                if let Some(list) = child(doc, &el, "div", "chips", None) {
                    for &s in cat.items {
                        child(doc, &list, "span", "chip", Some(s));
                    }
                }
            }
            (data.skills.len(), true)
        }
        "projects" => {
            for (i, p) in data.projects.iter().enumerate() {
                let Some(el) = item(doc, content, id, i, CARD_CLASS) else {
                    continue;
                };
                let Some(card) = child(doc, &el, "div", TILT_CARD_CLASS, None) else {
                    continue;
                };
                child(doc, &card, "h3", "title", Some(p.title));
                if let Some(ul) = child(doc, &card, "ul", "details", None) {
                    for &d in p.description {
                        child(doc, &ul, "li", "", Some(d));
                    }
                }
                if let Some(tags) = child(doc, &card, "div", "chips", None) {
                    for &t in p.tech {
                        child(doc, &tags, "span", "chip", Some(t));
                    }
                }
                if let Some(href) = p.link {
                    link(doc, &card, "project-link", href, "View");
                }
            }
            (data.projects.len(), true)
        }
        "education" => {
            for (i, e) in data.education.iter().enumerate() {
                let Some(el) = item(doc, content, id, i, CARD_CLASS) else {
                    continue;
                };
                if let Some(icon) = child(doc, &el, "i", &format!("icon icon-{}", e.kind.icon()), None) {
                    _ = icon.set_attribute("data-icon", e.kind.icon());
                }
                child(doc, &el, "h3", "degree", Some(e.degree));
                child(doc, &el, "span", "institution", Some(e.institution));
                child(doc, &el, "span", "year", Some(e.year));
                child(doc, &el, "span", "status", Some(e.status.label()));
                if let Some(bar) = child(doc, &el, "div", "progress", None) {
                    if let Some(fill) = child(doc, &bar, "div", "progress-fill", None) {
                        _ = fill.set_attribute("style", &format!("width: {}%", e.status.progress_pct()));
                    }
                }
            }
            (data.education.len(), true)
        }
        "certifications" => {
            let lists = [("Certifications", data.certifications), ("Awards", data.awards)];
            for (n, (heading, entries)) in lists.into_iter().enumerate() {
                let Some(el) = item(doc, content, id, n, CARD_CLASS) else {
                    continue;
                };
                child(doc, &el, "h3", "", Some(heading));
                if let Some(ul) = child(doc, &el, "ul", "details", None) {
                    for &entry in entries {
                        child(doc, &ul, "li", "", Some(entry));
                    }
                }
            }
            (lists.len(), true)
        }
        _ => (0, false),
    }
}

/// Contact cards in the hero; returns how many were rendered.
fn fill_contacts(doc: &web::Document, data: &ResumeData) -> Result<usize, CoreError> {
    let list = doc
        .get_element_by_id(CONTACT_LIST_ID)
        .ok_or_else(|| CoreError::missing(CONTACT_LIST_ID))?;
    dom::clear(&list);
    let info = &data.personal_info;
    let entries = [
        ("Email", info.email.to_string(), Some(info.compose_mail_url())),
        ("GitHub", info.github.to_string(), Some(info.github_url())),
        ("LinkedIn", info.linkedin.to_string(), Some(info.linkedin_url())),
        ("Location", info.location.to_string(), None),
    ];
    let mut count = 0;
    for (i, (label, text, href)) in entries.iter().enumerate() {
        let card = match href {
            Some(href) => link(doc, &list, "", href, ""),
            None => child(doc, &list, "div", "", None),
        };
        let Some(card) = card else {
            continue;
        };
        card.set_class_name(&format!("contact-card-item {CARD_CLASS}"));
        card.set_id(&contact_key(i));
        child(doc, &card, "span", "contact-label", Some(*label));
        child(doc, &card, "span", "contact-value", Some(text.as_str()));
        count += 1;
    }
    Ok(count)
}

/// Hero name and the typing role label.
fn fill_hero(doc: &web::Document, data: &ResumeData) {
    let info = &data.personal_info;
    if let Some(name) = doc.get_element_by_id("hero-name") {
        name.set_text_content(Some(info.name));
    }
    if let Some(label) = doc.get_element_by_id("hero-role") {
        label.set_class_name(TYPING_LABEL_CLASS);
        if label.get_attribute(ATTR_TEXT).is_none() {
            _ = label.set_attribute(ATTR_TEXT, &format!("> {}", info.role));
        }
    }
    if let Some(mark) = doc.get_element_by_id(WORDMARK_ID) {
        mark.set_text_content(Some(info.wordmark()));
    }
}

fn set_menu_open(doc: &web::Document, open: bool) {
    if let Some(menu) = doc.get_element_by_id(NAV_MENU_ID) {
        dom::toggle_class(&menu, NAV_OPEN_CLASS, open);
    }
    if let Some(body) = doc.body() {
        dom::set_style(&body, "overflow", if open { "hidden" } else { "unset" });
    }
}

fn wire_nav(window: &web::Window, doc: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let menu_open = Rc::new(Cell::new(false));

    if let Some(menu) = doc.get_element_by_id(NAV_MENU_ID) {
        dom::clear(&menu);
        for label in NAV_ITEMS {
            let Some(button) = child(doc, &menu, "button", "nav-item", Some(label)) else {
                continue;
            };
            let (doc_click, open) = (doc.clone(), menu_open.clone());
            let target = section_id(label);
            listeners.extend(Listener::new(&button, "click", move |_ev: web::Event| {
                open.set(false);
                set_menu_open(&doc_click, false);
                dom::smooth_scroll_into_view(&doc_click, &target);
            }));
        }
    }

    let (doc_toggle, open) = (doc.clone(), menu_open.clone());
    listeners.extend(dom::on_click(doc, NAV_TOGGLE_ID, move || {
        let next = !open.get();
        open.set(next);
        set_menu_open(&doc_toggle, next);
    }));

    let win_logo = window.clone();
    listeners.extend(dom::on_click(doc, NAV_LOGO_ID, move || {
        dom::smooth_scroll_to_top(&win_logo);
    }));

    if let Some(nav) = doc.get_element_by_id(NAV_ID) {
        let scrolled = Rc::new(Cell::new(false));
        let apply = {
            let nav = nav.clone();
            let scrolled = scrolled.clone();
            move |y: f64| {
                let now = y > NAV_SCROLLED_THRESHOLD_PX;
                if now != scrolled.get() {
                    scrolled.set(now);
                    dom::toggle_class(&nav, NAV_SCROLLED_CLASS, now);
                }
            }
        };
        apply(window.scroll_y().unwrap_or(0.0));
        let win_scroll = window.clone();
        listeners.extend(Listener::new(window, "scroll", move |_ev: web::Event| {
            apply(win_scroll.scroll_y().unwrap_or(0.0));
        }));
    }

    listeners
}

/// The mounted page shell.
pub struct Shell {
    listeners: Vec<Listener>,
    scopes: Vec<RevealScope>,
}

impl Shell {
    pub fn mount(window: &web::Window, doc: &web::Document, engine: &SharedReveal) -> Self {
        let data = &RESUME;
        fill_hero(doc, data);
        let mut scopes = Vec::with_capacity(SECTION_IDS.len() + 2);
        {
            let mut engine = engine.borrow_mut();
            match fill_contacts(doc, data) {
                Ok(count) => scopes.push(bindings::bind_contact_cards(&mut engine, count)),
                Err(e) => log::debug!("[shell] {e}"),
            }
            for id in SECTION_IDS {
                let Some(section) = doc.get_element_by_id(id) else {
                    log::debug!("[shell] {}", CoreError::missing(id));
                    continue;
                };
                let mode = attrs::reveal_mode(section.get_attribute(ATTR_REVEAL).as_deref());
                let Some(content) = section_frame(doc, &section, id, &title_for(id)) else {
                    continue;
                };
                let (items, cards) = fill_section(doc, &content, id, data);
                let plan = SectionPlan { id, items, cards, mode };
                scopes.push(bindings::bind_section(&mut engine, &plan));
            }
            scopes.push(bindings::bind_parallax(&mut engine));
        }
        let listeners = wire_nav(window, doc);
        log::info!("[shell] mounted {} binding groups", scopes.len());
        Self { listeners, scopes }
    }

    pub fn unmount(&mut self, engine: &SharedReveal) {
        let mut engine = engine.borrow_mut();
        for scope in &mut self.scopes {
            scope.revert(&mut engine);
        }
        self.scopes.clear();
        self.listeners.clear();
        if let Some(doc) = dom::window_document() {
            set_menu_open(&doc, false);
        }
    }
}
