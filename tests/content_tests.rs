// Host-side tests for page content, attribute overrides and the binding plan.

use folio_web::attrs::{self, TypingAttrs};
use folio_web::bindings::{self, SectionPlan};
use folio_web::constants::*;
use folio_web::content::*;
use folio_web::core::reveal::{Animation, EntranceMode, RevealEngine, Trigger};
use folio_web::core::style::ElementStyle;
use glam::Vec2;

#[test]
fn nav_items_map_to_section_ids() {
    let ids: Vec<String> = NAV_ITEMS.iter().map(|n| section_id(n)).collect();
    assert_eq!(ids, ["about", "experience", "skills", "projects", "education"]);
    for id in &ids {
        assert!(SECTION_IDS.contains(&id.as_str()), "{id} has no section");
    }
}

#[test]
fn outbound_links() {
    let info = &RESUME.personal_info;
    assert_eq!(
        info.compose_mail_url(),
        "https://mail.google.com/mail/?view=cm&fs=1&to=monilgandhi11@gmail.com"
    );
    assert_eq!(info.github_url(), "https://github.com/monil72004");
    assert_eq!(info.linkedin_url(), "https://linkedin.com/in/monilgandhi0");
}

#[test]
fn resume_is_populated() {
    assert_eq!(RESUME.personal_info.name, "MONIL GANDHI");
    assert!(!RESUME.skills.is_empty());
    assert!(RESUME.skills.iter().all(|s| !s.items.is_empty()));
    assert!(!RESUME.experience.is_empty());
    assert!(!RESUME.projects.is_empty());
    assert!(!RESUME.certifications.is_empty());
    assert!(RESUME
        .education
        .iter()
        .any(|e| e.status == EducationStatus::InProgress));
}

#[test]
fn education_icons_and_progress() {
    assert_eq!(EducationKind::Degree.icon(), "graduation-cap");
    assert_eq!(EducationKind::Diploma.icon(), "award");
    assert_eq!(EducationKind::School.icon(), "school");
    assert_eq!(EducationKind::Course.icon(), "book-open");
    assert_eq!(EducationStatus::Completed.progress_pct(), 100);
    assert!(EducationStatus::InProgress.progress_pct() < 100);
    assert_eq!(EducationStatus::InProgress.label(), "In Progress");
}

#[test]
fn typing_attrs_override_defaults() {
    let cfg = attrs::typing_config(
        TypingAttrs {
            text: Some("> hello"),
            speed: Some("30"),
            delay: Some("500"),
            repeat: Some("false"),
        },
        "ignored",
    );
    assert_eq!(cfg.text, "> hello");
    assert_eq!(cfg.char_interval_ms, 30);
    assert_eq!(cfg.start_delay_ms, 500);
    assert!(!cfg.repeat);
}

#[test]
fn bad_typing_attrs_fall_back() {
    let cfg = attrs::typing_config(
        TypingAttrs {
            text: None,
            speed: Some("fast"),
            delay: Some("-3"),
            repeat: Some("maybe"),
        },
        "fallback",
    );
    assert_eq!(cfg.text, "fallback");
    assert_eq!(cfg.char_interval_ms, 50);
    assert_eq!(cfg.start_delay_ms, 0);
    assert!(cfg.repeat);

    let zero = attrs::typing_config(
        TypingAttrs {
            speed: Some("0"),
            ..Default::default()
        },
        "x",
    );
    assert_eq!(zero.char_interval_ms, 50, "zero interval rejected");
}

#[test]
fn tilt_seed_and_reveal_attrs() {
    assert_eq!(attrs::tilt_config(Some("4.5")).max_deg, 4.5);
    assert_eq!(attrs::tilt_config(Some("-1")).max_deg, 10.0);
    assert_eq!(attrs::tilt_config(None).max_deg, 10.0);
    assert_eq!(attrs::seed(Some(" 42 ")), Some(42));
    assert_eq!(attrs::seed(Some("x")), None);
    assert_eq!(attrs::reveal_mode(Some("play-reverse")), EntranceMode::PlayReverse);
    assert_eq!(attrs::reveal_mode(Some("once")), EntranceMode::Once);
    assert_eq!(attrs::reveal_mode(None), EntranceMode::Once);
}

#[test]
fn section_plan_binds_title_underline_items_and_cards() {
    let mut engine = RevealEngine::new();
    let plan = SectionPlan {
        id: "skills",
        items: 3,
        cards: true,
        mode: EntranceMode::Once,
    };
    let mut scope = bindings::bind_section(&mut engine, &plan);
    // title + underline + 3 entrances + 3 highlights
    assert_eq!(scope.len(), 8);
    assert_eq!(engine.len(), 8);

    let entrance_of = |key: &str| {
        (1..=8u64)
            .filter_map(|id| engine.binding(id))
            .find(|b| b.target == key && matches!(b.animation, Animation::Entrance(_)))
            .cloned()
    };
    let item2 = entrance_of(&item_key("skills", 2)).expect("item entrance");
    assert_eq!(item2.trigger.as_deref(), Some("skills-content"));
    let Animation::Entrance(e) = item2.animation else {
        unreachable!()
    };
    assert_eq!(e.trigger, Trigger::Line(0.9));
    assert!((e.timeline.delay_sec - 0.2).abs() < 1e-6);

    let title = entrance_of(&title_key("skills")).expect("title entrance");
    assert_eq!(title.trigger.as_deref(), Some("skills"));

    scope.revert(&mut engine);
    assert!(engine.is_empty());
}

#[test]
fn remounting_a_section_does_not_stack_bindings() {
    let mut engine = RevealEngine::new();
    let plan = SectionPlan {
        id: "projects",
        items: 1,
        cards: false,
        mode: EntranceMode::PlayReverse,
    };
    let first = bindings::bind_section(&mut engine, &plan);
    let second = bindings::bind_section(&mut engine, &plan);
    assert_eq!(first.len(), second.len());
    assert_eq!(engine.len(), 3);
}

#[test]
fn contact_and_parallax_plans() {
    let mut engine = RevealEngine::new();
    let contacts = bindings::bind_contact_cards(&mut engine, 4);
    assert_eq!(contacts.len(), 8);
    let parallax = bindings::bind_parallax(&mut engine);
    assert_eq!(parallax.len(), 4);
    assert_eq!(engine.len(), 12);
}

#[test]
fn style_transform_only_when_touched() {
    let slide = ElementStyle {
        opacity: Some(0.5),
        translate: Some(Vec2::new(0.0, 30.0)),
        ..Default::default()
    };
    assert_eq!(slide.transform_css().as_deref(), Some("translate3d(0.00px, 30.00px, 0px)"));
    let glow = ElementStyle {
        highlighted: Some(true),
        ..Default::default()
    };
    assert_eq!(glow.transform_css(), None);
    assert_eq!(ElementStyle::default().transform_css(), None);
}

#[test]
fn wordmark_prefers_alias_over_name() {
    assert_eq!(RESUME.personal_info.wordmark(), "Febatrone");
    let anonymous = PersonalInfo {
        alias: None,
        ..RESUME.personal_info
    };
    assert_eq!(anonymous.wordmark(), "MONIL GANDHI");
}
