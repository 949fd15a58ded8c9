mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::recording;
use tuitab::{
    Content, Orientation, Override, OverrideProps, Overrides, Placement, Rect, Role, Tab,
    TabProps, Viewport, WidthMode,
};

// ============================================================================
// Accessibility attributes
// ============================================================================

#[test]
fn test_enabled_tab_attributes() {
    let tab = Tab::mount(TabProps::new("tab-logs").title("Logs"));
    let props = tab.surface_props();

    assert_eq!(props.role, Role::Tab);
    assert_eq!(props.tab_index, 0);
    assert_eq!(props.aria_disabled, None);
    assert_eq!(props.attribute("role").as_deref(), Some("tab"));
    assert_eq!(props.attribute("id").as_deref(), Some("tab-logs"));
    assert_eq!(props.attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(props.attribute("aria-selected").as_deref(), Some("false"));
    assert_eq!(props.attribute("aria-disabled"), None);
}

#[test]
fn test_disabled_tab_attributes() {
    let tab = Tab::mount(TabProps::new("t").disabled(true));
    let props = tab.surface_props();

    assert_eq!(props.tab_index, -1);
    assert_eq!(props.aria_disabled, Some(true));
    assert_eq!(props.attribute("tabindex").as_deref(), Some("-1"));
    assert_eq!(props.attribute("aria-disabled").as_deref(), Some("true"));
}

#[test]
fn test_aria_selected_follows_active() {
    let mut tab = Tab::mount(TabProps::new("t").active(true));
    assert!(tab.surface_props().aria_selected);
    assert_eq!(tab.surface_props().attribute("aria-selected").as_deref(), Some("true"));

    tab.update(TabProps::new("t"));
    assert!(!tab.surface_props().aria_selected);
}

#[test]
fn test_disabled_toggles_on_update() {
    let mut tab = Tab::mount(TabProps::new("t"));
    tab.update(TabProps::new("t").disabled(true));
    assert_eq!(tab.surface_props().tab_index, -1);
    assert!(tab.surface_props().attribute("aria-disabled").is_some());

    tab.update(TabProps::new("t"));
    assert_eq!(tab.surface_props().tab_index, 0);
    assert!(tab.surface_props().attribute("aria-disabled").is_none());
}

#[test]
fn test_shared_style_props() {
    let tab = Tab::mount(
        TabProps::new("t")
            .active(true)
            .orientation(Orientation::Vertical)
            .width_mode(WidthMode::Fill),
    );
    let style = tab.surface_props().style;
    assert!(style.active);
    assert!(!style.disabled);
    assert_eq!(style.orientation, Orientation::Vertical);
    assert_eq!(style.width_mode, WidthMode::Fill);
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
fn test_override_attrs_reach_surface() {
    let overrides = Overrides::tab(
        Override::new().props(OverrideProps::default().attr("data-testid", "logs-tab")),
    );
    let tab = Tab::mount(TabProps::new("t").overrides(overrides));

    let rendered = tab.rendered().expect("default surface is used");
    assert_eq!(rendered.props.attribute("data-testid").as_deref(), Some("logs-tab"));
}

#[test]
fn test_override_component_replaces_default_surface() {
    let (overrides, log) = recording(false);
    let tab = Tab::mount(TabProps::new("t").active(true).overrides(overrides));

    // The recording surface keeps no rendered output of its own
    assert!(tab.rendered().is_none());
    let log = log.borrow();
    assert_eq!(log.renders.len(), 1);
    assert_eq!(log.renders[0].id, "t");
    assert!(log.renders[0].aria_selected);
}

#[test]
fn test_unknown_attribute_is_absent() {
    let tab = Tab::mount(TabProps::new("t"));
    assert_eq!(tab.surface_props().attribute("aria-expanded"), None);
    assert_eq!(tab.surface_props().attribute("title"), None);
}

// ============================================================================
// Default surface rendering
// ============================================================================

#[test]
fn test_auto_width_pads_title() {
    let tab = Tab::mount(TabProps::new("t").title("Logs"));
    let rendered = tab.rendered().unwrap();
    assert_eq!(rendered.line, " Logs ");
    assert_eq!(rendered.width(), 6);
}

#[test]
fn test_text_children_used_without_title() {
    let tab = Tab::mount(TabProps::new("t").text("Metrics"));
    assert_eq!(tab.rendered().unwrap().line, " Metrics ");

    let tab = Tab::mount(TabProps::new("t").title("Logs").text("Metrics"));
    assert_eq!(tab.rendered().unwrap().line, " Logs ");

    let tab = Tab::mount(TabProps::new("t").children(Content::None));
    assert_eq!(tab.rendered().unwrap().line, "  ");
}

#[test]
fn test_fill_width_uses_slot() {
    let viewport = Rc::new(RefCell::new(Viewport::new(40, 1)));
    let placement = Placement::new(viewport, Rect::new(0, 0, 10, 1));
    let tab = Tab::mount(
        TabProps::new("t")
            .title("Logs")
            .width_mode(WidthMode::Fill)
            .placement(placement),
    );
    let rendered = tab.rendered().unwrap();
    assert_eq!(rendered.line, "   Logs   ");
    assert_eq!(rendered.width(), 10);
}

#[test]
fn test_equal_width_truncates_long_titles() {
    let viewport = Rc::new(RefCell::new(Viewport::new(40, 1)));
    let placement = Placement::new(viewport, Rect::new(0, 0, 5, 1));
    let tab = Tab::mount(
        TabProps::new("t")
            .title("Notifications")
            .width_mode(WidthMode::Equal)
            .placement(placement),
    );
    assert_eq!(tab.rendered().unwrap().line, "Notif");
}

#[test]
fn test_rerender_on_title_update() {
    let mut tab = Tab::mount(TabProps::new("t").title("Logs"));
    tab.update(TabProps::new("t").title("Traces"));
    assert_eq!(tab.rendered().unwrap().line, " Traces ");
    assert_eq!(tab.rendered().unwrap().props.title, "Traces");
}
