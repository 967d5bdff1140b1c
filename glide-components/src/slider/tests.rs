use glide_ui::{
    StyleProperty,
    headless::{HeadlessDocument, HeadlessElement},
};

use super::*;

struct Page {
    document: HeadlessDocument,
    container: HeadlessElement,
    list: HeadlessElement,
    items: Vec<HeadlessElement>,
    prev: HeadlessElement,
    next: HeadlessElement,
}

fn page(container_width: f32, item_width: f32, gap: &str, count: usize) -> Page {
    let document = HeadlessDocument::new();
    let container = HeadlessElement::new("div")
        .class("slider")
        .width(container_width);
    let prev = HeadlessElement::new("button").attr("data-slider-prevBtn", "");
    let next = HeadlessElement::new("button").attr("data-slider-nextBtn", "");
    let list = HeadlessElement::new("ul")
        .class("slider-list")
        .computed("gap", gap);
    let items: Vec<HeadlessElement> = (0..count)
        .map(|_| {
            HeadlessElement::new("li")
                .class("slider-list__item")
                .width(item_width)
        })
        .collect();
    for item in &items {
        list.append(item);
    }
    container.append(&prev);
    container.append(&list);
    container.append(&next);
    document.body().append(&container);
    Page {
        document,
        container,
        list,
        items,
        prev,
        next,
    }
}

fn scenario_page() -> Page {
    page(1000.0, 300.0, "20px", 6)
}

fn attach(page: &Page) -> Slider {
    Slider::try_attach(page.document.to_ref(), SliderArgs::default())
        .expect("fixture page has a slider")
}

fn strip_offset(page: &Page) -> Option<String> {
    page.list.style(StyleProperty::Transform)
}

#[test]
fn attach_measures_and_renders_start() {
    let page = scenario_page();
    let slider = attach(&page);

    assert!(slider.is_attached());
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.max_index(), 3);
    assert_eq!(slider.state().item_width(), Px(300.0));
    assert_eq!(slider.state().gap(), Px(20.0));
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(0px)"));
    assert_eq!(
        page.list.style(StyleProperty::Transition).as_deref(),
        Some("none")
    );
    assert!(page.prev.is_disabled());
    assert!(!page.next.is_disabled());
}

#[test]
fn overshooting_target_clamps_to_last_page() {
    let page = scenario_page();
    let slider = attach(&page);

    slider.go_to(10, Motion::Animated);

    assert_eq!(slider.current_index(), 3);
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(-960px)"));
    assert_eq!(
        page.list.style(StyleProperty::Transition),
        Some(page_transition().to_string())
    );
    assert!(page.next.is_disabled());
    assert!(!page.prev.is_disabled());
}

#[test]
fn negative_target_clamps_to_start_without_transition() {
    let page = scenario_page();
    let slider = attach(&page);
    slider.go_to(2, Motion::Animated);

    slider.go_to(-5, Motion::Instant);

    assert_eq!(slider.current_index(), 0);
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(0px)"));
    assert_eq!(
        page.list.style(StyleProperty::Transition).as_deref(),
        Some("none")
    );
    assert!(page.prev.is_disabled());
    assert!(!page.next.is_disabled());
}

#[test]
fn growing_container_clamps_index_and_disables_both_controls() {
    let page = scenario_page();
    let slider = attach(&page);
    slider.go_to(2, Motion::Animated);

    page.container.set_width(2000.0);

    assert_eq!(slider.max_index(), 0);
    assert_eq!(slider.current_index(), 0);
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(0px)"));
    assert!(page.prev.is_disabled());
    assert!(page.next.is_disabled());
}

#[test]
fn empty_strip_stays_at_default_state() {
    let page = page(1000.0, 300.0, "20px", 0);
    let slider = attach(&page);

    slider.remeasure();
    slider.go_to(3, Motion::Animated);
    slider.step(NavDirection::Next);

    assert_eq!(slider.state(), PaginationState::default());
    assert_eq!(strip_offset(&page), None);
    assert!(page.prev.is_disabled());
    assert!(page.next.is_disabled());
}

#[test]
fn repeated_remeasure_has_no_side_effects() {
    let page = scenario_page();
    let slider = attach(&page);
    slider.go_to(2, Motion::Animated);
    let before = slider.state();

    for _ in 0..5 {
        slider.remeasure();
    }

    assert_eq!(slider.state(), before);
    assert_eq!(page.container.size_observer_count(), 1);
    assert_eq!(page.prev.click_listener_count(), 1);
    assert_eq!(page.next.click_listener_count(), 1);
    assert_eq!(page.document.pending_frames(), 1);
}

#[test]
fn shrinking_container_keeps_index() {
    let page = scenario_page();
    let slider = attach(&page);
    slider.go_to(2, Motion::Animated);

    page.container.set_width(600.0);

    assert_eq!(slider.max_index(), 5);
    assert_eq!(slider.current_index(), 2);
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(-640px)"));
}

#[test]
fn clicks_page_one_item_at_a_time() {
    let page = scenario_page();
    let slider = attach(&page);

    assert!(page.next.click());
    assert!(page.next.click());
    assert_eq!(slider.current_index(), 2);

    assert!(page.prev.click());
    assert_eq!(slider.current_index(), 1);
    assert_eq!(strip_offset(&page).as_deref(), Some("translateX(-320px)"));
}

#[test]
fn disabled_control_ignores_clicks() {
    let page = scenario_page();
    let slider = attach(&page);

    assert!(!page.prev.click());
    slider.go_to(3, Motion::Instant);
    assert!(!page.next.click());
    assert_eq!(slider.current_index(), 3);
}

#[test]
fn affordances_track_bounds_at_every_index() {
    let page = scenario_page();
    let slider = attach(&page);

    for target in -2..6 {
        slider.go_to(target, Motion::Instant);
        let state = slider.state();
        assert_eq!(page.prev.is_disabled(), state.current_index() == 0);
        assert_eq!(
            page.next.is_disabled(),
            state.current_index() >= state.max_index()
        );
        let (opacity, cursor) = if page.next.is_disabled() {
            ("0.3", "not-allowed")
        } else {
            ("1", "pointer")
        };
        assert_eq!(page.next.style(StyleProperty::Opacity).as_deref(), Some(opacity));
        assert_eq!(page.next.style(StyleProperty::Cursor).as_deref(), Some(cursor));
    }
}

#[test]
fn pop_effect_runs_in_two_phases() {
    let page = scenario_page();
    let _slider = attach(&page);
    let item = &page.items[1];
    assert_eq!(
        item.style(StyleProperty::Transition),
        Some(item_transition().to_string())
    );

    page.next.click();

    assert_eq!(item.style(StyleProperty::Transition).as_deref(), Some("none"));
    assert_eq!(item.style(StyleProperty::Transform).as_deref(), Some("scale(0.8)"));
    assert_eq!(item.style(StyleProperty::Opacity).as_deref(), Some("0"));
    assert_eq!(page.document.pending_frames(), 1);

    assert_eq!(page.document.run_frame(), 1);

    assert_eq!(
        item.style(StyleProperty::Transition),
        Some(item_transition().to_string())
    );
    assert_eq!(item.style(StyleProperty::Transform).as_deref(), Some("scale(1)"));
    assert_eq!(item.style(StyleProperty::Opacity).as_deref(), Some("1"));
}

#[test]
fn instant_moves_and_plain_sliders_skip_the_pop() {
    let page = scenario_page();
    let slider = attach(&page);
    slider.go_to(2, Motion::Instant);
    assert_eq!(page.document.pending_frames(), 0);
    assert_eq!(page.items[2].style(StyleProperty::Opacity), None);

    let plain_page = scenario_page();
    let plain = Slider::try_attach(
        plain_page.document.to_ref(),
        SliderArgs::default().enter_effect(EnterEffect::None),
    )
    .expect("fixture page has a slider");
    plain.step(NavDirection::Next);

    assert_eq!(plain.current_index(), 1);
    assert_eq!(plain_page.document.pending_frames(), 0);
    assert_eq!(plain_page.items[0].style(StyleProperty::Transition), None);
    assert_eq!(plain_page.items[1].style(StyleProperty::Opacity), None);
}

#[test]
fn unreadable_gap_counts_as_zero() {
    let page = page(900.0, 300.0, "normal", 6);
    let slider = attach(&page);

    assert_eq!(slider.state().gap(), Px::ZERO);
    assert_eq!(slider.max_index(), 3);

    page.list.set_computed("gap", "10px 40px");
    slider.remeasure();
    assert_eq!(slider.state().gap(), Px(40.0));
}

#[test]
fn missing_container_leaves_page_untouched() {
    let page = scenario_page();
    let args = SliderArgs::default().selector(".carousel");

    let err = Slider::try_attach(page.document.to_ref(), args.clone()).expect_err("attach must fail");
    assert_eq!(
        err,
        AttachError::ContainerNotFound {
            selector: ".carousel".to_string()
        }
    );
    assert!(Slider::attach(page.document.to_ref(), args).is_none());
    assert_eq!(page.list.style_writes(), 0);
    assert_eq!(page.container.size_observer_count(), 0);
}

#[test]
fn missing_list_is_reported() {
    let document = HeadlessDocument::new();
    let container = HeadlessElement::new("div").class("slider");
    document.body().append(&container);

    let err = Slider::try_attach(document.to_ref(), SliderArgs::default()).expect_err("attach must fail");

    assert!(matches!(err, AttachError::MissingList { .. }));
    assert_eq!(container.size_observer_count(), 0);
}

#[test]
fn missing_controls_are_optional() {
    let page = scenario_page();
    page.prev.remove();
    page.next.remove();
    let slider = attach(&page);

    slider.go_to(1, Motion::Animated);

    assert_eq!(slider.current_index(), 1);
    assert_eq!(page.next.style_writes(), 0);
}

#[test]
fn second_slider_cannot_claim_the_same_container() {
    let page = scenario_page();
    let first = attach(&page);

    let err = Slider::try_attach(page.document.to_ref(), SliderArgs::default()).expect_err("attach must fail");
    assert!(matches!(err, AttachError::ContainerClaimed { .. }));
    assert_eq!(page.next.click_listener_count(), 1);

    first.detach();
    let second = attach(&page);
    assert!(second.is_attached());
}

#[test]
fn detach_removes_listeners_and_observers() {
    let page = scenario_page();
    let slider = attach(&page);

    slider.detach();

    assert_eq!(page.container.size_observer_count(), 0);
    assert_eq!(page.prev.click_listener_count(), 0);
    assert_eq!(page.next.click_listener_count(), 0);
    let writes = page.list.style_writes();
    page.container.set_width(400.0);
    assert_eq!(page.list.style_writes(), writes);
}

#[test]
fn removed_container_tears_the_slider_down() {
    let page = scenario_page();
    let slider = attach(&page);

    page.container.remove();
    page.container.set_width(0.0);

    assert!(!slider.is_attached());
    assert_eq!(page.container.size_observer_count(), 0);
    slider.go_to(2, Motion::Animated);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn mounts_immediately_on_a_loaded_page() {
    let page = scenario_page();

    let pending = mount_when_ready(page.document.to_ref(), SliderArgs::default());

    assert!(pending.is_mounted());
    assert_eq!(pending.with(Slider::max_index), Some(3));
}

#[test]
fn mounts_after_content_loaded() {
    let page = scenario_page();
    page.document.set_loading(true);

    let pending = mount_when_ready(page.document.to_ref(), SliderArgs::default());
    assert!(!pending.is_mounted());
    assert_eq!(page.container.size_observer_count(), 0);

    page.document.finish_loading();

    assert!(pending.is_mounted());
    let slider = pending.take().expect("mounted");
    assert_eq!(slider.selector(), DEFAULT_SELECTOR);
    assert_eq!(page.container.size_observer_count(), 1);
}
