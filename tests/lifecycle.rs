use resultant::animation::RETURN_DURATION;
use resultant::geometry::tolerance::{approx_eq, EPS_POS};
use resultant::model::Vec2;
use resultant::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;

fn scene() -> Scene {
    Scene::new(&SceneConfig::default())
}

#[test]
fn placement_seeds_slot_defaults_and_activates() {
    let s = scene();
    let set = &s.sets()[0];
    let v = set.vector(0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.is_on_graph().get());
    assert!(set.is_active(&v));
    assert_eq!(v.components().get(), Vec2::new(5.0, 5.0));
    assert_eq!(v.tail().get(), Vec2::new(20.0, 10.0));
    assert_eq!(set.on_graph_count().get(), 1);
}

#[test]
fn return_glides_home_and_lands_reset() {
    let s = scene();
    let set = &s.sets()[0];
    let v = set.vector(0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    let start = v.tail().get();

    assert!(v.return_to_toolbox());
    // contribution gone immediately, flag keeps the vector on the graph
    assert!(!set.is_active(&v));
    assert!(!set.resultant().is_defined().get());
    assert!(v.is_on_graph().get());
    assert!(v.animate_back().get());
    assert!(!v.is_animating().get());

    assert!(s.step(0.1));
    assert!(!v.animate_back().get());
    assert!(v.is_animating().get());
    let mid = v.tail().get();
    assert!(mid != start && mid != v.home(), "tail should be in flight, got {:?}", mid);

    assert!(s.step(RETURN_DURATION));
    assert!(!v.is_animating().get());
    assert!(!v.animate_back().get());
    assert!(!v.is_on_graph().get());
    assert_eq!(v.tail().get(), v.home());
    assert_eq!(v.components().get(), Vec2::ZERO);
}

#[test]
fn eased_return_passes_near_the_midpoint() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    let from = v.tail().get();
    assert!(v.return_to_toolbox());
    assert!(s.step(RETURN_DURATION * 0.5));
    let mid = v.tail().get();
    let expected = Vec2::new((from.x + v.home().x) * 0.5, (from.y + v.home().y) * 0.5);
    assert!(approx_eq(mid.x, expected.x, EPS_POS));
    assert!(approx_eq(mid.y, expected.y, EPS_POS));
}

#[test]
fn drag_mutators_rejected_while_returning() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.return_to_toolbox());

    assert!(!v.move_tip_to(Vec2::new(5.0, 5.0)));
    assert!(!v.move_tail_to(Vec2::new(5.0, 5.0)));
    assert!(!v.place_on_graph(Vec2::new(5.0, 5.0)));
    assert!(!v.set_selected(true));
    // the return itself stays idempotent
    assert!(v.return_to_toolbox());

    assert!(s.step(0.2));
    assert!(!v.move_tip_to(Vec2::new(5.0, 5.0)), "rejected through the whole flight");
    assert!(s.step(RETURN_DURATION));
    assert!(v.place_on_graph(Vec2::new(5.0, 5.0)), "recycled after landing");
}

#[test]
fn return_flags_stay_mutually_exclusive() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    let both_seen = Rc::new(RefCell::new(false));
    {
        let v2 = v.clone();
        let seen = both_seen.clone();
        v.animate_back().observe(move |_, _| {
            if v2.is_animating().get() && v2.animate_back().get() {
                *seen.borrow_mut() = true;
            }
        });
        let v3 = v.clone();
        let seen = both_seen.clone();
        v.is_animating().observe(move |_, _| {
            if v3.is_animating().get() && v3.animate_back().get() {
                *seen.borrow_mut() = true;
            }
        });
    }
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.return_to_toolbox());
    for _ in 0..20 {
        s.step(RETURN_DURATION / 10.0);
    }
    assert!(!*both_seen.borrow(), "animate_back and is_animating overlapped");
    assert!(!v.is_on_graph().get());
}

#[test]
fn pop_is_instant() {
    let s = scene();
    let set = &s.sets()[0];
    let v = set.vector(0).unwrap().clone();
    assert!(!v.pop_off_graph(), "nothing to pop in the toolbox");
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.set_selected(true));
    assert!(v.pop_off_graph());
    assert!(!v.is_on_graph().get());
    assert!(!v.is_selected().get());
    assert_eq!(v.tail().get(), v.home());
    assert_eq!(v.components().get(), Vec2::ZERO);
    assert_eq!(set.on_graph_count().get(), 0);
    assert!(!set.resultant().is_defined().get());
}

#[test]
fn pop_cancels_a_return_in_flight() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.return_to_toolbox());
    assert!(s.step(0.1));
    assert!(v.is_animating().get());
    assert!(v.pop_off_graph());
    assert!(!v.is_animating().get());
    assert!(!v.animate_back().get());
    assert!(!v.is_on_graph().get());
    assert_eq!(v.tail().get(), v.home());
    // further ticks change nothing
    assert!(s.step(1.0));
    assert_eq!(v.tail().get(), v.home());
}

#[test]
fn at_most_one_thing_selected_per_scene() {
    let s = scene();
    let set = &s.sets()[0];
    let a = set.vector(0).unwrap().clone();
    let b = set.vector(1).unwrap().clone();
    assert!(a.place_on_graph(Vec2::new(0.0, 0.0)));
    assert!(b.place_on_graph(Vec2::new(10.0, 10.0)));

    assert!(a.set_selected(true));
    assert!(a.is_selected().get());
    assert!(b.set_selected(true));
    assert!(!a.is_selected().get(), "selecting b must deselect a");
    assert!(b.is_selected().get());

    let r = set.resultant().clone();
    assert!(r.set_selected(true));
    assert!(!b.is_selected().get());
    assert!(r.is_selected().get());

    assert!(a.set_selected(true));
    assert!(!r.is_selected().get());

    assert!(a.set_selected(false));
    assert!(!a.is_selected().get());
    assert!(!b.is_selected().get());
    assert!(!r.is_selected().get());
}

#[test]
fn hidden_or_undefined_resultant_cannot_be_selected() {
    let s = scene();
    let set = &s.sets()[0];
    let r = set.resultant().clone();
    // undefined: nothing on the graph yet
    assert!(!r.set_selected(true));

    let v = set.vector(0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(0.0, 0.0)));
    assert!(r.set_selected(true));
    assert!(r.is_selected().get());

    r.set_visible(false);
    assert!(!r.is_selected().get(), "hiding deselects");
    assert!(!r.set_selected(true), "hidden resultant rejects selection");

    r.set_visible(true);
    assert!(r.set_selected(true));
    assert!(v.pop_off_graph());
    assert!(!r.is_selected().get(), "undefined resultant loses selection");
}

#[test]
fn selection_survives_nothing_after_scene_reset() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(0.0, 0.0)));
    assert!(v.set_selected(true));
    s.reset();
    assert!(!v.is_selected().get());
    assert!(!v.is_on_graph().get());
    assert_eq!(s.on_graph_total(), 0);
}

#[test]
fn scene_step_rejects_bad_deltas() {
    let s = scene();
    let v = s.vector(0, 0).unwrap().clone();
    assert!(v.place_on_graph(Vec2::new(20.0, 10.0)));
    assert!(v.return_to_toolbox());
    let tail = v.tail().get();
    assert!(!s.step(0.0));
    assert!(!s.step(-0.5));
    assert!(!s.step(f32::NAN));
    assert_eq!(v.tail().get(), tail);
    assert!(v.animate_back().get(), "phase must not advance on rejected ticks");
}
