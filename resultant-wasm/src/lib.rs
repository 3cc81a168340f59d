use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Scene {
    pub(crate) inner: resultant::Scene,
    pub(crate) revision: Rc<Cell<u64>>,
}

impl Scene {
    pub fn rs_new(config: &resultant::SceneConfig) -> Scene {
        let inner = resultant::Scene::new(config);
        let revision = Rc::new(Cell::new(0u64));
        watch(inner.snap_mode(), &revision);
        watch(inner.component_style(), &revision);
        for set in inner.sets() {
            watch(set.on_graph_count(), &revision);
            for v in set.vectors() {
                watch(v.tail(), &revision);
                watch(v.components(), &revision);
                watch(v.is_on_graph(), &revision);
                watch(v.is_selected(), &revision);
                watch(v.animate_back(), &revision);
                watch(v.is_animating(), &revision);
            }
            let r = set.resultant();
            watch(r.tail(), &revision);
            watch(r.components(), &revision);
            watch(r.is_defined(), &revision);
            watch(r.is_selected(), &revision);
            watch(r.visible(), &revision);
        }
        Scene { inner, revision }
    }

    pub fn rs_revision(&self) -> u64 {
        self.revision.get()
    }
}

// Every property change bumps one shared counter, so the JS side can
// dirty-check a frame with a single integer compare.
fn watch<T: Copy + PartialEq + 'static>(
    p: &resultant::observe::Property<T>,
    revision: &Rc<Cell<u64>>,
) {
    let revision = revision.clone();
    p.observe(move |_, _| revision.set(revision.get() + 1));
}
