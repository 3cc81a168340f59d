//! The interactive vector entity and the scene-wide selection registry.
//!
//! A `Vector` is created once per toolbox slot and recycled forever after:
//! toolbox -> on-graph -> (optionally) animating back -> toolbox. All
//! geometric state lives in observable properties and is mutated only
//! through the methods here, which snap, clamp and guard before writing.

use crate::algorithms::{components, snap};
use crate::animation::{ReturnAnimation, RETURN_DURATION};
use crate::model::{ComponentArrow, Vec2};
use crate::observe::Property;
use crate::vector_set::SetCore;
use crate::{SceneContext, SlotConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct Vector {
    ctx: Rc<SceneContext>,
    owner: Weak<SetCore>,
    me: Weak<Vector>,
    slot: usize,
    symbol: Option<String>,
    home: Vec2,
    placement_components: Vec2,
    tail: Property<Vec2>,
    components: Property<Vec2>,
    is_on_graph: Property<bool>,
    is_selected: Property<bool>,
    animate_back: Property<bool>,
    is_animating: Property<bool>,
    animation: RefCell<Option<ReturnAnimation>>,
}

impl Vector {
    pub(crate) fn new(
        ctx: Rc<SceneContext>,
        owner: Weak<SetCore>,
        slot: usize,
        cfg: &SlotConfig,
    ) -> Rc<Vector> {
        Rc::new_cyclic(|me| Vector {
            ctx,
            owner,
            me: me.clone(),
            slot,
            symbol: cfg.symbol.clone(),
            home: cfg.home,
            placement_components: cfg.placement_components,
            tail: Property::new(cfg.home),
            components: Property::new(Vec2::ZERO),
            is_on_graph: Property::new(false),
            is_selected: Property::new(false),
            animate_back: Property::new(false),
            is_animating: Property::new(false),
            animation: RefCell::new(None),
        })
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Toolbox slot position the vector rests at and returns to.
    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn tail(&self) -> &Property<Vec2> {
        &self.tail
    }

    pub fn components(&self) -> &Property<Vec2> {
        &self.components
    }

    pub fn is_on_graph(&self) -> &Property<bool> {
        &self.is_on_graph
    }

    pub fn is_selected(&self) -> &Property<bool> {
        &self.is_selected
    }

    pub fn animate_back(&self) -> &Property<bool> {
        &self.animate_back
    }

    pub fn is_animating(&self) -> &Property<bool> {
        &self.is_animating
    }

    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.tail.get() + self.components.get()
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.components.get().magnitude()
    }

    /// Direction in radians, `None` while the vector has zero length.
    pub fn angle(&self) -> Option<f32> {
        self.components.get().angle()
    }

    /// True from the moment a toolbox return is requested until the
    /// animation lands.
    pub fn is_returning(&self) -> bool {
        self.animate_back.get() || self.is_animating.get()
    }

    pub(crate) fn owned_by(&self, core: &Rc<SetCore>) -> bool {
        self.owner.ptr_eq(&Rc::downgrade(core))
    }

    /// The derived x/y component arrows under the scene's current style.
    pub fn component_arrows(&self) -> Option<(ComponentArrow, ComponentArrow)> {
        components::component_arrows(
            &self.ctx.graph,
            self.ctx.component_style.get(),
            self.tail.get(),
            self.components.get(),
        )
    }

    /// Takes the vector out of the toolbox: seeds the slot's default
    /// components, snaps the tail near `candidate_tail` and activates it in
    /// the owning set. Rejects non-finite input, a vector already on the
    /// graph, and a vector still animating home.
    pub fn place_on_graph(&self, candidate_tail: Vec2) -> bool {
        if !candidate_tail.is_finite() {
            return false;
        }
        if self.is_on_graph.get() || self.is_returning() {
            return false;
        }
        let (owner, me) = match (self.owner.upgrade(), self.me.upgrade()) {
            (Some(o), Some(m)) => (o, m),
            _ => return false,
        };
        let seed = self.ctx.graph.constrain_components(self.placement_components);
        let tail = snap::snap_tail(&self.ctx.graph, seed, candidate_tail);
        // Seeded components obey the active snap policy too.
        let comps = snap::snap_components(
            &self.ctx.graph,
            self.ctx.snap_mode.get(),
            self.ctx.polar_angle_increment,
            tail,
            tail + seed,
        );
        self.components.set(comps);
        self.tail.set(tail);
        owner.activate(&me)
    }

    /// Translates the whole arrow: the tail snaps to the grid inside the
    /// region that keeps the tip on the graph, components ride along
    /// unchanged. No-op while animating home.
    pub fn move_tail_to(&self, candidate: Vec2) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        if self.is_returning() || !self.is_on_graph.get() {
            return false;
        }
        let tail = snap::snap_tail(&self.ctx.graph, self.components.get(), candidate);
        self.tail.set(tail);
        true
    }

    /// Scales and rotates by dragging the tip. The candidate is clamped to
    /// the graph, then quantized under the scene's current snap mode.
    /// No-op while animating home.
    pub fn move_tip_to(&self, candidate: Vec2) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        if self.is_returning() || !self.is_on_graph.get() {
            return false;
        }
        let comps = snap::snap_components(
            &self.ctx.graph,
            self.ctx.snap_mode.get(),
            self.ctx.polar_angle_increment,
            self.tail.get(),
            candidate,
        );
        self.components.set(comps);
        true
    }

    /// Selecting deselects whatever was selected before; a vector animating
    /// home cannot be selected.
    pub fn set_selected(&self, selected: bool) -> bool {
        let me = match self.me.upgrade() {
            Some(m) => m,
            None => return false,
        };
        if selected {
            if self.is_returning() {
                return false;
            }
            self.ctx.selection.claim_member(&me);
        } else {
            self.ctx.selection.release_member(&me);
        }
        true
    }

    /// Instant removal, no animation: deactivates, clears flags and puts the
    /// vector straight back in its slot. False when it was not on the graph.
    pub fn pop_off_graph(&self) -> bool {
        if !self.is_on_graph.get() {
            return false;
        }
        let me = match self.me.upgrade() {
            Some(m) => m,
            None => return false,
        };
        self.ctx.selection.release_member(&me);
        if let Some(owner) = self.owner.upgrade() {
            owner.deactivate(&me);
        }
        *self.animation.borrow_mut() = None;
        self.animate_back.set(false);
        self.is_animating.set(false);
        self.is_on_graph.set(false);
        self.tail.set(self.home);
        self.components.set(Vec2::ZERO);
        true
    }

    /// Starts the glide back to the toolbox slot. The vector stops
    /// contributing to the resultant immediately; `is_on_graph` stays true
    /// until the animation lands. Always succeeds, and is idempotent while
    /// a return is already in flight.
    pub fn return_to_toolbox(&self) -> bool {
        if self.is_returning() {
            return true;
        }
        if !self.is_on_graph.get() {
            return true;
        }
        let (owner, me) = match (self.owner.upgrade(), self.me.upgrade()) {
            (Some(o), Some(m)) => (o, m),
            _ => return false,
        };
        self.ctx.selection.release_member(&me);
        owner.deactivate(&me);
        self.animate_back.set(true);
        *self.animation.borrow_mut() =
            Some(ReturnAnimation::new(self.tail.get(), self.home, RETURN_DURATION));
        true
    }

    /// Back to the initial pre-placement state regardless of any in-flight
    /// animation: slot position, zero components, all flags down.
    pub fn reset(&self) {
        if let Some(me) = self.me.upgrade() {
            self.ctx.selection.release_member(&me);
            if let Some(owner) = self.owner.upgrade() {
                owner.deactivate(&me);
            }
        }
        *self.animation.borrow_mut() = None;
        self.animate_back.set(false);
        self.is_animating.set(false);
        self.is_on_graph.set(false);
        self.is_selected.set(false);
        self.tail.set(self.home);
        self.components.set(Vec2::ZERO);
    }

    // Advances an in-flight return. The animation borrow is released before
    // any property write so observers may call back into this vector.
    pub(crate) fn step(&self, dt: f32) {
        let stepped = {
            let mut anim = self.animation.borrow_mut();
            match anim.as_mut() {
                Some(a) => {
                    let (pos, done) = a.advance(dt);
                    if done {
                        *anim = None;
                    }
                    Some((pos, done))
                }
                None => return,
            }
        };
        let Some((pos, done)) = stepped else { return };
        if self.animate_back.get() {
            self.animate_back.set(false);
            if !done {
                self.is_animating.set(true);
            }
        }
        if done {
            self.tail.set(self.home);
            self.components.set(Vec2::ZERO);
            self.is_animating.set(false);
            self.is_on_graph.set(false);
        } else {
            self.tail.set(pos);
        }
    }
}

/// The always-present sum of one vector set's active members.
///
/// Read-only by construction: it has no drag mutators and no toolbox
/// lifecycle, so it can never animate back or leave the graph. Its
/// components are rewritten only by the owning set's recomputation.
pub struct ResultantVector {
    ctx: Rc<SceneContext>,
    me: Weak<ResultantVector>,
    tail: Property<Vec2>,
    components: Property<Vec2>,
    is_defined: Property<bool>,
    is_selected: Property<bool>,
    visible: Property<bool>,
}

impl ResultantVector {
    pub(crate) fn new(ctx: Rc<SceneContext>, tail: Vec2, visible: bool) -> Rc<ResultantVector> {
        Rc::new_cyclic(|me| ResultantVector {
            ctx,
            me: me.clone(),
            tail: Property::new(tail),
            components: Property::new(Vec2::ZERO),
            is_defined: Property::new(false),
            is_selected: Property::new(false),
            visible: Property::new(visible),
        })
    }

    pub fn tail(&self) -> &Property<Vec2> {
        &self.tail
    }

    pub fn components(&self) -> &Property<Vec2> {
        &self.components
    }

    /// False while the owning set has no active vectors.
    pub fn is_defined(&self) -> &Property<bool> {
        &self.is_defined
    }

    pub fn is_selected(&self) -> &Property<bool> {
        &self.is_selected
    }

    pub fn visible(&self) -> &Property<bool> {
        &self.visible
    }

    /// The resultant lives on the graph permanently.
    pub fn is_on_graph(&self) -> bool {
        true
    }

    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.tail.get() + self.components.get()
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.components.get().magnitude()
    }

    pub fn angle(&self) -> Option<f32> {
        self.components.get().angle()
    }

    pub fn component_arrows(&self) -> Option<(ComponentArrow, ComponentArrow)> {
        components::component_arrows(
            &self.ctx.graph,
            self.ctx.component_style.get(),
            self.tail.get(),
            self.components.get(),
        )
    }

    /// A hidden or undefined resultant cannot be selected.
    pub fn set_selected(&self, selected: bool) -> bool {
        let me = match self.me.upgrade() {
            Some(m) => m,
            None => return false,
        };
        if selected {
            if !self.visible.get() || !self.is_defined.get() {
                return false;
            }
            self.ctx.selection.claim_sum(&me);
        } else {
            self.ctx.selection.release_sum(&me);
        }
        true
    }

    /// Hiding the resultant also deselects it.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.set(visible) && !visible {
            if let Some(me) = self.me.upgrade() {
                self.ctx.selection.release_sum(&me);
            }
        }
    }

    // Sum maintenance, called only from the owning set's recomputation.
    // Components first so is_defined observers read a fresh sum.
    pub(crate) fn apply_sum(&self, sum: Vec2, defined: bool) {
        self.components.set(sum);
        self.is_defined.set(defined);
        if !defined && self.is_selected.get() {
            if let Some(me) = self.me.upgrade() {
                self.ctx.selection.release_sum(&me);
            }
        }
    }

}

enum Selected {
    Member(Weak<Vector>),
    Sum(Weak<ResultantVector>),
}

/// At most one vector, or one visible resultant, is selected per scene.
pub(crate) struct Selection {
    current: RefCell<Option<Selected>>,
}

impl Selection {
    pub(crate) fn new() -> Selection {
        Selection { current: RefCell::new(None) }
    }

    fn drop_previous(&self, prev: Option<Selected>) {
        match prev {
            Some(Selected::Member(w)) => {
                if let Some(v) = w.upgrade() {
                    v.is_selected.set(false);
                }
            }
            Some(Selected::Sum(w)) => {
                if let Some(r) = w.upgrade() {
                    r.is_selected.set(false);
                }
            }
            None => {}
        }
    }

    pub(crate) fn claim_member(&self, v: &Rc<Vector>) {
        if v.is_selected.get() {
            return;
        }
        let prev = self.current.borrow_mut().replace(Selected::Member(Rc::downgrade(v)));
        self.drop_previous(prev);
        v.is_selected.set(true);
    }

    pub(crate) fn claim_sum(&self, r: &Rc<ResultantVector>) {
        if r.is_selected.get() {
            return;
        }
        let prev = self.current.borrow_mut().replace(Selected::Sum(Rc::downgrade(r)));
        self.drop_previous(prev);
        r.is_selected.set(true);
    }

    pub(crate) fn release_member(&self, v: &Rc<Vector>) {
        let held = {
            let mut cur = self.current.borrow_mut();
            match cur.as_ref() {
                Some(Selected::Member(w)) if w.ptr_eq(&Rc::downgrade(v)) => cur.take(),
                _ => None,
            }
        };
        if held.is_some() {
            v.is_selected.set(false);
        }
    }

    pub(crate) fn release_sum(&self, r: &Rc<ResultantVector>) {
        let held = {
            let mut cur = self.current.borrow_mut();
            match cur.as_ref() {
                Some(Selected::Sum(w)) if w.ptr_eq(&Rc::downgrade(r)) => cur.take(),
                _ => None,
            }
        };
        if held.is_some() {
            r.is_selected.set(false);
        }
    }

    pub(crate) fn clear(&self) {
        let prev = self.current.borrow_mut().take();
        self.drop_previous(prev);
    }
}
