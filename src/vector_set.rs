//! Active-vector membership and resultant maintenance.
//!
//! A set owns a fixed pool of vectors (one per toolbox slot) and an ordered
//! list of the active ones; insertion order is z-order. The resultant is
//! recomputed synchronously on every membership change and, via a per-member
//! subscription, on every component change. Subscriptions are established
//! once at activation and torn down at deactivation.

use crate::algorithms::snap;
use crate::model::{ColorPalette, Vec2};
use crate::observe::{Property, SubscriptionId};
use crate::vector::{ResultantVector, Vector};
use crate::{SceneContext, VectorSetConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct VectorSet {
    core: Rc<SetCore>,
}

pub(crate) struct SetCore {
    ctx: Rc<SceneContext>,
    palette: ColorPalette,
    initial_resultant_visible: bool,
    pool: Vec<Rc<Vector>>,
    active: RefCell<Vec<Rc<Vector>>>,
    subscriptions: RefCell<Vec<(usize, SubscriptionId)>>,
    resultant: Rc<ResultantVector>,
    on_graph_count: Property<usize>,
}

impl VectorSet {
    pub(crate) fn new(ctx: Rc<SceneContext>, cfg: &VectorSetConfig) -> VectorSet {
        let core = Rc::new_cyclic(|weak: &Weak<SetCore>| {
            let pool = cfg
                .slots
                .iter()
                .enumerate()
                .map(|(slot, slot_cfg)| Vector::new(ctx.clone(), weak.clone(), slot, slot_cfg))
                .collect();
            let resultant = ResultantVector::new(
                ctx.clone(),
                ctx.graph.bounds().center(),
                cfg.resultant_visible,
            );
            SetCore {
                ctx: ctx.clone(),
                palette: cfg.palette,
                initial_resultant_visible: cfg.resultant_visible,
                pool,
                active: RefCell::new(Vec::new()),
                subscriptions: RefCell::new(Vec::new()),
                resultant,
                on_graph_count: Property::new(0),
            }
        });
        VectorSet { core }
    }

    /// The whole slot pool, toolbox and on-graph vectors alike.
    pub fn vectors(&self) -> &[Rc<Vector>] {
        &self.core.pool
    }

    pub fn vector(&self, slot: usize) -> Option<&Rc<Vector>> {
        self.core.pool.get(slot)
    }

    /// Snapshot of the active vectors in z-order.
    pub fn active_vectors(&self) -> Vec<Rc<Vector>> {
        self.core.active.borrow().clone()
    }

    pub fn is_active(&self, v: &Rc<Vector>) -> bool {
        self.core.active.borrow().iter().any(|a| Rc::ptr_eq(a, v))
    }

    pub fn resultant(&self) -> &Rc<ResultantVector> {
        &self.core.resultant
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.core.palette
    }

    /// Observable count of vectors on the graph, always equal to the active
    /// list's length.
    pub fn on_graph_count(&self) -> &Property<usize> {
        &self.core.on_graph_count
    }

    /// Direct activation with the vector's current geometry, snapped into
    /// bounds. Rejects vectors from another set, duplicates, and vectors
    /// animating home.
    pub fn activate(&self, v: &Rc<Vector>) -> bool {
        self.core.activate(v)
    }

    /// Membership removal only; lifecycle flags stay with the vector's own
    /// operations.
    pub fn deactivate(&self, v: &Rc<Vector>) -> bool {
        self.core.deactivate(v)
    }

    pub fn step(&self, dt: f32) {
        self.core.step(dt);
    }

    pub fn reset(&self) {
        self.core.reset();
    }
}

impl SetCore {
    pub(crate) fn activate(self: &Rc<SetCore>, v: &Rc<Vector>) -> bool {
        if !v.owned_by(self) {
            return false;
        }
        if v.is_returning() {
            return false;
        }
        if self.active.borrow().iter().any(|a| Rc::ptr_eq(a, v)) {
            return false;
        }
        debug_assert!(self.active.borrow().len() < self.pool.len(), "active list larger than pool");
        let comps = self.ctx.graph.constrain_components(v.components().get());
        let tail = snap::snap_tail(&self.ctx.graph, comps, v.tail().get());
        v.components().set(comps);
        v.tail().set(tail);
        self.active.borrow_mut().push(v.clone());
        v.is_on_graph().set(true);
        let weak = Rc::downgrade(self);
        let id = v.components().observe(move |_, _| {
            if let Some(core) = weak.upgrade() {
                core.recompute();
            }
        });
        self.subscriptions.borrow_mut().push((v.slot(), id));
        self.on_graph_count.set(self.active.borrow().len());
        self.recompute();
        true
    }

    pub(crate) fn deactivate(self: &Rc<SetCore>, v: &Rc<Vector>) -> bool {
        let removed = {
            let mut active = self.active.borrow_mut();
            match active.iter().position(|a| Rc::ptr_eq(a, v)) {
                Some(i) => {
                    active.remove(i);
                    true
                }
                None => false,
            }
        };
        if !removed {
            return false;
        }
        let torn_down: Vec<SubscriptionId> = {
            let mut subscriptions = self.subscriptions.borrow_mut();
            let mut found = Vec::new();
            subscriptions.retain(|(slot, id)| {
                if *slot == v.slot() {
                    found.push(*id);
                    false
                } else {
                    true
                }
            });
            found
        };
        for id in torn_down {
            v.components().unobserve(id);
        }
        self.on_graph_count.set(self.active.borrow().len());
        self.recompute();
        true
    }

    // O(n) sum over the active list. The borrow is released before the
    // resultant notifies so observers may query membership.
    pub(crate) fn recompute(&self) {
        let (sum, defined) = {
            let active = self.active.borrow();
            let mut sum = Vec2::ZERO;
            for v in active.iter() {
                sum = sum + v.components().get();
            }
            (sum, !active.is_empty())
        };
        self.resultant.apply_sum(sum, defined);
    }

    pub(crate) fn step(&self, dt: f32) {
        for v in &self.pool {
            v.step(dt);
        }
    }

    pub(crate) fn reset(&self) {
        for v in &self.pool {
            v.reset();
        }
        self.resultant.set_visible(self.initial_resultant_visible);
        self.recompute();
    }
}
