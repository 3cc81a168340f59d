#[cfg(feature = "bench_sum")]
use resultant::model::Vec2;
#[cfg(feature = "bench_sum")]
use resultant::{Scene, SceneConfig, SlotConfig, VectorSetConfig};
#[cfg(feature = "bench_sum")]
use std::time::Instant;

#[cfg(not(feature = "bench_sum"))]
fn main() {
    panic!("sum_bench requires --features bench_sum");
}

#[cfg(feature = "bench_sum")]
fn build_scene(slots: usize) -> Scene {
    let base = SceneConfig::default();
    let palette = base.sets[0].palette;
    let config = SceneConfig {
        sets: vec![VectorSetConfig {
            palette,
            resultant_visible: true,
            slots: (0..slots)
                .map(|i| SlotConfig {
                    home: Vec2::new(50.0, i as f32 * 0.5),
                    placement_components: Vec2::new(3.0, 2.0),
                    symbol: None,
                })
                .collect(),
        }],
        ..base
    };
    Scene::new(&config)
}

#[cfg(feature = "bench_sum")]
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut slots = 200usize;
    let mut repeats = 50usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--slots=") {
            if let Ok(v) = val.parse() {
                slots = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }

    let scene = build_scene(slots);
    let set = &scene.sets()[0];
    for (i, v) in set.vectors().iter().enumerate() {
        let tail = Vec2::new((i * 7 % 38) as f32 - 4.0, (i * 3 % 28) as f32 - 4.0);
        v.place_on_graph(tail);
    }

    // Drag storm: every vector's tip moves once per repeat, each move
    // recomputing the resultant.
    let t0 = Instant::now();
    for r in 0..repeats {
        for (i, v) in set.vectors().iter().enumerate() {
            let dx = ((r + i) % 9) as f32 - 4.0;
            let dy = ((r + i) % 7) as f32 - 3.0;
            v.move_tip_to(v.tail().get() + Vec2::new(dx, dy));
        }
    }
    let drag_ms = t0.elapsed().as_secs_f64() * 1000.0;

    // Return storm: send everything home and tick at 60 Hz until idle.
    for v in set.vectors() {
        v.return_to_toolbox();
    }
    let mut ticks = 0usize;
    let t1 = Instant::now();
    while set.vectors().iter().any(|v| v.is_on_graph().get()) {
        scene.step(1.0 / 60.0);
        ticks += 1;
        if ticks > 10_000 {
            break;
        }
    }
    let return_ms = t1.elapsed().as_secs_f64() * 1000.0;

    println!(
        "slots={} moves={} drag_ms={:.3} return_ticks={} return_ms={:.3}",
        slots,
        slots * repeats,
        drag_ms,
        ticks,
        return_ms
    );
}
