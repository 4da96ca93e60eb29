use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tweener_core::{Config, Easing, Property, PropertyAccess, TweenCfg, TweenOwner};

struct Sink([f32; 6]);

fn slot(property: Property) -> usize {
    Property::ALL
        .iter()
        .position(|p| *p == property)
        .unwrap_or(0)
}

impl PropertyAccess for Sink {
    type Target = ();

    fn read(&self, property: Property) -> f32 {
        self.0[slot(property)]
    }

    fn write(&mut self, property: Property, value: f32, _snap: bool) {
        self.0[slot(property)] = value;
    }

    fn read_target(&self, _target: &(), _property: Property) -> f32 {
        1.0
    }

    fn write_target(&mut self, _target: &(), _property: Property, _value: f32) {}
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_all_curves", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &easing in Easing::ALL {
                for i in 0..32 {
                    acc += easing.evaluate(black_box(i as f32 / 31.0));
                }
            }
            acc
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    const PROPS: [Property; 5] = [
        Property::PositionX,
        Property::PositionY,
        Property::Rotation,
        Property::ScaleX,
        Property::ScaleY,
    ];
    c.bench_function("advance_256_owners", |b| {
        let mut world: Vec<(TweenOwner<()>, Sink)> = (0..256)
            .map(|_| (TweenOwner::new(Config::default()), Sink([0.0; 6])))
            .collect();
        b.iter(|| {
            let mut written = 0usize;
            for (n, (owner, host)) in world.iter_mut().enumerate() {
                for (i, p) in PROPS.iter().enumerate() {
                    if !owner.is_animating(*p) {
                        let easing = Easing::ALL[(n + i * 7) % Easing::ALL.len()];
                        let _ = owner.start_tween(host, *p, 100.0, TweenCfg::new(1.0, easing));
                    }
                }
                written += owner.advance(host, black_box(1.0 / 60.0)).changes.len();
            }
            written
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_advance);
criterion_main!(benches);
