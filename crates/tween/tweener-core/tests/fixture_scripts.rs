use hashbrown::HashMap;
use serde::Deserialize;
use tweener_core::{
    snap_value, Config, HierarchyWalker, Property, PropertyAccess, TweenCfg, TweenOwner,
};

const EPS: f32 = 1e-4;

fn yes() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    #[allow(dead_code)]
    description: String,
    #[serde(default)]
    config: Config,
    #[serde(default)]
    initial: HashMap<Property, f32>,
    #[serde(default = "yes")]
    resolve_first: bool,
    /// Initial opacity of each renderable, all attached to the owner.
    #[serde(default)]
    render_targets: Vec<f32>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Start {
        property: Property,
        to: f32,
        #[serde(default)]
        cfg: TweenCfg,
    },
    Advance {
        dt: f32,
        #[serde(default)]
        expect: HashMap<Property, f32>,
        active: Option<usize>,
    },
    Expect {
        #[serde(default)]
        values: HashMap<Property, f32>,
        active: Option<usize>,
    },
    Cancel {
        property: Property,
        #[serde(default)]
        complete: bool,
    },
    Resolve,
    Teardown,
}

/// Flat host: one owner node carrying every renderable.
struct ScriptHost {
    props: HashMap<Property, f32>,
    alpha: Vec<f32>,
}

impl PropertyAccess for ScriptHost {
    type Target = usize;

    fn read(&self, property: Property) -> f32 {
        self.props.get(&property).copied().unwrap_or(0.0)
    }

    fn write(&mut self, property: Property, value: f32, snap: bool) {
        self.props.insert(property, snap_value(value, snap));
    }

    fn read_target(&self, target: &usize, _property: Property) -> f32 {
        self.alpha[*target]
    }

    fn write_target(&mut self, target: &usize, _property: Property, value: f32) {
        self.alpha[*target] = value;
    }
}

impl HierarchyWalker for ScriptHost {
    type Node = ();

    fn root(&self) -> Self::Node {}

    fn children(&self, _node: &()) -> Vec<()> {
        Vec::new()
    }

    fn render_targets(&self, _node: &(), out: &mut Vec<usize>) {
        out.extend(0..self.alpha.len());
    }
}

fn check(
    name: &str,
    step: usize,
    host: &ScriptHost,
    owner: &TweenOwner<usize>,
    values: &HashMap<Property, f32>,
    active: Option<usize>,
) {
    for (property, want) in values {
        if property.is_indirect() {
            assert!(
                !host.alpha.is_empty(),
                "{name} step {step}: expected {property} but entity has no render targets"
            );
            for (i, got) in host.alpha.iter().enumerate() {
                assert!(
                    (got - want).abs() <= EPS,
                    "{name} step {step}: target {i} {property} = {got}, expected {want}"
                );
            }
        } else {
            let got = host.read(*property);
            assert!(
                (got - want).abs() <= EPS,
                "{name} step {step}: {property} = {got}, expected {want}"
            );
        }
    }
    if let Some(active) = active {
        assert_eq!(owner.len(), active, "{name} step {step}: active tween count");
    }
}

fn run(name: &str) {
    let script: Script = tweener_test_fixtures::scripts::load(name).expect("load script");
    let mut host = ScriptHost {
        props: script.initial.clone(),
        alpha: script.render_targets.clone(),
    };
    let mut owner = TweenOwner::new(script.config.clone());
    if script.resolve_first {
        owner.resolve_property_sources(&mut host);
    }

    for (i, step) in script.steps.iter().enumerate() {
        match step {
            Step::Start { property, to, cfg } => {
                owner
                    .start_tween(&mut host, *property, *to, *cfg)
                    .unwrap_or_else(|e| panic!("{name} step {i}: {e}"));
            }
            Step::Advance { dt, expect, active } => {
                owner.advance(&mut host, *dt);
                check(name, i, &host, &owner, expect, *active);
            }
            Step::Expect { values, active } => check(name, i, &host, &owner, values, *active),
            Step::Cancel { property, complete } => {
                owner.cancel(&mut host, *property, *complete);
            }
            Step::Resolve => owner.resolve_property_sources(&mut host),
            Step::Teardown => owner.teardown(),
        }
    }
}

/// it should replay every scripted session in the fixture manifest
#[test]
fn scripted_sessions_match_expectations() {
    let keys = tweener_test_fixtures::scripts::keys();
    assert!(!keys.is_empty());
    for key in keys {
        run(&key);
    }
}
