// Host-side tests for the animation instance: sizing, frame pacing, layer
// order and teardown.

mod common;

use common::{Call, Recorder};
use glam::Vec2;
use neural_core::constants::{MAX_LABELS_LIMIT, MAX_NODES_LIMIT};
use neural_core::*;

fn network(profile: Profile) -> NeuralNetwork {
    NeuralNetwork::new(NetworkConfig::default(), profile, 42).expect("valid config")
}

#[test]
fn resize_populates_nodes_and_labels() {
    let mut net = network(Profile::Full);
    assert_eq!(net.lifecycle(), Lifecycle::Created);
    net.resize(1000.0, 800.0, 0.0);
    assert_eq!(net.nodes().len(), 120);
    assert_eq!(net.labels().len(), 12);
    assert_eq!(net.bounds(), Vec2::new(1000.0, 800.0));
}

#[test]
fn labels_can_be_switched_off() {
    let config = NetworkConfig {
        show_labels: false,
        ..NetworkConfig::default()
    };
    let mut net = NeuralNetwork::new(config, Profile::Full, 1).unwrap();
    net.resize(1000.0, 800.0, 0.0);
    assert!(net.labels().is_empty());
}

#[test]
fn zero_area_surface_is_empty_and_ticks_safely() {
    let mut net = network(Profile::Full);
    net.resize(0.0, 0.0, 0.0);
    assert!(net.nodes().is_empty());
    assert!(net.labels().is_empty());

    let mut rec = Recorder::default();
    assert_eq!(net.tick(16.0, &mut rec), Frame::Rendered);
    assert_eq!(rec.calls, vec![Call::Clear(0.0, 0.0)]);
}

#[test]
fn reduced_profile_overrides_counts_and_drops_background() {
    let config = NetworkConfig {
        max_nodes: 500,
        label_count: 30,
        ..NetworkConfig::default()
    };
    let mut net = NeuralNetwork::new(config, Profile::Reduced, 3).unwrap();
    net.resize(1000.0, 800.0, 0.0);
    // round(1000 * 800 * 0.00008) = 64, capped at 60
    assert_eq!(net.nodes().len(), 60);
    assert_eq!(net.labels().len(), 4);
    assert!(net.background().is_none());
    assert_eq!(net.graph().max_distance(), 100.0);
    assert!(!net.tuning().glow);
    assert_eq!(net.foreground().params().max_pulses, 5);
}

#[test]
fn invalid_config_is_rejected() {
    let config = NetworkConfig {
        min_nodes: 10,
        max_nodes: 5,
        ..NetworkConfig::default()
    };
    assert!(matches!(
        NeuralNetwork::new(config, Profile::Full, 0),
        Err(ConfigError::NodeBounds { min: 10, max: 5 })
    ));

    let config = NetworkConfig {
        node_density: f32::NAN,
        ..NetworkConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidDensity(_))));

    let config = NetworkConfig {
        max_connection_distance: 0.0,
        ..NetworkConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidDistance(_))));

    let mut config = NetworkConfig::default();
    config.physics.spring_factor = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidPhysics { name: "spring_factor", .. })
    ));
}

#[test]
fn oversized_pools_are_rejected() {
    let config = NetworkConfig {
        max_nodes: 100_000,
        node_density: 1.0,
        ..NetworkConfig::default()
    };
    assert!(matches!(
        NeuralNetwork::new(config, Profile::Full, 0),
        Err(ConfigError::OverLimit { field: "max_nodes", value: 100_000, .. })
    ));

    let config = NetworkConfig {
        label_count: MAX_LABELS_LIMIT + 1,
        ..NetworkConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OverLimit { field: "label_count", .. })
    ));

    let at_limit = NetworkConfig {
        max_nodes: MAX_NODES_LIMIT,
        label_count: MAX_LABELS_LIMIT,
        ..NetworkConfig::default()
    };
    assert!(at_limit.validate().is_ok());
}

#[test]
fn frames_arriving_too_early_are_throttled() {
    let mut net = network(Profile::Reduced);
    net.resize(400.0, 300.0, 0.0);
    let mut rec = Recorder::default();
    assert_eq!(net.tick(0.0, &mut rec), Frame::Rendered);
    let after_first = rec.calls.len();
    let nodes_before = net.nodes().to_vec();

    assert_eq!(net.tick(20.0, &mut rec), Frame::Throttled);
    assert!(Frame::Throttled.reschedule());
    assert_eq!(rec.calls.len(), after_first);
    assert_eq!(net.nodes(), &nodes_before[..]);

    assert_eq!(net.tick(33.0, &mut rec), Frame::Rendered);
    assert!(rec.calls.len() > after_first);
}

#[test]
fn layers_are_drawn_in_order() {
    let mut net = network(Profile::Full);
    net.resize(600.0, 400.0, 0.0);
    let mut now = 0.0;
    let mut rec = Recorder::default();
    // Let pulses spawn so every layer has something to draw.
    for _ in 0..120 {
        rec.calls.clear();
        net.tick(now, &mut rec);
        now += 17.0;
    }
    assert!(matches!(rec.calls[0], Call::Clear(..)));
    let first_line = rec.calls.iter().position(|c| matches!(c, Call::Line(..)));
    let last_line = rec.calls.iter().rposition(|c| matches!(c, Call::Line(..)));
    let first_text = rec.calls.iter().position(|c| matches!(c, Call::Text(..)));
    let (Some(first_line), Some(last_line), Some(first_text)) = (first_line, last_line, first_text)
    else {
        panic!("expected connections and labels to be drawn");
    };
    assert!(first_line <= last_line && last_line < first_text);
    // Labels are the last layer.
    assert!(rec.calls[first_text..]
        .iter()
        .all(|c| matches!(c, Call::Text(..))));
    // Node dots (one per node) sit between the connections and the labels.
    let circles_after_lines = rec.calls[last_line..first_text]
        .iter()
        .filter(|c| matches!(c, Call::Circle(..)))
        .count();
    assert!(circles_after_lines >= net.nodes().len());
}

#[test]
fn long_run_stays_finite_and_bounded() {
    let mut net = network(Profile::Full);
    net.resize(800.0, 600.0, 0.0);
    let mut rec = Recorder::default();
    let mut now = 0.0;
    for step in 0..3000 {
        if step % 7 == 0 {
            net.set_pointer(Some(Vec2::new((step % 800) as f32, (step % 600) as f32)));
        } else if step % 11 == 0 {
            net.set_pointer(None);
        }
        rec.calls.clear();
        net.tick(now, &mut rec);
        now += 16.7;
        assert!(rec.all_finite());
        assert!(net.foreground().len() <= 15);
        assert!(net.background().map_or(0, |b| b.len()) <= 30);
    }
    for n in net.nodes() {
        assert!(n.pos.is_finite());
    }
    for l in net.labels() {
        assert!(l.brightness >= 0.0 && l.brightness <= l.target_brightness);
    }
    assert!(net.foreground().pulses().iter().all(|p| p.progress < 1.0));
}

#[test]
fn resize_clears_pulses_and_edges() {
    let mut net = network(Profile::Full);
    net.resize(600.0, 400.0, 0.0);
    let mut rec = Recorder::default();
    let mut now = 0.0;
    while net.foreground().is_empty() {
        net.tick(now, &mut rec);
        now += 17.0;
        assert!(now < 60_000.0, "no pulse spawned");
    }
    assert!(!net.graph().is_empty());

    net.resize(300.0, 200.0, now);
    assert!(net.foreground().is_empty());
    assert!(net.background().is_some_and(|b| b.is_empty()));
    assert!(net.graph().is_empty());
    assert_eq!(net.bounds(), Vec2::new(300.0, 200.0));
}

#[test]
fn destroy_makes_pending_frames_inert() {
    let mut net = network(Profile::Full);
    net.resize(500.0, 400.0, 0.0);
    let mut rec = Recorder::default();
    net.start();
    assert_eq!(net.lifecycle(), Lifecycle::Running);
    net.tick(0.0, &mut rec);

    let nodes = net.nodes().to_vec();
    let labels: Vec<_> = net.labels().iter().map(|l| (l.pos, l.brightness)).collect();
    net.destroy();
    assert_eq!(net.lifecycle(), Lifecycle::Destroyed);

    // A frame that was already queued when destroy ran.
    rec.calls.clear();
    let frame = net.tick(1000.0, &mut rec);
    assert_eq!(frame, Frame::Halted);
    assert!(!frame.reschedule());
    assert!(rec.calls.is_empty());
    assert_eq!(net.nodes(), &nodes[..]);
    let labels_after: Vec<_> = net.labels().iter().map(|l| (l.pos, l.brightness)).collect();
    assert_eq!(labels, labels_after);

    net.resize(100.0, 100.0, 1000.0);
    net.set_pointer(Some(Vec2::ZERO));
    assert_eq!(net.nodes(), &nodes[..]);
    net.destroy();
    assert_eq!(net.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn first_tick_marks_instance_running() {
    let mut net = network(Profile::Full);
    net.resize(200.0, 200.0, 0.0);
    net.tick(0.0, &mut Recorder::default());
    assert_eq!(net.lifecycle(), Lifecycle::Running);
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut a = network(Profile::Full);
    let mut b = network(Profile::Full);
    a.resize(400.0, 300.0, 0.0);
    b.resize(400.0, 300.0, 0.0);
    assert_eq!(a.nodes(), b.nodes());

    a.destroy();
    let mut rec = Recorder::default();
    assert_eq!(b.tick(0.0, &mut rec), Frame::Rendered);
    assert!(!rec.calls.is_empty());
}
