// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;
use dwkit_core::{BusError, EventBus, SubscriptionToken};
use serde_json::json;
use similar_asserts::assert_eq;
use std::sync::{Arc, Mutex};

fn record(bus: &EventBus, calls: &Calls, label: &'static str) -> SubscriptionToken {
    let calls = calls.clone();
    bus.on(PING, move |payload, _, _| {
        calls.push(format!("{} {}", label, payload));
        Ok(())
    })
    .unwrap()
}

#[test]
fn subscribing_to_unregistered_event_fails() {
    let bus = ping_bus();

    let err = bus.on(PONG, |_, _, _| Ok(())).unwrap_err();
    assert_eq!(err, BusError::NotRegistered(PONG.to_string()));
    assert_eq!(err.to_string(), "eventName not registered: DWKit:Test:Pong");
    assert_eq!(bus.stats().subscriber_count, 0);
}

#[test]
fn prefixed_but_unregistered_and_foreign_names_are_both_refused() {
    let bus = ping_bus();

    assert!(bus.on("DWKit:Anything", |_, _, _| Ok(())).is_err());
    assert!(matches!(
        bus.on("Other:Ping", |_, _, _| Ok(())),
        Err(BusError::BadPrefix { .. })
    ));
    assert_eq!(bus.on("", |_, _, _| Ok(())), Err(BusError::EmptyName));
}

#[test]
fn emit_delivers_to_every_subscriber_once() {
    let bus = ping_bus();
    let calls = Calls::default();
    record(&bus, &calls, "h1");
    record(&bus, &calls, "h2");

    let report = bus.emit(PING, &json!({"x": 1}));

    assert!(report.ok);
    assert_eq!(report.delivered, 2);
    assert!(report.errors.is_empty());
    assert_eq!(calls.take(), vec![r#"h1 {"x":1}"#, r#"h2 {"x":1}"#]);
}

#[test]
fn failing_handler_does_not_stop_the_round() {
    let bus = ping_bus();
    let calls = Calls::default();
    let failing = bus.on(PING, |_, _, _| Err("boom".into())).unwrap();
    record(&bus, &calls, "h2");

    let before = bus.stats().handler_errors;
    let report = bus.emit(PING, &json!({"x": 1}));

    assert!(!report.ok);
    assert_eq!(report.delivered, 1);
    assert_eq!(report.errors, vec![format!("token {}: boom", failing)]);
    assert_eq!(bus.stats().handler_errors, before + 1);
    assert_eq!(calls.take().len(), 1);
}

#[test]
fn panicking_handler_is_contained() {
    let bus = ping_bus();
    let calls = Calls::default();
    bus.on(PING, |_, _, _| panic!("handler exploded")).unwrap();
    record(&bus, &calls, "h2");

    let report = bus.emit(PING, &json!(null));

    assert!(!report.ok);
    assert_eq!(report.delivered, 1);
    assert!(report.errors[0].contains("handler exploded"));
    assert_eq!(calls.take(), vec!["h2 null"]);
}

#[test]
fn off_removes_handler_and_second_off_fails() {
    let bus = ping_bus();
    let calls = Calls::default();
    let h1 = record(&bus, &calls, "h1");
    record(&bus, &calls, "h2");

    bus.off(h1).unwrap();
    bus.emit(PING, &json!({"x": 1}));
    assert_eq!(calls.take(), vec![r#"h2 {"x":1}"#]);

    let err = bus.off(h1).unwrap_err();
    assert_eq!(err, BusError::UnknownToken(h1));
    assert!(err.to_string().starts_with("unknown token"));
}

#[test]
fn tokens_increase_and_are_never_reused() {
    let bus = ping_bus();
    let mut seen = Vec::new();
    for round in 0..5 {
        let token = bus.on(PING, |_, _, _| Ok(())).unwrap();
        if round % 2 == 0 {
            bus.off(token).unwrap();
        }
        seen.push(token);
    }

    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen[0].get(), 1);
}

#[test]
fn unsubscribe_during_emit_takes_effect_next_round() {
    let bus = ping_bus();
    let calls = Calls::default();
    let victim: Arc<Mutex<Option<SubscriptionToken>>> = Arc::default();

    let inner_bus = bus.clone();
    let target = Arc::clone(&victim);
    let a_calls = calls.clone();
    bus.on(PING, move |_, _, _| {
        a_calls.push("a");
        if let Some(token) = target.lock().unwrap().take() {
            inner_bus.off(token)?;
        }
        Ok(())
    })
    .unwrap();
    let b = record(&bus, &calls, "b");
    *victim.lock().unwrap() = Some(b);

    let first = bus.emit(PING, &json!(1));
    assert!(first.ok);
    assert_eq!(calls.take(), vec!["a", "b 1"]);

    bus.emit(PING, &json!(2));
    assert_eq!(calls.take(), vec!["a"]);
}

#[test]
fn emitting_to_nobody_is_success() {
    let bus = ping_bus();

    let report = bus.emit(PING, &json!({}));

    assert!(report.ok);
    assert_eq!(report.delivered, 0);
    assert!(report.errors.is_empty());
    assert_eq!(bus.stats().emitted, 1);
}

#[test]
fn rejected_emit_is_not_counted() {
    let bus = ping_bus();

    let report = bus.emit(PONG, &json!({}));

    assert!(!report.ok);
    assert_eq!(report.errors, vec!["eventName not registered: DWKit:Test:Pong"]);
    assert_eq!(bus.stats().emitted, 0);
}

#[test]
fn stats_track_cumulative_counts() {
    let bus = ping_bus();
    let calls = Calls::default();
    record(&bus, &calls, "h1");
    bus.on(PING, |_, _, _| Err("no".into())).unwrap();

    bus.emit(PING, &json!(1));
    bus.emit(PING, &json!(2));

    let stats = bus.stats();
    assert_eq!(stats.emitted, 2);
    assert_eq!(stats.delivered, 2);
    assert_eq!(stats.handler_errors, 2);
    assert_eq!(stats.subscriber_count, 2);
    assert_eq!(stats.events_with_subscribers, 1);
}
