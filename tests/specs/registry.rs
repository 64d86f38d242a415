// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;
use dwkit_core::{EventDefinition, Identity, MarkdownOptions, ValidateOptions};
use similar_asserts::assert_eq;

#[test]
fn registered_event_passes_strict_validation() {
    let registry = ping_registry();

    let report = registry.validate_all(&ValidateOptions::default());
    assert!(report.passed);
    assert!(report.issues.is_empty());
}

#[test]
fn second_registration_fails_and_keeps_the_first() {
    let registry = ping_registry();
    let replacement = EventDefinition::new(PING, "replacement").with_producer("other");

    let err = registry.register(replacement).unwrap_err();
    assert_eq!(err.to_string(), format!("event already exists: {}", PING));
    assert_eq!(registry.get(PING), Some(ping()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn invalid_definition_is_rejected_without_storing() {
    let registry = Identity::dwkit().event_registry();

    let err = registry
        .register(EventDefinition::new("Other:Thing", ""))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("name must start with"), "{}", message);
    assert!(message.contains("description"), "{}", message);
    assert!(!registry.has("Other:Thing"));
}

#[test]
fn returned_definitions_are_independent_copies() {
    let registry = ping_registry();

    let mut copy = registry.get(PING).unwrap();
    copy.producers.push("intruder".to_string());
    copy.description.clear();

    assert_eq!(registry.get(PING), Some(ping()));
}

#[test]
fn validate_all_is_repeatable_and_pure() {
    let registry = Identity::dwkit().event_registry();
    registry.seed(PING, ping()).unwrap();
    registry
        .seed("DWKit:Test:Quiet", EventDefinition::new("DWKit:Test:Quiet", ""))
        .unwrap();

    let before = registry.list_all();
    let first = registry.validate_all(&ValidateOptions::default());
    let second = registry.validate_all(&ValidateOptions::default());

    assert!(!first.passed);
    assert_eq!(first, second);
    assert_eq!(registry.list_all(), before);
}

#[test]
fn markdown_is_stable_and_sorted() {
    let registry = Identity::dwkit().event_registry();
    for name in ["DWKit:C", "DWKit:A", "DWKit:B"] {
        registry
            .register(EventDefinition::new(name, "d").with_producer("m"))
            .unwrap();
    }

    let options = MarkdownOptions::generated_now();
    let strip = |md: String| -> Vec<String> {
        md.lines()
            .filter(|l| !l.starts_with("_Generated:"))
            .map(str::to_string)
            .collect()
    };
    let first = strip(registry.to_markdown(&options));
    let second = strip(registry.to_markdown(&MarkdownOptions::generated_now()));
    assert_eq!(first, second);

    let headings: Vec<&String> = first.iter().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(headings, vec!["### DWKit:A", "### DWKit:B", "### DWKit:C"]);
}

#[test]
fn identity_prefix_scopes_both_registries() {
    let identity = Identity {
        package_id: "acme".to_string(),
        event_prefix: "Acme:".to_string(),
        command_prefix: "ac".to_string(),
    };
    let events = identity.event_registry();

    assert!(events
        .register(EventDefinition::new("Acme:Ready", "ready").with_producer("boot"))
        .is_ok());
    assert!(events.register(ping()).is_err());
    assert_eq!(identity.command_registry().prefix(), "ac");
}
