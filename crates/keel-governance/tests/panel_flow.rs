// panel_flow.rs — End-to-end flow: append entries, render every panel format.

use keel_governance::{
    get_adapter, DisplayOrder, GovernanceStore, PanelFormat, RenderContext,
};

#[test]
fn append_then_render_shows_each_entry_once() {
    let mut store = GovernanceStore::new();
    store.init("sess_1");
    store.append("sess_1", "Auth", "User login", true, Some("SSO".to_string()));
    store.append("sess_1", "ChatUI", "Query submitted", true, None);
    store.append(
        "sess_1",
        "PolicyEngine",
        "Compliance check",
        false,
        Some("PII detected".to_string()),
    );

    let log = store.log("sess_1").unwrap();

    for format in [PanelFormat::Terminal, PanelFormat::Markdown, PanelFormat::Json] {
        let adapter = get_adapter(format);
        let output = adapter
            .render(&RenderContext::new(log, "Governance Log"))
            .unwrap();

        assert_eq!(output.matches("User login").count(), 1, "{}", format);
        assert_eq!(output.matches("Query submitted").count(), 1, "{}", format);
        assert_eq!(output.matches("Compliance check").count(), 1, "{}", format);
        assert!(output.contains("PII detected"), "{}", format);
    }
}

#[test]
fn sessions_render_independently() {
    let mut store = GovernanceStore::new();
    store.append("support", "Auth", "Agent login", true, None);
    store.append("care", "Scheduler", "Visit booked", true, None);

    let adapter = get_adapter(PanelFormat::Markdown);

    let support_panel = adapter
        .render(&RenderContext::new(store.log("support").unwrap(), "Support"))
        .unwrap();
    let care_panel = adapter
        .render(&RenderContext::new(store.log("care").unwrap(), "Care"))
        .unwrap();

    assert!(support_panel.contains("Agent login"));
    assert!(!support_panel.contains("Visit booked"));
    assert!(care_panel.contains("Visit booked"));
    assert!(!care_panel.contains("Agent login"));
}

#[test]
fn chronological_order_is_available_and_documented_default_is_newest_first() {
    let mut store = GovernanceStore::new();
    store.append("sess", "First", "one", true, None);
    store.append("sess", "Second", "two", true, None);
    let log = store.log("sess").unwrap();

    let adapter = get_adapter(PanelFormat::Terminal);

    let default_output = adapter.render(&RenderContext::new(log, "Panel")).unwrap();
    assert!(default_output.find("Second").unwrap() < default_output.find("First").unwrap());

    let chronological = RenderContext {
        log,
        title: "Panel",
        order: DisplayOrder::Chronological,
    };
    let chrono_output = adapter.render(&chronological).unwrap();
    assert!(chrono_output.find("First").unwrap() < chrono_output.find("Second").unwrap());
}

#[test]
fn rendering_an_uninitialized_session_is_a_host_decision_not_a_panic() {
    let store = GovernanceStore::new();
    // The store exposes absence; the host chooses what to render.
    assert!(store.log("never_seen").is_none());
}

#[test]
fn capped_store_renders_only_retained_entries() {
    let mut store = GovernanceStore::with_log_capacity(2);
    for i in 0..5 {
        store.append("sess", "Component", format!("action {}", i), true, None);
    }

    let log = store.log("sess").unwrap();
    let output = get_adapter(PanelFormat::Json)
        .render(&RenderContext::new(log, "Panel"))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["event_count"], 2);
    assert_eq!(parsed["entries"][0]["action"], "action 4");
    assert_eq!(parsed["entries"][1]["action"], "action 3");
}
