//! End-to-end checks of the theming and gating layer.
//!
//! Tests cover:
//! - Tenant theme fetched, decoded and applied to a document double
//! - Theme failures leaving default styling in place
//! - Gate decisions across an auth session
//! - Navigation activity on both surfaces

use portal_core::theme::mapping;
use portal_core::{
    AuthGate, AuthState, CancellationToken, FailingThemeSource, GateDecision, LoadOutcome,
    MemoryStyleSink, NavigationMode, NavigationResolver, PortalConfig, Role, StaticThemeSource,
    StyleTarget, Surface, ThemeDescriptor, ThemeLoadError, ThemeLoader, UserRecord,
};

/// Build-time styling the portal ships with
fn default_styles() -> MemoryStyleSink {
    MemoryStyleSink::with_defaults([
        (StyleTarget::CustomProperty("--primary-color"), "#0d47a1"),
        (StyleTarget::CustomProperty("--background-color"), "#ffffff"),
        (StyleTarget::CustomProperty("--border-radius"), "4px"),
        (StyleTarget::StyleProperty("font-family"), "Inter, sans-serif"),
    ])
}

// ============================================================
// Theming
// ============================================================

#[tokio::test]
async fn test_tenant_scenario_primary_and_typography() {
    let body = br##"{"corPrimaria": "#112233", "fontFamilia": "Georgia"}"##;
    let descriptor = ThemeDescriptor::from_slice(body).unwrap();
    let loader = ThemeLoader::new(StaticThemeSource::new(descriptor));

    let mut document = default_styles();
    let before = document.snapshot();
    let outcome = loader.load(&mut document, &CancellationToken::new()).await;
    assert!(outcome.is_applied());

    assert_eq!(
        document.get(StyleTarget::CustomProperty("--primary-color")),
        Some("#112233")
    );
    assert_eq!(
        document.get(StyleTarget::StyleProperty("font-family")),
        Some("Georgia")
    );

    // Nothing else moved
    for (target, value) in before {
        if target.property_name() == "--primary-color" || target.property_name() == "font-family" {
            continue;
        }
        assert_eq!(document.get(target), Some(value.as_str()));
    }
}

#[tokio::test]
async fn test_forward_compatible_payload() {
    let body = br##"{
        "corPrimaria": "#222",
        "logoUrl": "https://cdn.example/logo.svg",
        "modoCompacto": true,
        "versao": 3
    }"##;
    let descriptor = ThemeDescriptor::from_slice(body).unwrap();
    let loader = ThemeLoader::new(StaticThemeSource::new(descriptor));

    let mut document = default_styles();
    match loader.load(&mut document, &CancellationToken::new()).await {
        LoadOutcome::Applied(report) => {
            assert_eq!(report.applied, vec!["corPrimaria"]);
            assert_eq!(report.skipped, vec!["logoUrl"]);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_every_failure_kind_keeps_defaults() {
    let failures = [
        ThemeLoadError::Network("connection refused".into()),
        ThemeLoadError::Status { status: 401 },
        ThemeLoadError::Status { status: 500 },
        ThemeLoadError::Malformed("expected value at line 1".into()),
    ];

    for error in failures {
        let loader = ThemeLoader::new(FailingThemeSource::new(error.clone()));
        let mut document = default_styles();
        let outcome = loader.load(&mut document, &CancellationToken::new()).await;

        assert_eq!(outcome, LoadOutcome::Failed(error));
        assert_eq!(document, default_styles());
    }
}

#[tokio::test]
async fn test_reapplying_same_theme_is_stable() {
    let descriptor: ThemeDescriptor = mapping::entries()
        .iter()
        .map(|m| (m.option, format!("value-for-{}", m.option)))
        .collect();
    let loader = ThemeLoader::new(StaticThemeSource::new(descriptor));

    let mut document = default_styles();
    loader.load(&mut document, &CancellationToken::new()).await;
    let first = document.snapshot();
    loader.load(&mut document, &CancellationToken::new()).await;

    assert_eq!(document.snapshot(), first);
    assert_eq!(first.len(), mapping::entries().len());
}

// ============================================================
// Auth gate
// ============================================================

#[test]
fn test_session_restore_then_sign_out() {
    let gate = AuthGate::new("/login");
    let user = UserRecord {
        id: "42".into(),
        display_name: "Dra. Marta Lima".into(),
        email: "marta@example.com".into(),
        role: Role::Staff,
    };

    let session = [
        (AuthState::loading(), GateDecision::ShowPlaceholder),
        (AuthState::signed_in(user), GateDecision::RenderProtected),
        (
            AuthState::signed_out(),
            GateDecision::Redirect {
                to: "/login".into(),
                mode: NavigationMode::Replace,
            },
        ),
    ];

    for (auth, expected) in session {
        assert_eq!(gate.decide(&auth), expected);
    }
}

// ============================================================
// Navigation
// ============================================================

#[test]
fn test_navigation_follows_configured_strategy() {
    let config = PortalConfig::from_toml_str("[navigation]\nmatch_strategy = \"prefix\"").unwrap();
    let resolver = NavigationResolver::new(config.navigation.match_strategy);

    let nav = resolver.resolve("/processos/2024-001", Surface::Mobile);
    assert_eq!(nav.active_paths(), vec!["/processos"]);

    let exact = NavigationResolver::default().resolve("/processos/2024-001", Surface::Mobile);
    assert!(exact.active_paths().is_empty());
}

#[test]
fn test_intake_page_highlights_single_item() {
    let resolver = NavigationResolver::default();
    for surface in [Surface::Desktop, Surface::Mobile] {
        let nav = resolver.resolve("/pre-atendimento", surface);
        let active: Vec<_> = nav.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].item.path, "/pre-atendimento");
        assert!(active[0].class.ends_with("active"));
    }
}
