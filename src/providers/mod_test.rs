use leptos::reactive::owner::Owner;

use super::*;

// =============================================================
// Order validation
// =============================================================

#[test]
fn mount_order_is_valid() {
    assert_eq!(validate_order(&MOUNT_ORDER), Ok(()));
}

#[test]
fn mount_order_matches_documented_sequence() {
    let names: Vec<_> = MOUNT_ORDER.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        vec!["query-cache", "theme", "tooltip-host", "auth", "notifications", "activity-log", "router"]
    );
}

#[test]
fn router_must_be_last() {
    for kind in &MOUNT_ORDER[..MOUNT_ORDER.len() - 1] {
        assert!(ProviderKind::Router.prerequisites().contains(kind), "{kind}");
    }
}

#[test]
fn activity_log_before_auth_is_rejected() {
    let order = [ProviderKind::QueryCache, ProviderKind::ActivityLog, ProviderKind::Auth];
    assert_eq!(
        validate_order(&order),
        Err(BootError::OutOfOrder { provider: ProviderKind::ActivityLog, missing: ProviderKind::Auth })
    );
}

#[test]
fn notifications_before_theme_is_rejected() {
    let err = validate_order(&[ProviderKind::Notifications, ProviderKind::Theme]).unwrap_err();
    assert_eq!(err.to_string(), "notifications must be installed after theme");
}

#[test]
fn duplicate_provider_is_rejected() {
    let order = [ProviderKind::Theme, ProviderKind::Theme];
    assert_eq!(validate_order(&order), Err(BootError::Duplicate(ProviderKind::Theme)));
}

// =============================================================
// Step execution
// =============================================================

#[test]
fn run_steps_executes_top_to_bottom() {
    let mut seen = Vec::new();
    let installed = run_steps(&MOUNT_ORDER, |kind| {
        seen.push(kind);
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, MOUNT_ORDER.to_vec());
    assert_eq!(installed, MOUNT_ORDER.to_vec());
}

#[test]
fn run_steps_runs_nothing_for_invalid_order() {
    let mut calls = 0;
    let result = run_steps(&[ProviderKind::Router], |_| {
        calls += 1;
        Ok(())
    });
    assert!(matches!(result, Err(BootError::OutOfOrder { provider: ProviderKind::Router, .. })));
    assert_eq!(calls, 0);
}

#[test]
fn run_steps_stops_at_first_failure() {
    let mut seen = Vec::new();
    let result = run_steps(&MOUNT_ORDER, |kind| {
        seen.push(kind);
        if kind == ProviderKind::Auth {
            return Err(BootError::MissingContext { provider: kind, missing: ProviderKind::QueryCache });
        }
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(seen.last(), Some(&ProviderKind::Auth));
    assert!(!seen.contains(&ProviderKind::Router));
}

#[test]
fn route_table_error_converts_into_boot_error() {
    let err: BootError = RouteTableError::MissingRoot.into();
    assert_eq!(err.to_string(), "invalid route table: route table has no entry for the root path");
}

// =============================================================
// Context installation
// =============================================================

#[test]
fn install_all_provides_every_context_in_order() {
    let owner = Owner::new();
    owner.with(|| {
        let installed = install_all(&AppConfig::default()).unwrap();
        assert_eq!(installed, MOUNT_ORDER.to_vec());

        assert!(use_context::<RwSignal<QueryCache>>().is_some());
        assert!(use_context::<RwSignal<ThemeState>>().is_some());
        assert!(use_context::<RwSignal<TooltipState>>().is_some());
        assert!(use_context::<RwSignal<NotificationState>>().is_some());
        assert!(use_context::<RwSignal<ActivityLogState>>().is_some());
        assert_eq!(use_context::<RouteTable>(), Some(RouteTable::library().unwrap()));

        let session = use_context::<RwSignal<AuthState>>().unwrap();
        assert!(session.get_untracked().loading);
    });
}

#[test]
fn install_all_applies_config_limits() {
    let config = AppConfig { toast_limit: 2, activity_log_capacity: 5, ..AppConfig::default() };
    Owner::new().with(|| {
        install_all(&config).unwrap();
        assert_eq!(use_context::<RwSignal<NotificationState>>().unwrap().get_untracked().limit, 2);
    });
}

#[test]
fn auth_without_query_cache_reports_missing_context() {
    Owner::new().with(|| {
        let err = install(ProviderKind::Auth, &AppConfig::default()).unwrap_err();
        assert_eq!(err, BootError::MissingContext { provider: ProviderKind::Auth, missing: ProviderKind::QueryCache });
        assert!(use_context::<RwSignal<AuthState>>().is_none());
    });
}

#[test]
fn activity_log_without_auth_reports_missing_context() {
    Owner::new().with(|| {
        let err = install(ProviderKind::ActivityLog, &AppConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "activity-log needs the auth context, which is not installed");
    });
}
