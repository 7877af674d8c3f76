use home_study::access::{authorize, guard_navigation, GuardResult, Role, Session, ViewRoute};

fn session(role: Role) -> Session {
    Session {
        user_id: None,
        name: "Marta Lopes".to_string(),
        role,
    }
}

#[test]
fn unauthenticated_requests_go_to_login() {
    assert_eq!(
        authorize(None, &[Role::Coordinator]),
        GuardResult::RedirectToLogin
    );
}

#[test]
fn wrong_role_is_sent_home() {
    let teacher = session(Role::Teacher);
    assert_eq!(
        authorize(Some(&teacher), &[Role::Coordinator]),
        GuardResult::RedirectToRoleHome(Role::Teacher)
    );

    let coordinator = session(Role::Coordinator);
    let result = authorize(Some(&coordinator), &[Role::Teacher]);
    assert_eq!(result.redirect_path(), Some("/coordinator"));
}

#[test]
fn permitted_role_is_allowed() {
    let coordinator = session(Role::Coordinator);
    assert_eq!(
        authorize(Some(&coordinator), &[Role::Coordinator]),
        GuardResult::Allow
    );
}

#[test]
fn unrestricted_route_allows_any_session() {
    let teacher = session(Role::Teacher);
    assert_eq!(authorize(Some(&teacher), &[]), GuardResult::Allow);
}

#[test]
fn role_without_home_falls_back_to_login() {
    let unknown = session(Role::Unrecognized);
    let result = authorize(Some(&unknown), &[Role::Coordinator]);
    assert_eq!(result, GuardResult::RedirectToLogin);
    assert_eq!(result.redirect_path(), Some("/login"));
}

#[test]
fn view_table_matches_role_dashboards() {
    let coordinator = session(Role::Coordinator);
    let teacher = session(Role::Teacher);

    for path in ["/coordinator", "/perfis"] {
        assert_eq!(guard_navigation(Some(&coordinator), path), GuardResult::Allow);
        assert_eq!(
            guard_navigation(Some(&teacher), path),
            GuardResult::RedirectToRoleHome(Role::Teacher)
        );
    }

    for path in ["/teacher", "/perfil"] {
        assert_eq!(guard_navigation(Some(&teacher), path), GuardResult::Allow);
        assert_eq!(
            guard_navigation(Some(&coordinator), path),
            GuardResult::RedirectToRoleHome(Role::Coordinator)
        );
    }

    assert_eq!(guard_navigation(None, "/teacher"), GuardResult::RedirectToLogin);
    assert_eq!(ViewRoute::TeacherDashboard.path(), Role::Teacher.home_path());
    assert_eq!(
        ViewRoute::CoordinatorDashboard.path(),
        Role::Coordinator.home_path()
    );
}
