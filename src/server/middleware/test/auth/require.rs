use super::*;
use crate::server::controller::member::ACTIVATE_ROLES;

/// Tests a valid token without permission requirements.
///
/// Expected: Ok with the identity carried by the token
#[test]
fn authenticates_valid_token() {
    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens, Role::Member);

    let caller = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(caller, user(Role::Member));
}

/// Tests a role listed in the route's allow-list.
///
/// Expected: Ok for gym owners and admins on an owner/admin route
#[test]
fn allows_listed_roles() {
    let tokens = TokenService::new(SECRET);
    let permissions = [Permission::Role(&[Role::GymOwner, Role::Admin])];

    for role in [Role::GymOwner, Role::Admin] {
        let headers = bearer(&tokens, role);
        let caller = AuthGuard::new(&tokens, &headers)
            .require(&permissions)
            .unwrap();

        assert_eq!(caller.role, role);
    }
}

/// Tests a role missing from the route's allow-list.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_unlisted_role() {
    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens, Role::Member);

    let result =
        AuthGuard::new(&tokens, &headers).require(&[Permission::Role(&[Role::GymOwner])]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(11, _)))
    ));
}

/// Tests an admin token against the membership activation route.
///
/// Expected: Err(AuthError::AccessDenied) for admins, Ok for gym owners
#[test]
fn activation_route_admits_only_owners() {
    let tokens = TokenService::new(SECRET);
    let permissions = [Permission::Role(ACTIVATE_ROLES)];

    let admin = bearer(&tokens, Role::Admin);
    let result = AuthGuard::new(&tokens, &admin).require(&permissions);
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(11, _)))
    ));

    let owner = bearer(&tokens, Role::GymOwner);
    let caller = AuthGuard::new(&tokens, &owner)
        .require(&permissions)
        .unwrap();
    assert_eq!(caller.role, Role::GymOwner);
}
