use super::*;

fn student() -> Session {
    Session {
        token: Some("tok-1".to_owned()),
        user_id: Some("7".to_owned()),
        username: Some("alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
        role: Some(Role::User),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_wire_spelling() {
    assert_eq!(Role::parse("USER"), Some(Role::User));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("SUPERUSER"), None);
}

#[test]
fn role_serde_uses_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    let role: Role = serde_json::from_str("\"USER\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn role_landing_paths() {
    assert_eq!(Role::User.landing_path(), "/student-dashboard");
    assert_eq!(Role::Admin.landing_path(), "/admin-dashboard");
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn empty_store_is_anonymous() {
    let store = SessionStore::in_memory();
    assert!(!store.is_authenticated());
    assert_eq!(store.load(), Session::default());
}

#[test]
fn save_then_read_every_field() {
    let store = SessionStore::in_memory();
    store.save(&student());

    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("tok-1"));
    assert_eq!(store.user_id().as_deref(), Some("7"));
    assert_eq!(store.username().as_deref(), Some("alice"));
    assert_eq!(store.email().as_deref(), Some("alice@example.com"));
    assert_eq!(store.role(), Some(Role::User));
    assert_eq!(store.load(), student());
}

#[test]
fn clear_removes_every_field() {
    let store = SessionStore::in_memory();
    store.save(&student());
    store.clear();

    assert!(!store.is_authenticated());
    assert_eq!(store.load(), Session::default());
}

#[test]
fn save_after_clear_authenticates_again() {
    let store = SessionStore::in_memory();
    store.save(&student());
    store.clear();
    store.save(&student());
    assert!(store.is_authenticated());
}

#[test]
fn saving_a_tokenless_session_deauthenticates() {
    let store = SessionStore::in_memory();
    store.save(&student());
    store.save(&Session { token: None, ..student() });
    assert!(!store.is_authenticated());
}

#[test]
fn save_overwrites_previous_identity_fields() {
    let store = SessionStore::in_memory();
    store.save(&student());
    store.save(&Session {
        token: Some("tok-2".to_owned()),
        user_id: Some("1".to_owned()),
        username: Some("root".to_owned()),
        email: None,
        role: Some(Role::Admin),
    });

    assert_eq!(store.email(), None);
    assert_eq!(store.role(), Some(Role::Admin));
    assert_eq!(store.username().as_deref(), Some("root"));
}

#[test]
fn unknown_stored_role_reads_as_absent() {
    let backend = MemoryStorage::default();
    backend.set_item(TOKEN_KEY, "tok");
    backend.set_item(ROLE_KEY, "GUEST");
    let store = SessionStore::new(backend);

    assert!(store.is_authenticated());
    assert_eq!(store.role(), None);
}

#[test]
fn clones_share_the_same_backend() {
    let store = SessionStore::in_memory();
    let other = store.clone();
    store.save(&student());
    assert!(other.is_authenticated());
    other.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn storage_keys_match_backend_contract() {
    assert_eq!(ALL_KEYS, ["token", "userid", "username", "email", "role"]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_a_browser() {
    let store = SessionStore::browser();
    store.save(&student());
    assert!(!store.is_authenticated());
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_sign_in_and_out_bump_revision_and_write_through() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = SessionContext::new(SessionStore::in_memory());
        let before = ctx.revision.get_untracked();

        ctx.sign_in(&student());
        assert!(ctx.store().is_authenticated());
        assert_eq!(ctx.snapshot_untracked(), student());
        assert_eq!(ctx.revision.get_untracked(), before + 1);

        ctx.sign_out();
        assert_eq!(ctx.snapshot_untracked(), Session::default());
        assert_eq!(ctx.revision.get_untracked(), before + 2);
    });
}
