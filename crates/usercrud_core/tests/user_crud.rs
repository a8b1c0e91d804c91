use usercrud_core::db::open_db_in_memory;
use usercrud_core::{RepoError, SqliteUserRepository, User, UserRepository, UserService};

#[test]
fn save_assigns_id_and_get_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let saved = repo
        .save_user(&User::new("John Doe", "john@example.com"))
        .unwrap();
    let id = saved.id.unwrap();
    assert!(id > 0);

    let loaded = repo.get_user(id).unwrap();
    assert_eq!(loaded.name, "John Doe");
    assert_eq!(loaded.email, "john@example.com");
}

#[test]
fn save_ignores_caller_supplied_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let saved = repo
        .save_user(&User::with_id(500, "Ada", "ada@example.com"))
        .unwrap();

    assert_eq!(saved.id, Some(1));
    assert!(matches!(repo.get_user(500), Err(RepoError::NotFound(500))));
}

#[test]
fn get_missing_user_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let err = repo.get_user(1).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(1)));
}

#[test]
fn get_all_on_empty_table_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    assert!(repo.get_all_users().unwrap().is_empty());
}

#[test]
fn get_all_returns_every_saved_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let a = repo.save_user(&User::new("a", "shared@example.com")).unwrap();
    let b = repo.save_user(&User::new("b", "shared@example.com")).unwrap();

    let mut all = repo.get_all_users().unwrap();
    all.sort_by_key(|user| user.id);
    assert_eq!(all, vec![a, b]);
}

#[test]
fn accepts_arbitrary_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let saved = repo.save_user(&User::new("", "not an email ☃")).unwrap();
    let loaded = repo.get_user(saved.id.unwrap()).unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn repository_update_and_delete_on_missing_id_are_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let kept = repo.save_user(&User::new("Ada", "ada@example.com")).unwrap();

    repo.update_user(&User::with_id(77, "Ghost", "ghost@example.com"))
        .unwrap();
    repo.delete_user(77).unwrap();

    assert_eq!(repo.get_all_users().unwrap(), vec![kept]);
}

#[test]
fn repository_roundtrip_save_update_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);

    let saved = repo
        .save_user(&User::new("John Doe", "john@example.com"))
        .unwrap();
    let id = saved.id.unwrap();

    repo.update_user(&User::with_id(id, "John Smith", "john.smith@example.com"))
        .unwrap();
    let updated = repo.get_user(id).unwrap();
    assert_eq!(updated.name, "John Smith");
    assert_eq!(updated.email, "john.smith@example.com");

    repo.delete_user(id).unwrap();
    assert!(matches!(repo.get_user(id), Err(RepoError::NotFound(found)) if found == id));
}

#[test]
fn writes_on_read_only_connection_return_write_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let saved = repo
        .save_user(&User::new("John Doe", "john@example.com"))
        .unwrap();
    let id = saved.id.unwrap();
    conn.execute_batch("PRAGMA query_only = ON;").unwrap();

    let save_err = repo
        .save_user(&User::new("Jane Doe", "jane@example.com"))
        .unwrap_err();
    assert!(matches!(save_err, RepoError::Write(_)), "{save_err}");

    let update_err = repo
        .update_user(&User::with_id(id, "John Smith", "john.smith@example.com"))
        .unwrap_err();
    assert!(matches!(update_err, RepoError::Write(_)), "{update_err}");

    let delete_err = repo.delete_user(id).unwrap_err();
    assert!(matches!(delete_err, RepoError::Write(_)), "{delete_err}");

    assert_eq!(repo.get_user(id).unwrap(), saved);
}

#[test]
fn service_passes_write_errors_through_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));
    let saved = service.create_user("John Doe", "john@example.com").unwrap();
    let id = saved.id.unwrap();
    conn.execute_batch("PRAGMA query_only = ON;").unwrap();

    let create_err = service
        .create_user("Jane Doe", "jane@example.com")
        .unwrap_err();
    assert!(matches!(create_err, RepoError::Write(_)), "{create_err}");

    let update_err = service
        .update_user(id, "John Smith", "john.smith@example.com")
        .unwrap_err();
    assert!(matches!(update_err, RepoError::Write(_)), "{update_err}");

    let delete_err = service.delete_user(id).unwrap_err();
    assert!(matches!(delete_err, RepoError::Write(_)), "{delete_err}");

    assert_eq!(service.get_all_users().unwrap(), vec![saved]);
}

#[test]
fn service_update_on_missing_id_is_not_found_but_repository_update_is_not() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let err = service
        .update_user(1, "John Smith", "john.smith@example.com")
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(1)));

    service
        .repository()
        .update_user(&User::with_id(1, "John Smith", "john.smith@example.com"))
        .unwrap();
    assert!(service.get_all_users().unwrap().is_empty());
}

#[test]
fn service_delete_on_missing_id_leaves_table_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));
    service.create_user("Ada", "ada@example.com").unwrap();
    let before = service.get_all_users().unwrap();

    service.delete_user(42).unwrap();

    assert_eq!(service.get_all_users().unwrap(), before);
}

#[test]
fn service_demo_scenario() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let created = service.create_user("John Doe", "john@example.com").unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(
        service.get_user(1).unwrap(),
        User::with_id(1, "John Doe", "john@example.com")
    );

    service
        .update_user(1, "John Smith", "john.smith@example.com")
        .unwrap();
    assert_eq!(
        service.get_user(1).unwrap(),
        User::with_id(1, "John Smith", "john.smith@example.com")
    );

    service.delete_user(1).unwrap();
    assert!(matches!(service.get_user(1), Err(RepoError::NotFound(1))));
}

#[test]
fn user_serializes_with_nullable_id() {
    let json = serde_json::to_value(User::new("Ada", "ada@example.com")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": null, "name": "Ada", "email": "ada@example.com" })
    );
}
