use log::{error, info, warn};

use crate::account::{Account, Notice};
use crate::error::{LoginError, SignUpError};
use crate::store::CredentialStore;

/// Checks a username/password pair against the store.
///
/// The username is trimmed, the password is compared verbatim. Empty input is
/// rejected before the store is queried.
pub fn login(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<bool, LoginError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::EmptyFields);
    }
    let matched = store.verify(username, password)?;
    if matched {
        info!("Login succeeded for '{}'", username);
    } else {
        warn!("Login rejected for '{}'", username);
    }
    Ok(matched)
}

/// Creates an account when the username is free and both passwords agree.
///
/// The existence check and the insert are two separate store calls, so two
/// concurrent registrations of one name can both pass the check.
pub fn register(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Account, SignUpError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(SignUpError::EmptyFields);
    }
    if password != confirm {
        return Err(SignUpError::PasswordMismatch);
    }
    if store.username_exists(username)? {
        return Err(SignUpError::UsernameTaken);
    }

    let account = Account {
        username: username.to_string(),
        password: password.to_string(),
    };
    store.insert(&account)?;
    info!("Registered account '{}'", account.username);
    Ok(account)
}

pub fn login_notice(username: &str, outcome: &Result<bool, LoginError>) -> Notice {
    match outcome {
        Ok(true) => Notice::info(
            "Welcome!",
            format!("Hello, {}! You have successfully logged in.", username.trim()),
        ),
        Ok(false) => Notice::error("Access Denied", "Invalid username or password. Please try again!"),
        Err(LoginError::EmptyFields) => {
            Notice::warning("Input Error", "Please enter both username and password.")
        }
        Err(LoginError::Store(err)) => {
            error!("Login query failed: {}", err);
            Notice::error(
                "Database Error",
                format!("Error connecting to the database:\n{}", err),
            )
        }
    }
}

pub fn sign_up_notice(outcome: &Result<Account, SignUpError>) -> Notice {
    match outcome {
        Ok(_) => Notice::info("Success", "Account created successfully! You can now log in."),
        Err(SignUpError::EmptyFields) => Notice::warning("Input Error", "Please fill in all fields."),
        Err(SignUpError::PasswordMismatch) => {
            Notice::warning("Password Mismatch", "Passwords do not match.")
        }
        Err(SignUpError::UsernameTaken) => Notice::warning(
            "Username Taken",
            "Username already taken, please choose another.",
        ),
        Err(SignUpError::Store(err)) => {
            error!("Registration query failed: {}", err);
            Notice::error("Database Error", format!("Error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::NoticeKind;
    use crate::error::StoreError;
    use crate::store::memory::MemoryStore;

    #[test]
    fn register_then_login_example() {
        let store = MemoryStore::default();

        assert!(register(&store, "alice", "pw1", "pw1").is_ok());
        assert!(login(&store, "alice", "pw1").unwrap());
        assert!(!login(&store, "alice", "wrong").unwrap());
        assert!(matches!(
            register(&store, "alice", "pw2", "pw2"),
            Err(SignUpError::UsernameTaken)
        ));
        assert_eq!(store.accounts.borrow().len(), 1);
    }

    #[test]
    fn every_registered_account_can_log_in() {
        let store = MemoryStore::default();
        let accounts = [("alice", "pw1"), ("bob", "hunter2"), ("carol", " spaced pw ")];
        for (name, pw) in accounts {
            register(&store, name, pw, pw).unwrap();
        }
        for (name, pw) in accounts {
            assert!(login(&store, name, pw).unwrap());
            assert!(!login(&store, name, &format!("{pw}x")).unwrap());
        }
    }

    #[test]
    fn empty_input_never_reaches_the_store() {
        let store = MemoryStore::default();

        assert!(matches!(login(&store, "", "pw"), Err(LoginError::EmptyFields)));
        assert!(matches!(login(&store, "   ", "pw"), Err(LoginError::EmptyFields)));
        assert!(matches!(login(&store, "alice", ""), Err(LoginError::EmptyFields)));
        assert!(matches!(register(&store, " ", "a", "a"), Err(SignUpError::EmptyFields)));
        assert!(matches!(register(&store, "alice", "", ""), Err(SignUpError::EmptyFields)));
        assert!(matches!(register(&store, "alice", "a", ""), Err(SignUpError::EmptyFields)));
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn mismatch_is_rejected_before_the_store() {
        let store = MemoryStore::default();
        let outcome = register(&store, "alice", "pw1", "pw2");
        assert!(matches!(outcome, Err(SignUpError::PasswordMismatch)));
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn username_is_trimmed_but_password_is_not() {
        let store = MemoryStore::default();
        let account = register(&store, "  alice ", " pw ", " pw ").unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.password, " pw ");

        assert!(login(&store, "alice  ", " pw ").unwrap());
        assert!(!login(&store, "alice", "pw").unwrap());
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let store = MemoryStore::default();
        register(&store, "alice", "pw1", "pw1").unwrap();
        assert!(!login(&store, "Alice", "pw1").unwrap());
        assert!(register(&store, "Alice", "pw1", "pw1").is_ok());
    }

    #[test]
    fn store_failures_are_distinguishable() {
        let store = MemoryStore::offline();
        assert!(matches!(login(&store, "alice", "pw1"), Err(LoginError::Store(_))));
        assert!(matches!(register(&store, "alice", "pw1", "pw1"), Err(SignUpError::Store(_))));
    }

    #[test]
    fn duplicate_from_storage_reads_as_taken() {
        let err: SignUpError = StoreError::Duplicate.into();
        assert!(matches!(err, SignUpError::UsernameTaken));
    }

    #[test]
    fn notices_match_outcomes() {
        let welcome = login_notice(" alice ", &Ok(true));
        assert_eq!(welcome.kind, NoticeKind::Info);
        assert!(welcome.body.starts_with("Hello, alice!"));

        assert_eq!(login_notice("alice", &Ok(false)).title, "Access Denied");
        assert_eq!(login_notice("", &Err(LoginError::EmptyFields)).title, "Input Error");

        let db = login_notice("alice", &Err(LoginError::Store(StoreError::Timeout)));
        assert_eq!(db.kind, NoticeKind::Error);
        assert_eq!(db.title, "Database Error");

        assert_eq!(sign_up_notice(&Err(SignUpError::PasswordMismatch)).title, "Password Mismatch");
        assert_eq!(sign_up_notice(&Err(SignUpError::UsernameTaken)).title, "Username Taken");
        assert_eq!(sign_up_notice(&Err(SignUpError::EmptyFields)).title, "Input Error");

        let outage = sign_up_notice(&Err(SignUpError::Store(StoreError::Timeout)));
        assert_eq!(outage.kind, NoticeKind::Error);
        assert_eq!(outage.title, "Database Error");
        assert!(outage.body.starts_with("Error: "));

        let created = Account { username: "a".into(), password: "b".into() };
        assert_eq!(sign_up_notice(&Ok(created)).title, "Success");
    }
}
