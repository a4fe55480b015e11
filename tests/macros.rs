mod common;

use catch_this::{dispatch, raise, DynError, ErrorHandle, OpaquePanic};
use common::{DiskFull, InvalidInput, NetworkTimeout, OutOfMemory, StorageError};

fn captured<E: std::error::Error + Send + Sync + 'static>(error: E) -> ErrorHandle {
    ErrorHandle::capture(|| { raise(error); }).unwrap_err()
}

// ============================================================
// Clause forms
// ============================================================

#[test]
fn test_typed_clauses() {
    let handle = captured(NetworkTimeout(30));
    let result = dispatch! { handle =>
        catch DiskFull(_) { 0 }
        catch NetworkTimeout(e) { e.0 }
        catch OutOfMemory(_) { 1 }
    };
    assert_eq!(result, Some(30));
}

#[test]
fn test_shorthand_clauses() {
    let handle = captured(OutOfMemory);
    let result = dispatch! { handle =>
        catch DiskFull { "disk" }
        catch OutOfMemory { "memory" }
    };
    assert_eq!(result, Some("memory"));
}

#[test]
fn test_no_match_is_none() {
    let handle = captured(InvalidInput("bad".into()));
    let result = dispatch! { handle =>
        catch DiskFull { 1 }
        catch NetworkTimeout { 2 }
        catch OutOfMemory { 3 }
    };
    assert_eq!(result, None);
}

#[test]
fn test_qualified_type_paths() {
    let handle = ErrorHandle::new(std::fmt::Error);
    let result = dispatch! { handle =>
        catch std::io::Error(e) { e.to_string() }
        catch ::std::fmt::Error(e) { e.to_string() }
    };
    assert_eq!(result.as_deref(), Some("an error occurred when formatting an argument"));
}

#[test]
fn test_panic_message_clause() {
    let handle = ErrorHandle::capture(|| { panic!("queue {} stalled", 4); }).unwrap_err();
    let result = dispatch! { handle =>
        catch DiskFull { String::new() }
        catch str(msg) { msg.to_owned() }
    };
    assert_eq!(result.as_deref(), Some("queue 4 stalled"));
}

#[test]
fn test_dyn_error_clause_follows_order() {
    let handle = captured(StorageError::Disk(DiskFull));
    let result = dispatch! { handle =>
        catch DynError(e) { e.source().is_some() }
        catch StorageError { false }
    };
    assert_eq!(result, Some(true));
}

#[test]
fn test_opaque_panic_clause() {
    let handle = ErrorHandle::capture(|| { std::panic::panic_any(7i64); }).unwrap_err();
    let result = dispatch! { handle =>
        catch str { None }
        catch OpaquePanic(p) { p.with(|n: &i64| *n) }
    };
    assert_eq!(result, Some(Some(7)));
}

// ============================================================
// Fallbacks
// ============================================================

#[test]
fn test_else_block_runs_on_mismatch() {
    let handle = captured(DiskFull);
    let result: i32 = dispatch! { handle =>
        catch NetworkTimeout { 1 }
        else { -1 }
    };
    assert_eq!(result, -1);
}

#[test]
fn test_else_block_skipped_on_match() {
    let handle = captured(NetworkTimeout(2));
    let result: u64 = dispatch! { handle =>
        catch NetworkTimeout(e) { e.0 }
        else { 0 }
    };
    assert_eq!(result, 2);
}

#[test]
fn test_else_escalate_on_match() {
    let handle = captured(DiskFull);
    let result: &str = dispatch! { handle =>
        catch DiskFull { "handled" }
        else escalate
    };
    assert_eq!(result, "handled");
}

#[test]
fn test_else_block_can_reraise() {
    let handle = captured(OutOfMemory);
    let escaped = ErrorHandle::capture(|| {
        dispatch! { &handle =>
            catch DiskFull { }
            else { handle.clone().reraise() }
        }
    })
    .unwrap_err();
    assert!(escaped.ptr_eq(&handle));
}

// ============================================================
// Edge cases
// ============================================================

#[test]
fn test_reference_and_owned_handles() {
    let handle = captured(DiskFull);
    let by_ref = dispatch! { &handle => catch DiskFull { 1 } };
    let by_value = dispatch! { handle => catch DiskFull { 2 } };
    assert_eq!((by_ref, by_value), (Some(1), Some(2)));
}

#[test]
fn test_no_clauses() {
    let handle = captured(DiskFull);
    let result: Option<()> = dispatch! { handle => };
    assert_eq!(result, None);

    let mut fell_through = false;
    dispatch! { handle => else { fell_through = true; } };
    assert!(fell_through);
}

#[test]
fn test_empty_handle_takes_fallback() {
    let result = dispatch! { ErrorHandle::empty() =>
        catch DiskFull { 1 }
        catch str { 2 }
        else { 0 }
    };
    assert_eq!(result, 0);
}

#[test]
fn test_more_clauses_than_one_chain_holds() {
    assert_eq!(catch_this::MAX_CHAIN_LEN, 12);

    let handle = captured(InvalidInput("thirteenth".into()));
    let result = dispatch! { handle =>
        catch DiskFull { 1 }
        catch NetworkTimeout { 2 }
        catch OutOfMemory { 3 }
        catch StorageError { 4 }
        catch std::io::Error { 5 }
        catch std::fmt::Error { 6 }
        catch std::num::ParseIntError { 7 }
        catch std::num::ParseFloatError { 8 }
        catch std::str::Utf8Error { 9 }
        catch std::string::FromUtf8Error { 10 }
        catch std::num::TryFromIntError { 11 }
        catch std::char::ParseCharError { 12 }
        catch InvalidInput(e) { e.0.len() }
    };
    assert_eq!(result, Some(10));
}

#[test]
fn test_first_group_wins_before_later_groups() {
    let handle = captured(DiskFull);
    let result = dispatch! { handle =>
        catch OutOfMemory { 1 }
        catch NetworkTimeout { 2 }
        catch InvalidInput { 3 }
        catch StorageError { 4 }
        catch std::io::Error { 5 }
        catch std::fmt::Error { 6 }
        catch std::num::ParseIntError { 7 }
        catch std::num::ParseFloatError { 8 }
        catch std::str::Utf8Error { 9 }
        catch std::string::FromUtf8Error { 10 }
        catch std::num::TryFromIntError { 11 }
        catch DynError { 12 }
        catch DiskFull { 13 }
    };
    assert_eq!(result, Some(12));
}
