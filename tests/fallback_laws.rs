#![cfg(feature = "fallback")]
//! Property-based tests for the fallback executors.
//!
//! These tests verify that the executors never swallow a failure and never
//! run the recovery when the primary computation succeeds.

use proptest::prelude::*;
use std::cell::Cell;
use std::convert::Infallible;
use terse::fallback::*;

// =============================================================================
// Success Identity Law
// Description: run_or_recover(Ok(v), r) == Ok(v) and r is never called
// =============================================================================

proptest! {
    #[test]
    fn prop_successful_primary_skips_recovery(value in any::<i64>(), fallback in any::<i64>()) {
        let recovery_calls = Cell::new(0);
        let result = run_or_recover(
            || Ok::<_, String>(value),
            |_| {
                recovery_calls.set(recovery_calls.get() + 1);
                Ok::<_, Infallible>(fallback)
            },
        );

        prop_assert_eq!(result, Ok(value));
        prop_assert_eq!(recovery_calls.get(), 0);
    }
}

// =============================================================================
// Recovery Law
// Description: run_or_recover(Err(e), r) == r(Error(e))
// =============================================================================

proptest! {
    #[test]
    fn prop_failed_primary_yields_recovery_result(error in ".*", fallback in any::<i32>()) {
        let expected_failure = Failure::Error(error.clone());
        let result = run_or_recover(
            || Err::<i32, _>(error),
            |failure| {
                if failure == expected_failure {
                    Ok::<_, Infallible>(fallback)
                } else {
                    Ok(fallback.wrapping_add(1))
                }
            },
        );

        prop_assert_eq!(result, Ok(fallback));
    }
}

// =============================================================================
// No Swallow Law
// Description: When both computations fail, the recovery failure is the cause
// =============================================================================

proptest! {
    #[test]
    fn prop_double_failure_is_wrapped(primary_error in any::<u16>(), recovery_error in any::<u16>()) {
        let result = run_or_recover(|| Err::<(), _>(primary_error), |_| Err(recovery_error));
        prop_assert_eq!(result, Err(WrappedFailure::new(Failure::Error(recovery_error))));
    }
}

// =============================================================================
// Fail Identity Law
// Description: run_or_fail is Ok(v) for success and Wrapped(Error(e)) for Err(e)
// =============================================================================

proptest! {
    #[test]
    fn prop_run_or_fail_preserves_outcome(outcome in prop::result::maybe_ok(any::<u8>(), any::<i8>())) {
        let result = run_or_fail(|| outcome);
        let expected = outcome.map_err(|error| WrappedFailure::new(Failure::Error(error)));
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Panic Capture Law
// Description: Any panic message is preserved in the wrapped failure
// =============================================================================

proptest! {
    #[test]
    fn prop_panic_message_is_preserved(message in "[a-z ]{1,20}") {
        let result = perform_or_fail(|| -> Result<(), Infallible> { panic!("{message}") });
        let wrapped = result.unwrap_err();
        prop_assert_eq!(wrapped.cause(), &Failure::Panic(PanicFailure::new(message)));
    }
}

// =============================================================================
// Unit Form Law
// Description: perform_or_recover agrees with run_or_recover on unit values
// =============================================================================

proptest! {
    #[test]
    fn prop_unit_forms_agree(primary_ok in any::<bool>(), recovery_ok in any::<bool>()) {
        let primary = || if primary_ok { Ok(()) } else { Err("primary") };
        let recovery = |_: Failure<&str>| if recovery_ok { Ok(()) } else { Err("recovery") };

        prop_assert_eq!(
            perform_or_recover(primary, recovery),
            run_or_recover(primary, recovery)
        );
    }
}
