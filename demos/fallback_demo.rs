//! Recovers from failing computations and wraps the ones that cannot be.
//!
//! Run with `RUST_LOG=terse=debug` to see each recovery being attempted.

use std::convert::Infallible;
use std::error::Error;
use terse::fallback::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn divide_unsigned(dividend: u32, divisor: u32) -> Result<u32, String> {
    dividend.checked_div(divisor).ok_or_else(|| "/ by zero".to_string())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,terse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let divisor = 0;

    let result = run_or_recover(|| divide_unsigned(1, divisor), |_| Ok::<_, Infallible>(u32::MAX));
    println!("{result:?}"); // Ok(4294967295)

    match run_or_fail(|| "String".parse::<std::net::IpAddr>()) {
        Ok(address) => println!("{address}"),
        Err(wrapped) => {
            // wrapped failure: invalid IP address syntax
            println!("{wrapped}");
            if let Some(cause) = wrapped.source() {
                println!("caused by: {cause}");
            }
        }
    }

    let outcome = perform_or_recover(
        || {
            println!("{}", divide_unsigned(1, divisor)?);
            Ok::<_, String>(())
        },
        |failure| {
            eprintln!("{failure}"); // "/ by zero"
            Ok::<_, Infallible>(())
        },
    );
    println!("recovered: {}", outcome.is_ok());

    // Integer division by zero panics; the panic is caught and wrapped.
    std::panic::set_hook(Box::new(|_| {}));
    let zero = std::hint::black_box(0_i32);
    if let Err(wrapped) = perform_or_fail(|| {
        println!("{}", 1 / zero);
        Ok::<_, Infallible>(())
    }) {
        eprintln!("{wrapped}"); // wrapped failure: panicked: attempt to divide by zero
    }
}
