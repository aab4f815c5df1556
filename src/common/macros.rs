/// Logs a fetch failure that is about to be folded into a slot's state.
///
/// Usage: `log_fetch_err!("latest_articles", ticket, &err);`
#[macro_export]
macro_rules! log_fetch_err {
    ($slot:expr, $ticket:expr, $err:expr) => {
        ::tracing::error!(
            slot = $slot,
            ticket = $ticket,
            error = %$err,
            "fetch failed"
        )
    };
}
