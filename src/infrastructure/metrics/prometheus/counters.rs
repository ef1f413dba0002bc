use metrics::counter;

/// Increment the envelope counter for one written response.
pub fn increment_response(intent: &'static str, status: u16) {
    counter!(
        "envelope_responses_total",
        "intent" => intent,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment the error counter, split by status family.
pub fn increment_error(status: u16) {
    let family = if status >= 500 { "server" } else { "client" };
    counter!("envelope_errors_total", "family" => family).increment(1);
}
