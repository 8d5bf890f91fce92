#[cfg(debug_assertions)]
pub fn get_booking_api_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_booking_api_url() -> &'static str {
    ""  // Filled in once the booking backend exists
}

/// External analytics collector (GA4, pixel, ...). None until one is chosen;
/// event dispatch no-ops silently without it.
pub fn analytics_collector() -> Option<&'static str> {
    None
}
