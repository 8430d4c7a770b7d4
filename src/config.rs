#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001" // Local form endpoint when developing
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // Same origin in production, the form endpoint sits behind the site's proxy
}
