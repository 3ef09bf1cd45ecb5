#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // archidius-backend started with its default SERVER_ADDR
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Served by the backend itself in production
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}
