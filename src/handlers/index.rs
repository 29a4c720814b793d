pub const GREETING: &str = "Hello Swimming World";

/// GET / -> plain greeting.
pub async fn index_handler() -> &'static str {
    GREETING
}
