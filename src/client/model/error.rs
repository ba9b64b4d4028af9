/// Failed API call as shown on the dashboard.
///
/// `status` is the HTTP status of the response, or 500 when the request never got a
/// usable answer (network failure, unparsable body).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Error raised in the browser before or after the round trip.
    pub fn local(context: &str, err: impl std::fmt::Display) -> Self {
        Self {
            status: 500,
            message: format!("{}: {}", context, err),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}
