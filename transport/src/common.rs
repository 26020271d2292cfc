use fixture_core::error::FixtureError;

/// Map a reqwest failure onto the fixture error taxonomy
pub(crate) fn reqwest_error_to_fixture_error(error: reqwest::Error) -> FixtureError {
    if let Some(status) = error.status() {
        return FixtureError::Status(status.as_u16());
    }

    if error.is_decode() {
        return FixtureError::decode(error);
    }

    if error.is_builder() {
        return FixtureError::Configuration(format!("Invalid request: {error}"));
    }

    FixtureError::transport(error)
}
