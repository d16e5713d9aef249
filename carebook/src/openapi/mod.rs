//! OpenAPI documentation for the `/api` endpoints.
//!
//! Served as JSON at `/api-docs/openapi.json` and rendered with Scalar at `/docs`.

use utoipa::OpenApi;

use crate::{api, errors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carebook API",
        description = "Provider accounts and per-provider patient records."
    ),
    servers(
        (url = "/api", description = "Carebook API server")
    ),
    paths(
        api::handlers::auth::signup,
        api::handlers::auth::login,
        api::handlers::patients::list_patients,
        api::handlers::patients::create_patient,
    ),
    components(
        schemas(
            api::models::auth::SignupRequest,
            api::models::auth::LoginRequest,
            api::models::auth::ProviderIdResponse,
            api::models::patients::PatientCreate,
            api::models::patients::PatientResponse,
            errors::ErrorBody,
        )
    ),
    tags(
        (name = "authentication", description = "Provider signup and login.

Both return the `provider_id` to pass on every patient request."),
        (name = "patients", description = "Create and list the patients of a provider.

Names are trimmed and capitalized before storage, and each provider can hold a given patient (first name, last name, date of birth) only once."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/signup"));
        assert!(paths.contains(&"/login"));
        assert!(paths.contains(&"/patients"));

        let patients = &doc.paths.paths["/patients"];
        assert!(patients.get.is_some());
        assert!(patients.post.is_some());
    }
}
