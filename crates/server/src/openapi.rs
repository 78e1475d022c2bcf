use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Content as sent and returned by the API
#[derive(ToSchema)]
#[schema(as = Content)]
#[allow(non_snake_case)]
pub struct ContentDoc {
    /// Assigned by the server; ignored on create and update
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub yearOfRelease: Option<i64>,
}

#[derive(ToSchema)]
#[schema(as = ErrorEntry)]
#[allow(non_snake_case)]
pub struct ErrorEntryDoc {
    /// Absent for errors not tied to a field
    pub fieldName: Option<String>,
    pub message: String,
    /// `ValidationError`, `IllegalArgument` or `InternalError`
    pub exceptionName: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contents::list,
        crate::routes::contents::get,
        crate::routes::contents::create,
        crate::routes::contents::update,
        crate::routes::contents::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ContentDoc,
            ErrorEntryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contents")
    )
)]
pub struct ApiDoc;
