use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::patch_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::movie::model::Movie,
            crate::modules::movie::dto::CreateMovieDto,
            crate::modules::movie::dto::UpdateMovieDto,
            crate::modules::movie::dto::ReadMovieDto,
            crate::modules::movie::patch::PatchOp,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalog management")
    )
)]
pub struct ApiDoc;
