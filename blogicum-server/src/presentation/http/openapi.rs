use utoipa::OpenApi;

use crate::presentation::http::handlers::posts::{
    AuthorDto, CategoryDto, CategoryPostsDto, LocationDto, PostDto, RecentPostsQuery,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::posts::list_recent_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::list_category_posts
    ),
    components(
        schemas(
            RecentPostsQuery,
            AuthorDto,
            LocationDto,
            CategoryDto,
            PostDto,
            CategoryPostsDto
        )
    ),
    tags(
        (name = "posts", description = "Published posts"),
        (name = "categories", description = "Published categories")
    )
)]
pub(crate) struct ApiDoc;
