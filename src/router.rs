//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications;
//! Swagger UI serves the interactive documentation at `/api/docs`. The
//! uploads tree is served statically under `/uploads`.

use axum::Router;
use tower_http::services::ServeDir;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router: API routes, Swagger UI and the
/// static uploads tree.
pub fn routes(state: &AppState) -> Router<AppState> {
    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.get_or_insert_with(Default::default);
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }

    #[derive(OpenApi)]
    #[openapi(
        info(title = "Fabrica", description = "Fabrica content API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::market::MARKET_TAG, description = "Market API routes"),
            (name = controller::product_group::PRODUCT_GROUP_TAG, description = "Product group API routes"),
            (name = controller::product::PRODUCT_TAG, description = "Product API routes"),
            (name = controller::solution::SOLUTION_TAG, description = "Solution API routes"),
            (name = controller::qm_document::QM_DOCUMENT_TAG, description = "QM document API routes"),
            (name = controller::about::ABOUT_TAG, description = "About page API routes"),
            (name = controller::block::BLOCK_TAG, description = "Content block API routes"),
            (name = controller::catalog::CATALOG_TAG, description = "Catalog API routes"),
            (name = controller::upload::UPLOAD_TAG, description = "File upload API routes"),
            (name = controller::contact::CONTACT_TAG, description = "Contact form API routes"),
            (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(
            controller::market::list_markets,
            controller::market::create_market
        ))
        .routes(routes!(
            controller::market::get_market,
            controller::market::update_market,
            controller::market::delete_market
        ))
        .routes(routes!(
            controller::market::get_market_contents,
            controller::market::set_market_contents
        ))
        .routes(routes!(
            controller::product_group::list_product_groups,
            controller::product_group::create_product_group
        ))
        .routes(routes!(
            controller::product_group::get_product_group,
            controller::product_group::update_product_group,
            controller::product_group::delete_product_group
        ))
        .routes(routes!(
            controller::product::list_products,
            controller::product::create_product
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(controller::product::list_product_catalogs))
        .routes(routes!(
            controller::solution::list_solutions,
            controller::solution::create_solution
        ))
        .routes(routes!(
            controller::solution::get_solution,
            controller::solution::update_solution,
            controller::solution::delete_solution
        ))
        .routes(routes!(controller::solution::get_solution_by_slug))
        .routes(routes!(
            controller::solution::list_solution_blocks,
            controller::solution::add_solution_block
        ))
        .routes(routes!(controller::solution::list_solution_blocks_grouped))
        .routes(routes!(
            controller::qm_document::list_qm_documents,
            controller::qm_document::create_qm_document
        ))
        .routes(routes!(
            controller::qm_document::get_qm_document,
            controller::qm_document::update_qm_document,
            controller::qm_document::delete_qm_document
        ))
        .routes(routes!(
            controller::about::get_about,
            controller::about::update_about
        ))
        .routes(routes!(
            controller::about::list_about_blocks,
            controller::about::add_about_block
        ))
        .routes(routes!(controller::about::list_about_blocks_grouped))
        .routes(routes!(controller::block::update_block))
        .routes(routes!(controller::block::delete_blocks))
        .routes(routes!(controller::catalog::create_catalog))
        .routes(routes!(controller::catalog::delete_catalog))
        .routes(routes!(controller::upload::upload_image))
        .routes(routes!(controller::upload::upload_pdf))
        .routes(routes!(controller::contact::submit_contact))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/uploads", ServeDir::new(state.storage.root()))
}
