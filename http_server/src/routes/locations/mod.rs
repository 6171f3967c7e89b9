use actix_web::web;

mod create_location;
pub mod filters;
mod get_location;
mod list_locations;
mod update_location;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations")
            .service(
                web::resource("")
                    .route(web::get().to(list_locations::list_locations))
                    .route(web::post().to(create_location::create_location)),
            )
            .service(
                web::resource("/{location_id}")
                    .route(web::get().to(get_location::get_location))
                    .route(web::put().to(update_location::update_location)),
            ),
    );
}

#[cfg(test)]
mod tests;
