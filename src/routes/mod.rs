pub mod resource_routes;
