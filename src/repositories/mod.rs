pub mod resource_repository;
