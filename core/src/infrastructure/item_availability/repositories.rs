pub mod item_availability_repository;
