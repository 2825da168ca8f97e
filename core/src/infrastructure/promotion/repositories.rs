pub mod promotion_repository;
