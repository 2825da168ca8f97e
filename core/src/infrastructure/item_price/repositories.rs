pub mod item_price_repository;
