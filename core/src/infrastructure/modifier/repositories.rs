pub mod modifier_repository;
