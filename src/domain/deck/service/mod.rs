pub mod deck_service;
