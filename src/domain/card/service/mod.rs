pub mod card_service;
