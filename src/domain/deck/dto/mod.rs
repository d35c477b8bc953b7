pub mod create_deck_request;
