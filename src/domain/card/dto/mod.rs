pub mod create_card_request;
