pub mod record_answer_request;
