pub mod progress_service;
