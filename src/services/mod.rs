pub mod normalizer;
pub mod search_service;
pub mod validator;
