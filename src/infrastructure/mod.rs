pub mod guess_services;
