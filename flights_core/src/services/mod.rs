pub mod flight_generator;
pub mod flight_service;
pub mod random;
pub mod route_classifier;
pub mod status_board;

pub use flight_generator::{duration_bounds, FlightGenerator, FlightQuery, GenerationError};
pub use flight_service::FlightService;
pub use random::{source_from_config, EntropySource, RandomSource, SeededSource};
pub use route_classifier::RouteClassifier;
pub use status_board::{FlightNumberError, StatusBoard};
