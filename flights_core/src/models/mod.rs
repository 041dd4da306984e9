pub mod airport;
pub mod destination;
pub mod fare;
pub mod flight;
pub mod request;
pub mod route;
pub mod search;
pub mod status;

pub use airport::{Airport, AirportCode};
pub use destination::PopularDestination;
pub use fare::{CabinClass, Currency};
pub use flight::{FlightOption, FlightSearchResult, FlightSegment};
pub use request::ApiResponse;
pub use route::{Route, RouteClass};
pub use search::{FlightSearchPayload, SearchRequest};
pub use status::{FlightStatus, FlightStatusRecord};
